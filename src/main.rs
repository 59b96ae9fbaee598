use approveflow::core::config::AppConfig;
use approveflow::core::telemetry;
use approveflow::App;
use leptos::prelude::*;

fn main() {
    let config = AppConfig::from_build_env();
    telemetry::init(config.log_level);
    tracing::info!(storage_key = %config.storage_key, "starting ApproveFlow");

    mount_to_body(move || view! { <App config=config.clone() /> })
}
