//! Walks a KYC form session end to end: load the NL configuration,
//! fill the editable fields, submit, and print the payload.

use std::sync::Arc;

use anyhow::Result;
use kyc_form::behavior::BehaviorRegistry;
use kyc_form::config::YamlConfigurationLoader;
use kyc_form::form::FormController;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let loader = Arc::new(YamlConfigurationLoader::new("config"));
    let mut form = FormController::new(loader, BehaviorRegistry::new());

    form.on_complete(|payload| match serde_json::to_string_pretty(payload) {
        Ok(json) => println!("submitted payload:\n{json}"),
        Err(error) => eprintln!("could not render payload: {error}"),
    });

    form.select_country("NL").await;

    println!("loaded {} fields:", form.field_states().len());
    for field in form.field_states() {
        let lock = if field.is_read_only() { " (read-only)" } else { "" };
        println!("  {}: {:?}{lock}", field.label(), field.value());
    }

    // The identity fields arrive pre-filled and locked; only the BSN is
    // left for the user.
    if let Some(bsn) = form.field_mut("bsn") {
        bsn.set_value("123456789");
    }

    form.submit();

    for field in form.field_states() {
        if let Some(message) = field.error() {
            println!("  {}: {message}", field.id());
        }
    }

    Ok(())
}
