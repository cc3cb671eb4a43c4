//! Contact Store - demo entry point
//!
//! Runs a short scripted session against a fresh store and exports the
//! result to `<CONTACT_STORE_EXPORT_DIR>/<CONTACT_STORE_EXPORT_NAME>.json`.

use anyhow::{Context, Result};
use contact_store::{Config, ContactStore, ContactUpdate, Country, Gender};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Logs go to stderr; RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut store = ContactStore::with_config(&config);

    let reem = store
        .create("Reem Rashed", "0795432212", Country::Jordan, Gender::Female)
        .context("creating the first contact")?;

    // Not a valid mobile number; the store must refuse it
    match store.create("Reem Rashed", "0098877", Country::Jordan, Gender::Female) {
        Ok(c) => warn!("Unexpectedly accepted contact {}", c.id()),
        Err(e) => info!("Rejected as expected: {}", e),
    }

    store
        .update(reem.id(), ContactUpdate::PhoneNumber("0785907266".to_string()))
        .context("updating the phone number")?;

    let current = store.read(reem.id())?;
    info!(
        "Contact {}: {} {} {} {}",
        current.id(),
        current.name(),
        current.phone_number(),
        current.country(),
        current.gender()
    );

    let path = store
        .export(&config.export_name)
        .with_context(|| format!("exporting to {}", config.export_dir.display()))?;
    info!("Wrote {} contacts to {}", store.count(), path.display());

    Ok(())
}
