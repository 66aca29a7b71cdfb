//! Fingerprint bridge service.
//!
//! Connects to the vendor fingerprint service, wraps it in the standardized
//! contract and runs a scripted session against it. The vendor side is
//! emulated in-process.
//!
//! ```text
//! fpbridge-service [CONFIG.json] [--log-level <FILTER>]
//! ```

mod config;
mod session;

use anyhow::Result;
use clap::Parser;
use config::{EffectBackend, ServiceConfig};
use fpbridge_biometric::{CallbackBridge, RequestForwarder, StatusTranslator, connect};
use fpbridge_hardware::mock::{MockServiceLookup, MockVendor};
use fpbridge_hardware::traits::EffectChannel;
use fpbridge_hardware::{LoggingEffectChannel, SysfsEffectChannel};
use session::{EMULATED_DEVICE_ID, LoggingClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Fingerprint bridge service
#[derive(Parser, Debug)]
#[command(name = "fpbridge-service", version, about)]
struct Args {
    /// JSON configuration file; defaults apply when omitted
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long, short = 'l')]
    log_level: Option<String>,
}

fn effect_channel(config: &ServiceConfig) -> Arc<dyn EffectChannel> {
    match config.effect_backend {
        EffectBackend::Sysfs => Arc::new(SysfsEffectChannel::new(config.effects.clone())),
        EffectBackend::Log => Arc::new(LoggingEffectChannel),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServiceConfig::load(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        version = fpbridge_core::VERSION,
        policy = ?config.unknown_code_policy,
        backend = ?config.effect_backend,
        "Starting fingerprint bridge"
    );

    let (vendor, vendor_handle) = MockVendor::new(EMULATED_DEVICE_ID);
    let lookup = MockServiceLookup::new(Arc::new(vendor), 0);

    let vendor = match connect(&lookup, &config.connector).await {
        Ok(vendor) => vendor,
        Err(e) => {
            error!(error = %e, "Cannot start without the vendor service");
            std::process::exit(1);
        }
    };

    let bridge = Arc::new(CallbackBridge::new(
        StatusTranslator::new(config.unknown_code_policy),
        effect_channel(&config),
    ));
    let service = RequestForwarder::new(vendor, bridge);

    session::run(&service, &vendor_handle, Arc::new(LoggingClient))?;

    info!("Session finished");
    Ok(())
}
