mod config;
mod error;
mod models;
mod net;
mod paths;
mod privilege;
mod runner;
mod services;
#[cfg(test)]
mod testing;
mod ui;

use crate::config::Config;
use crate::privilege::{PrivilegeProvider, ShellPrivilege};
use crate::runner::SystemRunner;
use crate::services::RepairService;
use crate::ui::Reporter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netrepair=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!("Starting netrepair with config: {:?}", config);

    if !config.skip_elevation_check {
        let provider = ShellPrivilege;
        if !provider.is_elevated() {
            if provider.request_elevation() {
                // The elevated instance does the actual work.
                return Ok(());
            }
            eprintln!("Administrator privileges are required to run this program");
            std::process::exit(1);
        }
    }

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let reporter = Reporter::new(tx);

    let service = RepairService::new(
        SystemRunner,
        net::dns::system_provider(),
        config.settle_delay(),
    );

    let worker = tokio::spawn(async move {
        service.run(&reporter).await;
    });

    ui::render_events(rx).await;
    worker.await?;

    Ok(())
}
