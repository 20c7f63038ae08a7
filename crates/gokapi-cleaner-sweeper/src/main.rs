use std::process::ExitCode;

use clap::Parser;
use gokapi_cleaner_service::HttpFileService;
use gokapi_cleaner_sweeper::config::CleanerConfig;
use gokapi_cleaner_sweeper::logging;
use gokapi_cleaner_sweeper::sweeper::{SweepError, Sweeper};
use tracing::{debug, error, info, warn};

const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let config = CleanerConfig::parse();
    logging::init(config.verbose);
    debug!("called with: {}", config.redacted());

    let service = HttpFileService::new(&config.url, config.api_key.clone());
    let mut sweeper = Sweeper::new(&service, config.dry_run);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for interrupt: {e}");
            std::future::pending::<()>().await;
        }
    };

    match sweeper.run_until(shutdown).await {
        Ok(report) => {
            info!(
                "sweep finished: listed={} expired={} deleted={} dry_run={}",
                report.listed, report.expired, report.deleted, report.dry_run
            );
            ExitCode::SUCCESS
        }
        Err(SweepError::Interrupted) => {
            error!("interrupted by user");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(e) => {
            error!("{e}, abort");
            ExitCode::FAILURE
        }
    }
}
