//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::fixture::FixtureSource;
use crate::application::ScanService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceConfig;

/// Build the scan service for the configured source.
///
/// # Errors
///
/// Returns an error if the source cannot be opened.
pub fn build_scan_service(config: &Config) -> Result<ScanService> {
    let service = match &config.source {
        SourceConfig::Fixture(fixture) => {
            let source = Arc::new(FixtureSource::load(&fixture.path)?);
            ScanService::new(source.clone(), source)
        }
    };

    let service = service.with_max_concurrent(config.scan.max_concurrent);
    info!(
        max_concurrent = service.max_concurrent(),
        "Scan service ready"
    );
    Ok(service)
}
