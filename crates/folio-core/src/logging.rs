//! Console logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured default filter applies.
//!
//! ```ignore
//! folio_core::logging::init("info")?;
//! tracing::info!("ready");
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, FolioResult};

/// Build the filter used by [`init`].
pub fn filter(default_level: &str) -> FolioResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| FolioError::Logging(format!("invalid filter '{}': {}", default_level, e))),
    }
}

/// Install the global `tracing` subscriber.
pub fn init(default_level: &str) -> FolioResult<()> {
    let filter = filter(default_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_directives() {
        assert!(filter("folio_core=debug,info").is_ok());
    }
}
