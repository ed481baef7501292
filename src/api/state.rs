//! Application state for the roster API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::RosterResult;
use crate::parsing::RosterBuilder;

/// Shared application state.
///
/// Holds the roster builder, whose name pattern is compiled once at startup.
#[derive(Clone)]
pub struct AppState {
    builder: Arc<RosterBuilder>,
}

impl AppState {
    /// Creates application state from loaded configuration.
    ///
    /// Fails if the configured name pattern does not compile.
    pub fn new(config: &ConfigLoader) -> RosterResult<Self> {
        let builder = RosterBuilder::new(config.scanner())?;
        Ok(Self {
            builder: Arc::new(builder),
        })
    }

    /// Returns the roster builder.
    pub fn builder(&self) -> &RosterBuilder {
        &self.builder
    }
}
