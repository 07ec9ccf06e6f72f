//! One-shot location lookup at the host boundary.
//!
//! Each invocation is an independent request: no deduplication of overlapping
//! requests, no automatic retry, and no fallback to a cached reading. Hosts
//! without a location service fail immediately with the unsupported variant
//! instead of hanging.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::geo::LatLng;

/// Host location service consumed by the map view.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Sample the current position once. Failure variants are
    /// [`Error::LocationDenied`], [`Error::LocationUnsupported`], and
    /// [`Error::LocationTimeout`].
    async fn current_position(&self) -> Result<LatLng>;
}

/// Stand-in for hosts with no location service.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocationProvider;

#[async_trait]
impl LocationProvider for UnsupportedLocationProvider {
    async fn current_position(&self) -> Result<LatLng> {
        Err(Error::LocationUnsupported)
    }
}

/// Always answers with a configured reading; used by the CLI (the position
/// arrives as flags) and by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    position: LatLng,
}

impl FixedLocationProvider {
    pub fn new(position: LatLng) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<LatLng> {
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unsupported_host_fails_immediately() {
        let provider = UnsupportedLocationProvider;
        match provider.current_position().await {
            Err(Error::LocationUnsupported) => {}
            other => panic!("expected unsupported, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fixed_provider_returns_its_reading() {
        let provider = FixedLocationProvider::new(LatLng::new(12.8230, 80.0408));
        let position = provider.current_position().await.unwrap();
        assert_eq!(position, LatLng::new(12.8230, 80.0408));
    }
}
