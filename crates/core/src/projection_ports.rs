//! Geometry projection port
//!
//! Reprojection math is provided by the host's geometry engine. The connector
//! only needs a readiness step and a synchronous `project` call.

use async_trait::async_trait;
use qbgeo_domain::{Geometry, Result, SpatialReference};

/// Trait for the host's projection engine
#[async_trait]
pub trait ProjectionService: Send + Sync {
    /// Prepare the engine for use.
    ///
    /// Awaited before every reprojection, so implementations must make
    /// repeated calls cheap and idempotent.
    async fn load(&self) -> Result<()>;

    /// Reproject `geometry` into `target`.
    ///
    /// The returned geometry declares `target` as its spatial reference.
    fn project(&self, geometry: &Geometry, target: &SpatialReference) -> Result<Geometry>;
}
