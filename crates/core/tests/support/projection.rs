//! Stub projection engines for translation tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use qbgeo_core::ProjectionService;
use qbgeo_domain::{ConnectorError, Geometry, Result, SpatialReference};

/// Offset applied to point coordinates when projecting out of WGS84.
pub const OFFSET: f64 = 1_000.0;

/// Projection stub that stamps the target reference on every geometry and
/// shifts points by [`OFFSET`] when the target is not WGS84.
///
/// Counts `load` and `project` calls so tests can check that the engine is
/// readied before use.
#[derive(Default)]
pub struct StubProjection {
    loads: AtomicUsize,
    projections: AtomicUsize,
}

impl StubProjection {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn projections(&self) -> usize {
        self.projections.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectionService for StubProjection {
    async fn load(&self) -> Result<()> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn project(&self, geometry: &Geometry, target: &SpatialReference) -> Result<Geometry> {
        assert!(self.loads() > 0, "project called before load");
        self.projections.fetch_add(1, Ordering::SeqCst);

        let mut projected = geometry.clone();
        if let Geometry::Point(point) = &mut projected {
            if !target.is_wgs84() {
                point.x += OFFSET;
                point.y += OFFSET;
            }
        }
        projected.set_spatial_reference(target.clone());
        Ok(projected)
    }
}

/// Projection engine that never becomes ready.
pub struct FailingProjection;

#[async_trait]
impl ProjectionService for FailingProjection {
    async fn load(&self) -> Result<()> {
        Err(ConnectorError::Projection("engine unavailable".into()))
    }

    fn project(&self, _geometry: &Geometry, _target: &SpatialReference) -> Result<Geometry> {
        Err(ConnectorError::Projection("engine unavailable".into()))
    }
}
