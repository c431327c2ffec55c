//! Record/feature translation service

use std::sync::Arc;

use qbgeo_domain::constants::OBJECT_ID_FIELD;
use qbgeo_domain::{
    attribute_key, field_key, ConnectorError, EncodedGeometry, Feature, FieldDescriptor, FieldId,
    Geometry, Point, Record, Result, SpatialReference,
};
use serde_json::Value;
use tracing::debug;

use super::temporal::to_epoch_millis;
use crate::catalog::classify;
use crate::projection_ports::ProjectionService;
use crate::selector::{GeometryBinding, ResolvedBinding};

/// Converts platform records to host features and back.
pub struct RecordTranslator {
    projection: Arc<dyn ProjectionService>,
}

impl RecordTranslator {
    pub fn new(projection: Arc<dyn ProjectionService>) -> Self {
        Self { projection }
    }

    /// Convert one platform record into a host feature.
    ///
    /// `object_id` becomes the feature's `objectid` attribute.
    pub async fn record_to_feature(
        &self,
        record: &Record,
        fields: &[FieldDescriptor],
        binding: &GeometryBinding,
        target: &SpatialReference,
        object_id: u64,
    ) -> Result<Feature> {
        let resolved = binding.resolve(fields);
        self.convert_record(record, fields, &resolved, target, object_id).await
    }

    /// Convert records in order, numbering object ids from zero.
    pub async fn records_to_features(
        &self,
        records: &[Record],
        fields: &[FieldDescriptor],
        binding: &GeometryBinding,
        target: &SpatialReference,
    ) -> Result<Vec<Feature>> {
        let resolved = binding.resolve(fields);
        let mut features = Vec::with_capacity(records.len());
        for (object_id, record) in (0_u64..).zip(records) {
            features.push(self.convert_record(record, fields, &resolved, target, object_id).await?);
        }
        debug!(count = features.len(), "Converted records to features");
        Ok(features)
    }

    /// Convert one host feature into a platform record.
    ///
    /// The feature's geometry is projected into `target` before it is stored.
    pub async fn feature_to_record(
        &self,
        feature: &Feature,
        fields: &[FieldDescriptor],
        binding: &GeometryBinding,
        target: &SpatialReference,
    ) -> Result<Record> {
        let resolved = binding.resolve(fields);
        self.convert_feature(feature, &resolved, target).await
    }

    /// Convert features in order.
    pub async fn features_to_records(
        &self,
        features: &[Feature],
        fields: &[FieldDescriptor],
        binding: &GeometryBinding,
        target: &SpatialReference,
    ) -> Result<Vec<Record>> {
        let resolved = binding.resolve(fields);
        let mut records = Vec::with_capacity(features.len());
        for feature in features {
            records.push(self.convert_feature(feature, &resolved, target).await?);
        }
        debug!(count = records.len(), "Converted features to records");
        Ok(records)
    }

    async fn convert_record(
        &self,
        record: &Record,
        fields: &[FieldDescriptor],
        binding: &ResolvedBinding,
        target: &SpatialReference,
        object_id: u64,
    ) -> Result<Feature> {
        let geometry = match source_geometry(record, binding)? {
            Some(raw) if !target.is_wgs84() => Some(self.project(&raw, target).await?),
            other => other,
        };

        let mut feature = Feature::new(geometry);
        feature.attributes.insert(OBJECT_ID_FIELD.to_string(), Value::from(object_id));

        for field in fields {
            let Some(cell) = record.get(field.id) else { continue };
            let Some(kind) = classify(&field.field_type) else { continue };
            let value =
                if kind.is_temporal() { to_epoch_millis(&cell.value) } else { cell.value.clone() };
            feature.attributes.insert(attribute_key(field.id), value);
        }

        Ok(feature)
    }

    async fn convert_feature(
        &self,
        feature: &Feature,
        binding: &ResolvedBinding,
        target: &SpatialReference,
    ) -> Result<Record> {
        let mut record = Record::new();

        for (key, value) in &feature.attributes {
            if let Some(field) = field_key(key) {
                record.set(field, value.clone());
            }
        }

        // Geometry-derived values overwrite attribute copies of the same field.
        if let Some(geometry) = &feature.geometry {
            let projected = self.project(geometry, target).await?;
            if let Some(id) = binding.geometry {
                record.set(id.to_string(), encode_geometry(projected)?);
            } else if let (Some(point), Some((lat, long))) =
                (projected.as_point(), binding.coordinates())
            {
                record.set(lat.to_string(), point.y.to_string());
                record.set(long.to_string(), point.x.to_string());
            }
        }

        Ok(record)
    }

    async fn project(&self, geometry: &Geometry, target: &SpatialReference) -> Result<Geometry> {
        self.projection.load().await?;
        self.projection.project(geometry, target)
    }
}

/// Geometry carried by a record: the encoded geometry field when it holds a
/// value, else a WGS84 point built from the latitude/longitude pair.
fn source_geometry(record: &Record, binding: &ResolvedBinding) -> Result<Option<Geometry>> {
    if let Some(value) = binding.geometry.and_then(|id| present_value(record, id)) {
        return decode_geometry(value);
    }

    let Some((lat, long)) = binding.coordinates() else { return Ok(None) };
    let (Some(lat_value), Some(long_value)) =
        (present_value(record, lat), present_value(record, long))
    else {
        return Ok(None);
    };

    match (coordinate(lat_value), coordinate(long_value)) {
        (Some(y), Some(x)) => Ok(Some(Point::new(x, y, Some(SpatialReference::wgs84())).into())),
        _ => {
            debug!(lat_field = lat, long_field = long, "Ignoring non-numeric coordinates");
            Ok(None)
        }
    }
}

fn present_value(record: &Record, id: FieldId) -> Option<&Value> {
    record.get(id).filter(|cell| cell.is_present()).map(|cell| &cell.value)
}

fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Decode a geometry field value. The platform stores it as JSON text, but an
/// already-parsed object is accepted too.
fn decode_geometry(value: &Value) -> Result<Option<Geometry>> {
    let encoded: EncodedGeometry = match value {
        Value::String(text) => serde_json::from_str(text),
        Value::Object(_) => serde_json::from_value(value.clone()),
        other => {
            return Err(ConnectorError::Geometry(format!(
                "expected encoded geometry text, found {other}"
            )))
        }
    }
    .map_err(|err| ConnectorError::Geometry(err.to_string()))?;
    Ok(encoded.geometry)
}

fn encode_geometry(geometry: Geometry) -> Result<String> {
    serde_json::to_string(&EncodedGeometry { geometry: Some(geometry) })
        .map_err(|err| ConnectorError::Geometry(err.to_string()))
}
