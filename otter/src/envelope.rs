//! # Response Envelopes
//!
//! The JSON shape the dashboard receives for one row: the resource's visible
//! fields at the top level, then `route_key`, `relations` and the three
//! formatted timestamps.
//!
//! ```json
//! {
//!   "title": "Hello",
//!   "route_key": 1,
//!   "relations": { "author": { "relationshipType": "BelongsTo", ... } },
//!   "created_at": "2024-01-15 10:30:00",
//!   "updated_at": "2024-01-15 10:30:00",
//!   "deleted_at": null
//! }
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::OtterError;
use crate::registry::ResourceRegistry;
use crate::relations::RelationMap;
use crate::relations::resolver::resolve_for_instance;
use crate::resource::{ModelOf, OtterModel, Resource, available_fields};

/// Format of every timestamp in an envelope
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keys the envelope writes itself. A field with one of these names is left
/// out of the projection.
pub const ENVELOPE_KEYS: [&str; 5] = [
    "route_key",
    "relations",
    "created_at",
    "updated_at",
    "deleted_at",
];

/// Serialized view of one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub route_key: Option<Value>,
    /// `None` when the resource declares no relations
    pub relations: Option<RelationMap>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deleted_at: Option<String>,
}

impl Envelope {
    /// Value of a projected field
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Serialize one row through resource `R`.
///
/// # Errors
///
/// Fails when relation resolution fails, see
/// [`resolve_relations`](crate::resolve_relations).
pub async fn serialize<R: Resource>(
    registry: &ResourceRegistry,
    db: &DatabaseConnection,
    model: &ModelOf<R>,
) -> Result<Envelope, OtterError> {
    let relations = if R::relations().is_empty() {
        None
    } else {
        Some(resolve_for_instance::<R>(registry, db, Some(model)).await?)
    };

    let mut attributes = model.attributes();
    let timestamp = |attributes: &mut Map<String, Value>, column: &str| {
        attributes.remove(column).as_ref().and_then(format_timestamp)
    };
    let created_at = timestamp(&mut attributes, "created_at");
    let updated_at = timestamp(&mut attributes, "updated_at");
    let deleted_at = timestamp(&mut attributes, "deleted_at");

    Ok(Envelope {
        fields: project::<R>(&attributes),
        route_key: model.route_key(),
        relations,
        created_at,
        updated_at,
        deleted_at,
    })
}

/// Visible fields of `R` picked out of a model's attributes. A field the
/// model has no attribute for maps to null.
#[must_use]
pub fn project<R: Resource>(attributes: &Map<String, Value>) -> Map<String, Value> {
    available_fields::<R>()
        .names()
        .filter(|name| !ENVELOPE_KEYS.contains(name))
        .map(|name| {
            let value = attributes.get(name).cloned().unwrap_or(Value::Null);
            (name.to_string(), value)
        })
        .collect()
}

/// Render a timestamp attribute as `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts RFC 3339 strings (kept in their own offset), naive ISO strings
/// with either `T` or a space as separator, and unix seconds. Other strings
/// pass through untouched; null and anything else yields `None`.
#[must_use]
pub fn format_timestamp(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => {
            if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
                return Some(datetime.naive_local().format(TIMESTAMP_FORMAT).to_string());
            }
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|naive| naive.format(TIMESTAMP_FORMAT).to_string())
                .or_else(|| {
                    tracing::debug!(value = %raw, "timestamp not in a known format, passing through");
                    Some(raw.clone())
                })
        }
        Value::Number(seconds) => seconds
            .as_i64()
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
            .map(|datetime| datetime.format(TIMESTAMP_FORMAT).to_string()),
        _ => None,
    }
}
