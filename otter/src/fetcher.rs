//! Full collections of related rows, used to fill relation pickers in the
//! dashboard's create and edit forms.

use indexmap::IndexMap;
use sea_orm::DatabaseConnection;

use crate::envelope::{self, Envelope};
use crate::errors::OtterError;
use crate::registry::ResourceRegistry;
use crate::resource::{ModelOf, Resource};

/// Relation name to every row of the related resource, in declaration order
pub type RelationCollections = IndexMap<String, Vec<Envelope>>;

/// Load every row of every resource `R` relates to.
///
/// Rows are serialized through their own resource, so each envelope carries
/// that resource's fields and relations. Nothing here depends on a row of
/// `R`.
///
/// # Errors
///
/// Fails when a relation target is not registered or a read fails.
pub async fn fetch_relation_collections<R: Resource>(
    registry: &ResourceRegistry,
    db: &DatabaseConnection,
) -> Result<RelationCollections, OtterError> {
    let mut collections = RelationCollections::new();

    for (name, spec) in R::relations() {
        let target = registry.resolve(spec.resource())?;
        let rows = target.all(registry, db).await?;

        tracing::debug!(
            resource = R::NAME,
            relation = name,
            target = target.name(),
            rows = rows.len(),
            "fetched relation collection"
        );
        collections.insert(name.to_string(), rows);
    }

    Ok(collections)
}

/// Serialize a batch of rows through `R`, in order.
///
/// # Errors
///
/// Stops at the first row that fails to serialize.
pub async fn serialize_all<R: Resource>(
    registry: &ResourceRegistry,
    db: &DatabaseConnection,
    models: &[ModelOf<R>],
) -> Result<Vec<Envelope>, OtterError> {
    let mut envelopes = Vec::with_capacity(models.len());
    for model in models {
        envelopes.push(envelope::serialize::<R>(registry, db, model).await?);
    }
    Ok(envelopes)
}
