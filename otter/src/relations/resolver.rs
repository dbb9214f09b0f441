use indexmap::IndexMap;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

use super::kind::{RelatedRows, RelationKind};
use crate::errors::OtterError;
use crate::registry::ResourceRegistry;
use crate::resource::{Fields, KeyValue, ModelOf, ModelRef, OtterModel, Resource};

/// Everything the dashboard needs to render one relation of one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDescriptor {
    pub relationship_name: String,
    pub relationship_type: RelationKind,
    /// Model name of the relation target
    pub relationship_model: String,
    pub relationship_foreign_key: String,
    /// Foreign key value on the row, or the related primary keys for
    /// `BelongsToMany`
    pub relationship_id: Option<Value>,
    pub resource_name: String,
    pub resource_title: String,
    pub resource_fields: Fields,
    /// Route key of the related row
    pub resource_id: Option<Value>,
}

/// Relation name to descriptor, one entry per declared relation, in
/// declaration order
pub type RelationMap = IndexMap<String, RelationDescriptor>;

/// Resolve every relation `R` declares.
///
/// With `None` the descriptors carry the relation schema only and every
/// linkage value is null. A [`ModelRef::Key`] is looked up by the model's
/// route key first and fails with [`OtterError::NotFound`] when no row
/// matches.
///
/// # Errors
///
/// Fails when a key matches no row, a relation targets an unregistered
/// resource, the model does not define a declared relation, or the database
/// read fails.
pub async fn resolve_relations<R: Resource>(
    registry: &ResourceRegistry,
    db: &DatabaseConnection,
    model: Option<ModelRef<ModelOf<R>>>,
) -> Result<RelationMap, OtterError> {
    match model {
        None => resolve_for_instance::<R>(registry, db, None).await,
        Some(ModelRef::Instance(model)) => {
            resolve_for_instance::<R>(registry, db, Some(&model)).await
        }
        Some(ModelRef::Key(key)) => {
            let model = find_model::<R>(db, &key).await?;
            resolve_for_instance::<R>(registry, db, Some(&model)).await
        }
    }
}

/// Load the row of `R` whose route key column equals `key`.
///
/// The key is first converted to the column's type, so a UUID-looking slug
/// still matches a text column. A key the column cannot hold matches no row.
///
/// # Errors
///
/// [`OtterError::NotFound`] when no row matches, [`OtterError::Internal`] when
/// the route key is not a column of the entity.
pub async fn find_model<R: Resource>(
    db: &DatabaseConnection,
    key: &KeyValue,
) -> Result<ModelOf<R>, OtterError> {
    let route_key = <ModelOf<R> as OtterModel>::ROUTE_KEY;
    let column = <<R::Entity as EntityTrait>::Column as FromStr>::from_str(route_key)
        .map_err(|_| {
            OtterError::internal(
                format!("Route key '{route_key}' is not a column of {}", R::NAME),
                None,
            )
        })?;

    let not_found = || OtterError::not_found(R::NAME, Some(key.to_string()));
    let typed = key.coerce(column.def().get_column_type()).ok_or_else(not_found)?;

    R::Entity::find()
        .filter(column.eq(typed))
        .one(db)
        .await?
        .ok_or_else(not_found)
}

pub(crate) async fn resolve_for_instance<R: Resource>(
    registry: &ResourceRegistry,
    db: &DatabaseConnection,
    model: Option<&ModelOf<R>>,
) -> Result<RelationMap, OtterError> {
    let mut relations = RelationMap::new();

    for (name, spec) in R::relations() {
        let target = registry.resolve(spec.resource())?;

        let kind = <ModelOf<R> as OtterModel>::relation_kind(name)
            .ok_or_else(|| OtterError::undefined_relation(R::NAME, name))?;

        let foreign_key = spec
            .foreign_key()
            .map_or_else(|| target.foreign_key(), str::to_string);

        let (relationship_id, resource_id) = match model {
            Some(model) => link(db, model, name, kind, &foreign_key).await?,
            None => (None, None),
        };

        tracing::debug!(
            resource = R::NAME,
            relation = name,
            kind = %kind,
            target = target.name(),
            foreign_key = %foreign_key,
            "resolved relation"
        );

        relations.insert(
            name.to_string(),
            RelationDescriptor {
                relationship_name: name.to_string(),
                relationship_type: kind,
                relationship_model: target.model_name().to_string(),
                relationship_foreign_key: foreign_key,
                relationship_id,
                resource_name: target.route_name(),
                resource_title: target.title().to_string(),
                resource_fields: target.available_fields(),
                resource_id,
            },
        );
    }

    Ok(relations)
}

/// Linkage values `(relationshipId, resourceId)` of one relation on one row.
async fn link<M: OtterModel>(
    db: &DatabaseConnection,
    model: &M,
    relation: &str,
    kind: RelationKind,
    foreign_key: &str,
) -> Result<(Option<Value>, Option<Value>), OtterError> {
    match kind {
        RelationKind::HasOne | RelationKind::BelongsTo => {
            let relationship_id = model.attribute(foreign_key).filter(is_truthy);
            let resource_id = match model.related(relation) {
                Some(RelatedRows::One(loader)) => loader.load_route_key(db).await?,
                other => {
                    accessor_mismatch(M::NAME, relation, kind, other.as_ref());
                    None
                }
            };
            Ok((relationship_id, resource_id))
        }
        RelationKind::BelongsToMany => {
            let relationship_id = match model.related(relation) {
                Some(RelatedRows::Many(loader)) => {
                    let keys = loader.load_keys(db).await?;
                    (!keys.is_empty()).then_some(Value::Array(keys))
                }
                other => {
                    accessor_mismatch(M::NAME, relation, kind, other.as_ref());
                    None
                }
            };
            Ok((relationship_id, None))
        }
        RelationKind::Other(_) => Ok((None, None)),
    }
}

fn accessor_mismatch(model: &str, relation: &str, kind: RelationKind, rows: Option<&RelatedRows>) {
    tracing::warn!(
        model,
        relation,
        kind = %kind,
        accessor = ?rows,
        "relation accessor does not match the relation kind, leaving linkage null"
    );
}

/// Loose truthiness: null, false, zero, `""`, `"0"` and empty arrays or
/// objects do not count as a linkage value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
