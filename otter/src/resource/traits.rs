use sea_orm::EntityTrait;
use serde::Serialize;
use serde_json::{Map, Value};

use super::fields::{FieldType, Fields, RelationSpec};
use crate::naming;
use crate::relations::{RelatedRows, RelationKind};

/// Model side of the contract, implemented on a sea-orm `Model`.
///
/// The relation schema is static: [`OtterModel::relation_kind`] answers
/// without a row, so collection views can describe relations before any
/// instance exists. [`OtterModel::related`] is the per-row accessor that
/// queries linked rows.
///
/// ```rust,ignore
/// impl OtterModel for post::Model {
///     const NAME: &'static str = "Post";
///
///     fn relation_kind(relation: &str) -> Option<RelationKind> {
///         match relation {
///             "author" => Some(RelationKind::BelongsTo),
///             "tags" => Some(RelationKind::BelongsToMany),
///             _ => None,
///         }
///     }
///
///     fn related(&self, relation: &str) -> Option<RelatedRows> {
///         match relation {
///             "author" => Some(RelatedRows::one(self.find_related(user::Entity))),
///             "tags" => Some(RelatedRows::many(self.find_related(tag::Entity))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait OtterModel: Serialize + Send + Sync + 'static {
    /// Base name of the model type, e.g. `UserAddress`
    const NAME: &'static str;

    /// Primary key column
    const PRIMARY_KEY: &'static str = "id";

    /// Column that identifies a row in URLs
    const ROUTE_KEY: &'static str = Self::PRIMARY_KEY;

    /// Kind of the named relation, `None` when the model defines no such
    /// relation.
    fn relation_kind(relation: &str) -> Option<RelationKind> {
        let _ = relation;
        None
    }

    /// Query for the rows linked to this instance through `relation`.
    fn related(&self, relation: &str) -> Option<RelatedRows> {
        let _ = relation;
        None
    }

    /// Foreign key other models use to point at this one
    #[must_use]
    fn foreign_key() -> String {
        naming::foreign_key(Self::NAME, Self::PRIMARY_KEY)
    }

    /// Current attribute values, keyed by column name
    fn attributes(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(attributes)) => attributes,
            Ok(_) => Map::new(),
            Err(err) => {
                tracing::warn!(model = Self::NAME, error = %err, "model attributes are not serializable");
                Map::new()
            }
        }
    }

    /// One attribute, `None` when absent or null
    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes().remove(name).filter(|value| !value.is_null())
    }

    /// Value of the route key column
    fn route_key(&self) -> Option<Value> {
        self.attribute(Self::ROUTE_KEY)
    }
}

/// Resource side of the contract: which fields and relations of a model the
/// dashboard sees.
///
/// ```rust,ignore
/// pub struct PostResource;
///
/// impl Resource for PostResource {
///     type Entity = post::Entity;
///
///     const NAME: &'static str = "Post";
///     const TITLE: &'static str = "Posts";
///
///     fn fields() -> Vec<(&'static str, FieldType)> {
///         vec![("title", FieldType::String), ("body", FieldType::Text)]
///     }
///
///     fn relations() -> Vec<(&'static str, RelationSpec)> {
///         vec![("author", "User".into()), ("tags", ("Tag", "tag_id").into())]
///     }
/// }
/// ```
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model: OtterModel>;

    /// Base name the registry resolves this resource by
    const NAME: &'static str;

    /// Display name
    const TITLE: &'static str;

    /// Exposed fields, in display order
    fn fields() -> Vec<(&'static str, FieldType)>;

    /// Fields left out of projections
    fn hidden() -> Vec<&'static str> {
        Vec::new()
    }

    /// Relation name to target resource
    fn relations() -> Vec<(&'static str, RelationSpec)> {
        Vec::new()
    }

    /// Route name derived from [`Resource::NAME`]
    #[must_use]
    fn route_name() -> String {
        naming::route_name_from_class_name(Self::NAME)
    }
}

/// The sea-orm model wrapped by a resource
pub type ModelOf<R> = <<R as Resource>::Entity as EntityTrait>::Model;

/// `fields()` minus `hidden()`. Hidden names that are not fields are ignored.
#[must_use]
pub fn available_fields<R: Resource>() -> Fields {
    let hidden = R::hidden();
    R::fields()
        .into_iter()
        .filter(|(name, _)| !hidden.contains(name))
        .collect()
}
