use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Select};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::resource::OtterModel;

/// Cardinality of a relation as far as the dashboard is concerned.
///
/// `Other` carries the name of a kind the resolver does not link, such as
/// `HasMany` or `MorphTo`, so it still shows up in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    HasOne,
    BelongsTo,
    BelongsToMany,
    Other(&'static str),
}

impl RelationKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HasOne => "HasOne",
            Self::BelongsTo => "BelongsTo",
            Self::BelongsToMany => "BelongsToMany",
            Self::Other(name) => *name,
        }
    }

    /// Whether the relation links at most one row
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::HasOne | Self::BelongsTo)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RelationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Loads the single row behind a `HasOne`/`BelongsTo` relation.
#[async_trait]
pub trait LoadOne: Send + Sync {
    /// Route key of the related row, `None` when the relation is empty
    async fn load_route_key(&self, db: &DatabaseConnection) -> Result<Option<Value>, DbErr>;
}

/// Loads the rows behind a `BelongsToMany` relation.
#[async_trait]
pub trait LoadMany: Send + Sync {
    /// Primary keys of every related row
    async fn load_keys(&self, db: &DatabaseConnection) -> Result<Vec<Value>, DbErr>;
}

#[async_trait]
impl<E> LoadOne for Select<E>
where
    E: EntityTrait,
    E::Model: OtterModel,
{
    async fn load_route_key(&self, db: &DatabaseConnection) -> Result<Option<Value>, DbErr> {
        let related = self.clone().one(db).await?;
        Ok(related.and_then(|model| model.route_key()))
    }
}

#[async_trait]
impl<E> LoadMany for Select<E>
where
    E: EntityTrait,
    E::Model: OtterModel,
{
    async fn load_keys(&self, db: &DatabaseConnection) -> Result<Vec<Value>, DbErr> {
        let related = self.clone().all(db).await?;
        Ok(related
            .iter()
            .filter_map(|model| model.attribute(<E::Model as OtterModel>::PRIMARY_KEY))
            .collect())
    }
}

/// What a model's relation accessor hands back: a query for the linked rows.
///
/// Built from the sea-orm `Select` returned by `find_related`:
///
/// ```rust,ignore
/// RelatedRows::one(self.find_related(user::Entity))
/// ```
pub enum RelatedRows {
    One(Box<dyn LoadOne>),
    Many(Box<dyn LoadMany>),
}

impl RelatedRows {
    pub fn one(loader: impl LoadOne + 'static) -> Self {
        Self::One(Box::new(loader))
    }

    pub fn many(loader: impl LoadMany + 'static) -> Self {
        Self::Many(Box::new(loader))
    }
}

impl fmt::Debug for RelatedRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(_) => f.write_str("RelatedRows::One"),
            Self::Many(_) => f.write_str("RelatedRows::Many"),
        }
    }
}
