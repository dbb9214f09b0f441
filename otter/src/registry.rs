//! # Resource Registry
//!
//! Maps resource base names to type-erased [`DynResource`] entries. The
//! registry is built once at startup and shared read-only, usually behind an
//! `Arc`:
//!
//! ```rust,ignore
//! let registry = ResourceRegistry::new("App\\Otter\\")
//!     .register::<UserResource>()
//!     .register::<PostResource>();
//! ```
//!
//! Relations name their target by base name (`"User"`) or by fully qualified
//! name (`"App\\Otter\\User"`); a qualified name must live under the
//! registry's namespace.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, Iterable, PaginatorTrait, PrimaryKeyToColumn, QueryOrder,
    QuerySelect,
};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::config::OtterConfig;
use crate::envelope::{self, Envelope};
use crate::errors::OtterError;
use crate::fetcher::{self, RelationCollections};
use crate::naming;
use crate::relations::{self, RelationMap};
use crate::resource::{Fields, KeyValue, ModelRef, OtterModel, Resource, available_fields};

/// Object-safe view of a [`Resource`], for callers that only hold a name.
#[async_trait]
pub trait DynResource: Send + Sync {
    /// Base name of the resource
    fn name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Name of the wrapped model
    fn model_name(&self) -> &'static str;

    fn route_name(&self) -> String {
        naming::route_name_from_class_name(self.name())
    }

    /// Conventional foreign key pointing at the wrapped model
    fn foreign_key(&self) -> String;

    fn available_fields(&self) -> Fields;

    /// Envelope of the row whose route key equals `key`
    async fn show(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
        key: &KeyValue,
    ) -> Result<Envelope, OtterError>;

    /// One page of envelopes ordered by primary key, plus the total row count
    async fn page(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Envelope>, u64), OtterError>;

    /// Envelopes of every row
    async fn all(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
    ) -> Result<Vec<Envelope>, OtterError>;

    /// Relation descriptors for one row, or the bare schema with `None`
    async fn relations(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
        key: Option<&KeyValue>,
    ) -> Result<RelationMap, OtterError>;

    /// Every row of every related resource
    async fn relation_collections(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
    ) -> Result<RelationCollections, OtterError>;
}

struct Entry<R>(PhantomData<fn() -> R>);

#[async_trait]
impl<R: Resource> DynResource for Entry<R> {
    fn name(&self) -> &'static str {
        R::NAME
    }

    fn title(&self) -> &'static str {
        R::TITLE
    }

    fn model_name(&self) -> &'static str {
        <<R::Entity as EntityTrait>::Model as OtterModel>::NAME
    }

    fn route_name(&self) -> String {
        R::route_name()
    }

    fn foreign_key(&self) -> String {
        <<R::Entity as EntityTrait>::Model as OtterModel>::foreign_key()
    }

    fn available_fields(&self) -> Fields {
        available_fields::<R>()
    }

    async fn show(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
        key: &KeyValue,
    ) -> Result<Envelope, OtterError> {
        let model = relations::find_model::<R>(db, key).await?;
        envelope::serialize::<R>(registry, db, &model).await
    }

    async fn page(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Envelope>, u64), OtterError> {
        let total = R::Entity::find().count(db).await?;

        let mut query = R::Entity::find();
        for key in <R::Entity as EntityTrait>::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        let models = query.offset(offset).limit(limit).all(db).await?;

        let envelopes = fetcher::serialize_all::<R>(registry, db, &models).await?;
        Ok((envelopes, total))
    }

    async fn all(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
    ) -> Result<Vec<Envelope>, OtterError> {
        let models = R::Entity::find().all(db).await?;
        fetcher::serialize_all::<R>(registry, db, &models).await
    }

    async fn relations(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
        key: Option<&KeyValue>,
    ) -> Result<RelationMap, OtterError> {
        let model = key.map(|key| ModelRef::Key(key.clone()));
        relations::resolve_relations::<R>(registry, db, model).await
    }

    async fn relation_collections(
        &self,
        registry: &ResourceRegistry,
        db: &DatabaseConnection,
    ) -> Result<RelationCollections, OtterError> {
        fetcher::fetch_relation_collections::<R>(registry, db).await
    }
}

/// Lookup table of every resource the dashboard can serve.
pub struct ResourceRegistry {
    namespace: String,
    resources: BTreeMap<&'static str, Box<dyn DynResource>>,
}

impl ResourceRegistry {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            resources: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &OtterConfig) -> Self {
        Self::new(config.namespace.clone())
    }

    /// Add `R` under its base name. A later registration with the same name
    /// replaces the earlier one.
    #[must_use]
    pub fn register<R: Resource>(mut self) -> Self {
        if self
            .resources
            .insert(R::NAME, Box::new(Entry::<R>(PhantomData)))
            .is_some()
        {
            tracing::warn!(resource = R::NAME, "resource registered twice, keeping the last one");
        }
        self
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Namespace-qualified name of a base name, e.g. `App\Otter\User`
    #[must_use]
    pub fn qualified_name(&self, base_name: &str) -> String {
        format!("{}{base_name}", self.namespace)
    }

    /// Find a resource by base name or namespace-qualified name.
    ///
    /// # Errors
    ///
    /// [`OtterError::UnresolvedResource`] when nothing is registered under the
    /// name, or a qualified name points outside the namespace.
    pub fn resolve(&self, name: &str) -> Result<&dyn DynResource, OtterError> {
        let base = naming::base_class_name(name);
        if base != name && name != self.qualified_name(base) {
            return Err(OtterError::unresolved_resource(name, ""));
        }

        self.resources
            .get(base)
            .map(AsRef::as_ref)
            .ok_or_else(|| OtterError::unresolved_resource(base, self.namespace.clone()))
    }

    /// Find a resource by the route name used in dashboard URLs.
    ///
    /// # Errors
    ///
    /// [`OtterError::NotFound`] when no registered resource answers to it.
    pub fn by_route_name(&self, route_name: &str) -> Result<&dyn DynResource, OtterError> {
        let class_name = naming::class_name_from_route_name(route_name);
        if let Some(resource) = self.resources.get(class_name.as_str()) {
            return Ok(resource.as_ref());
        }

        self.iter()
            .find(|resource| resource.route_name() == route_name)
            .ok_or_else(|| OtterError::not_found("Resource", Some(route_name.to_string())))
    }

    /// Route names of every resource, or display names when `pretty`
    #[must_use]
    pub fn resource_names(&self, pretty: bool) -> Vec<String> {
        self.iter()
            .map(|resource| {
                if pretty {
                    naming::display_name(resource.name())
                } else {
                    resource.route_name()
                }
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DynResource> {
        self.resources
            .values()
            .map(|resource| -> &dyn DynResource { resource.as_ref() })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("namespace", &self.namespace)
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}
