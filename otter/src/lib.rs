//! # otter
//!
//! Relation-aware JSON envelopes for sea-orm models, for admin dashboards
//! that render arbitrary tables and their relations without a serializer per
//! model.
//!
//! A [`Resource`] names the fields and relations of one entity the dashboard
//! may see. Its model implements [`OtterModel`], which tells the resolver
//! what kind each relation is and how to load the linked rows. Resources are
//! collected in a [`ResourceRegistry`]:
//!
//! ```rust,ignore
//! let registry = otter::resource_registry!("App\\Otter\\"; UserResource, PostResource);
//!
//! let post = post::Entity::find_by_id(1).one(&db).await?.unwrap();
//! let envelope = otter::serialize::<PostResource>(&registry, &db, &post).await?;
//! ```
//!
//! [`routes::router`] serves the same data over HTTP.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod fetcher;
pub mod gate;
pub mod gravatar;
pub mod models;
pub mod naming;
pub mod pagination;
pub mod registry;
pub mod relations;
pub mod resource;
pub mod routes;

pub use config::OtterConfig;
pub use envelope::{Envelope, serialize};
pub use errors::OtterError;
pub use fetcher::{RelationCollections, fetch_relation_collections};
pub use gate::DashboardGate;
pub use gravatar::gravatar_link;
pub use registry::{DynResource, ResourceRegistry};
pub use relations::{
    LoadMany, LoadOne, RelatedRows, RelationDescriptor, RelationKind, RelationMap,
    resolve_relations,
};
pub use resource::{
    FieldType, Fields, KeyValue, ModelOf, ModelRef, OtterModel, RelationSpec, Resource,
    available_fields,
};
pub use routes::Dashboard;

/// Build a [`ResourceRegistry`] from a namespace and a list of resources.
/// Usage: `resource_registry!("App\\Otter\\"; UserResource, PostResource)`
#[macro_export]
macro_rules! resource_registry {
    ($namespace:expr; $($resource:ty),* $(,)?) => {
        $crate::ResourceRegistry::new($namespace)
            $(.register::<$resource>())*
    };
}
