//! # Relationship Resolution
//!
//! Turns the relations a [`Resource`](crate::Resource) declares into
//! [`RelationDescriptor`]s: the relation kind, the target resource, the foreign
//! key, and the linkage values of one row.
//!
//! ## Relation kinds
//!
//! | Kind            | `relationshipId`             | `resourceId`                 |
//! |-----------------|------------------------------|------------------------------|
//! | `HasOne`        | foreign key on the row       | route key of the related row |
//! | `BelongsTo`     | foreign key on the row       | route key of the related row |
//! | `BelongsToMany` | primary keys of related rows | `null`                       |
//! | anything else   | `null`                       | `null`                       |
//!
//! Unknown kinds never fail a request. A relation that targets an
//! unregistered resource always does.

pub mod kind;
pub mod resolver;

pub use kind::{LoadMany, LoadOne, RelatedRows, RelationKind};
pub use resolver::{RelationDescriptor, RelationMap, find_model, resolve_relations};
