//! Dashboard over two related tables
//!
//! ```bash
//! RUST_LOG=otter=debug cargo run --example dashboard
//! ```
//!
//! Then visit:
//! - **Resources**: <http://localhost:3000/otter>
//! - **One book**: <http://localhost:3000/otter/books/1>
//! - **Its relations**: <http://localhost:3000/otter/books/1/relations>

use otter::{
    Dashboard, FieldType, OtterConfig, OtterModel, RelatedRows, RelationKind, RelationSpec,
    Resource,
};
use sea_orm::{Database, DatabaseConnection, entity::prelude::*};
use serde::Serialize;
use std::env;

mod author {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
    #[sea_orm(table_name = "authors")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::book::Entity")]
        Books,
    }

    impl Related<super::book::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Books.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl OtterModel for Model {
        const NAME: &'static str = "Author";
    }
}

mod book {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
    #[sea_orm(table_name = "books")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub author_id: i32,
        pub title: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::author::Entity",
            from = "Column::AuthorId",
            to = "super::author::Column::Id"
        )]
        Author,
    }

    impl Related<super::author::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Author.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl OtterModel for Model {
        const NAME: &'static str = "Book";

        fn relation_kind(relation: &str) -> Option<RelationKind> {
            (relation == "author").then_some(RelationKind::BelongsTo)
        }

        fn related(&self, relation: &str) -> Option<RelatedRows> {
            (relation == "author").then(|| RelatedRows::one(self.find_related(super::author::Entity)))
        }
    }
}

struct AuthorResource;

impl Resource for AuthorResource {
    type Entity = author::Entity;
    const NAME: &'static str = "Author";
    const TITLE: &'static str = "Authors";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("name", FieldType::String)]
    }
}

struct BookResource;

impl Resource for BookResource {
    type Entity = book::Entity;
    const NAME: &'static str = "Book";
    const TITLE: &'static str = "Books";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("title", FieldType::String), ("author_id", FieldType::Integer)]
    }

    fn relations() -> Vec<(&'static str, RelationSpec)> {
        vec![("author", "Author".into())]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let db: DatabaseConnection = Database::connect(&database_url).await?;

    db.execute_unprepared(
        r"CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY NOT NULL,
            author_id INTEGER NOT NULL REFERENCES authors (id),
            title TEXT NOT NULL
        );
        INSERT OR IGNORE INTO authors (id, name) VALUES (1, 'Ursula K. Le Guin');
        INSERT OR IGNORE INTO books (id, author_id, title) VALUES (1, 1, 'The Dispossessed');",
    )
    .await?;

    // the dashboard is open without an auth callback only in `local`
    let config = OtterConfig {
        environment: "local".to_string(),
        ..OtterConfig::from_env()
    };
    let registry = otter::resource_registry!(config.namespace.clone(); AuthorResource, BookResource);
    let dashboard = Dashboard::new(registry, db, &config);

    let app = axum::Router::new().nest("/otter", otter::routes::router(dashboard));
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Dashboard: http://0.0.0.0:3000/otter");
    axum::serve(listener, app).await?;
    Ok(())
}
