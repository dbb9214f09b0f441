use chrono::{NaiveDate, NaiveDateTime};
use otter::ResourceRegistry;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

pub mod article_entity;
pub mod comment_entity;
pub mod post_entity;
pub mod post_tag_entity;
pub mod profile_entity;
pub mod resources;
pub mod tag_entity;

use resources::{CommentResource, PostResource, ProfileResource, TagResource, UserResource};

pub const NAMESPACE: &str = "App\\Otter\\";

/// Slug of article 1, shaped like a UUID but stored as text
pub const UUID_SLUG: &str = "550e8400-e29b-41d4-a716-446655440000";

/// `RUST_LOG=otter=debug cargo test` shows resolver logs
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn timestamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .and_then(|date| date.and_hms_opt(hour, 30, 0))
        .unwrap()
}

/// In-memory sqlite with every table created and seeded:
///
/// - user 42 (Ada) with profile 1, user 7 (Grace) without a profile
/// - post 1 by user 42 tagged 1 and 2, with two comments
/// - post 2 by user 7, untagged and soft deleted
/// - articles by user 42 with slugs that look like a UUID, an integer and
///   plain text
#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    init_tracing();

    let db = Database::connect("sqlite::memory:").await?;
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    for statement in [
        schema.create_table_from_entity(user_entity::Entity),
        schema.create_table_from_entity(profile_entity::Entity),
        schema.create_table_from_entity(post_entity::Entity),
        schema.create_table_from_entity(tag_entity::Entity),
        schema.create_table_from_entity(post_tag_entity::Entity),
        schema.create_table_from_entity(comment_entity::Entity),
        schema.create_table_from_entity(article_entity::Entity),
    ] {
        db.execute(backend.build(&statement)).await?;
    }

    seed(&db).await?;
    Ok(db)
}

async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    user_entity::Entity::insert_many([
        user_entity::ActiveModel {
            id: Set(42),
            name: Set("Ada".to_string()),
            email: Set("ada@example.com".to_string()),
            created_at: Set(timestamp(15, 10)),
            updated_at: Set(timestamp(16, 11)),
        },
        user_entity::ActiveModel {
            id: Set(7),
            name: Set("Grace".to_string()),
            email: Set("grace@example.com".to_string()),
            created_at: Set(timestamp(15, 10)),
            updated_at: Set(timestamp(15, 10)),
        },
    ])
    .exec_without_returning(db)
    .await?;

    profile_entity::Entity::insert(profile_entity::ActiveModel {
        id: Set(1),
        user_id: Set(42),
        bio: Set("Writes the first programs".to_string()),
    })
    .exec_without_returning(db)
    .await?;

    post_entity::Entity::insert_many([
        post_entity::ActiveModel {
            id: Set(1),
            user_id: Set(42),
            title: Set("Hello".to_string()),
            body: Set("First post".to_string()),
            created_at: Set(timestamp(15, 10)),
            updated_at: Set(timestamp(15, 10)),
            deleted_at: Set(None),
        },
        post_entity::ActiveModel {
            id: Set(2),
            user_id: Set(7),
            title: Set("Draft".to_string()),
            body: Set("Never published".to_string()),
            created_at: Set(timestamp(17, 9)),
            updated_at: Set(timestamp(17, 9)),
            deleted_at: Set(Some(timestamp(18, 12))),
        },
    ])
    .exec_without_returning(db)
    .await?;

    tag_entity::Entity::insert_many([
        tag_entity::ActiveModel {
            id: Set(1),
            name: Set("rust".to_string()),
        },
        tag_entity::ActiveModel {
            id: Set(2),
            name: Set("databases".to_string()),
        },
    ])
    .exec_without_returning(db)
    .await?;

    post_tag_entity::Entity::insert_many([
        post_tag_entity::ActiveModel {
            post_id: Set(1),
            tag_id: Set(1),
        },
        post_tag_entity::ActiveModel {
            post_id: Set(1),
            tag_id: Set(2),
        },
    ])
    .exec_without_returning(db)
    .await?;

    comment_entity::Entity::insert_many([
        comment_entity::ActiveModel {
            id: Set(1),
            post_id: Set(1),
            body: Set("Nice".to_string()),
        },
        comment_entity::ActiveModel {
            id: Set(2),
            post_id: Set(1),
            body: Set("Thanks".to_string()),
        },
    ])
    .exec_without_returning(db)
    .await?;

    article_entity::Entity::insert_many(
        [(1, UUID_SLUG, "Keys"), (2, "2024", "Year in review"), (3, "hello-world", "Hello")].map(
            |(id, slug, title)| article_entity::ActiveModel {
                id: Set(id),
                user_id: Set(42),
                slug: Set(slug.to_string()),
                title: Set(title.to_string()),
            },
        ),
    )
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Registry holding every well-formed test resource
#[allow(dead_code)]
pub fn registry() -> ResourceRegistry {
    otter::resource_registry!(
        NAMESPACE;
        UserResource,
        ProfileResource,
        PostResource,
        TagResource,
        CommentResource,
    )
}

/// Seeded post by id
#[allow(dead_code)]
pub async fn post(db: &DatabaseConnection, id: i32) -> post_entity::Model {
    post_entity::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("Failed to load post")
        .expect("Post is seeded")
}

/// Seeded user by id
#[allow(dead_code)]
pub async fn user(db: &DatabaseConnection, id: i32) -> user_entity::Model {
    user_entity::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("Failed to load user")
        .expect("User is seeded")
}
