use otter::{FieldType, RelationSpec, Resource};

use super::{article_entity, comment_entity, post_entity, profile_entity, tag_entity, user_entity};

pub struct UserResource;

impl Resource for UserResource {
    type Entity = user_entity::Entity;

    const NAME: &'static str = "User";
    const TITLE: &'static str = "Users";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("name", FieldType::String), ("email", FieldType::Email)]
    }

    fn hidden() -> Vec<&'static str> {
        vec!["email", "password"]
    }

    fn relations() -> Vec<(&'static str, RelationSpec)> {
        vec![("profile", "Profile".into())]
    }
}

pub struct ProfileResource;

impl Resource for ProfileResource {
    type Entity = profile_entity::Entity;

    const NAME: &'static str = "Profile";
    const TITLE: &'static str = "Profiles";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("bio", FieldType::Text), ("avatar", FieldType::String)]
    }

    fn relations() -> Vec<(&'static str, RelationSpec)> {
        vec![("user", "App\\Otter\\User".into())]
    }
}

pub struct PostResource;

impl Resource for PostResource {
    type Entity = post_entity::Entity;

    const NAME: &'static str = "Post";
    const TITLE: &'static str = "Posts";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![
            ("title", FieldType::String),
            ("body", FieldType::Text),
            ("user_id", FieldType::Integer),
        ]
    }

    fn relations() -> Vec<(&'static str, RelationSpec)> {
        vec![
            ("author", "User".into()),
            ("tags", ("Tag", "tag_id").into()),
            ("comments", "Comment".into()),
        ]
    }
}

pub struct TagResource;

impl Resource for TagResource {
    type Entity = tag_entity::Entity;

    const NAME: &'static str = "Tag";
    const TITLE: &'static str = "Tags";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("name", FieldType::String)]
    }
}

pub struct CommentResource;

impl Resource for CommentResource {
    type Entity = comment_entity::Entity;

    const NAME: &'static str = "Comment";
    const TITLE: &'static str = "Comments";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("body", FieldType::Text), ("post_id", FieldType::Integer)]
    }
}

/// Routed by slug
#[allow(dead_code)]
pub struct ArticleResource;

impl Resource for ArticleResource {
    type Entity = article_entity::Entity;

    const NAME: &'static str = "Article";
    const TITLE: &'static str = "Articles";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("title", FieldType::String), ("slug", FieldType::String)]
    }

    fn relations() -> Vec<(&'static str, RelationSpec)> {
        vec![("author", "User".into())]
    }
}

/// Declares a relation the post model does not define
#[allow(dead_code)]
pub struct BrokenPostResource;

impl Resource for BrokenPostResource {
    type Entity = post_entity::Entity;

    const NAME: &'static str = "BrokenPost";
    const TITLE: &'static str = "Broken Posts";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("title", FieldType::String)]
    }

    fn relations() -> Vec<(&'static str, RelationSpec)> {
        vec![("editor", "User".into())]
    }
}

/// Points a relation at a resource nobody registers
#[allow(dead_code)]
pub struct OrphanPostResource;

impl Resource for OrphanPostResource {
    type Entity = post_entity::Entity;

    const NAME: &'static str = "OrphanPost";
    const TITLE: &'static str = "Orphan Posts";

    fn fields() -> Vec<(&'static str, FieldType)> {
        vec![("title", FieldType::String)]
    }

    fn relations() -> Vec<(&'static str, RelationSpec)> {
        vec![("author", "Ghost".into())]
    }
}
