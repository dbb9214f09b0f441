use chrono::NaiveDateTime;
use otter::{OtterModel, RelatedRows, RelationKind};
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_entity::Entity",
        from = "Column::UserId",
        to = "super::user_entity::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::comment_entity::Entity")]
    Comments,
}

impl Related<super::user_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::comment_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::tag_entity::Entity> for Entity {
    fn to() -> RelationDef {
        super::post_tag_entity::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::post_tag_entity::Relation::Post.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl OtterModel for Model {
    const NAME: &'static str = "Post";

    fn relation_kind(relation: &str) -> Option<RelationKind> {
        match relation {
            "author" => Some(RelationKind::BelongsTo),
            "tags" => Some(RelationKind::BelongsToMany),
            "comments" => Some(RelationKind::Other("HasMany")),
            _ => None,
        }
    }

    fn related(&self, relation: &str) -> Option<RelatedRows> {
        match relation {
            "author" => Some(RelatedRows::one(
                self.find_related(super::user_entity::Entity),
            )),
            "tags" => Some(RelatedRows::many(
                self.find_related(super::tag_entity::Entity),
            )),
            "comments" => Some(RelatedRows::many(
                self.find_related(super::comment_entity::Entity),
            )),
            _ => None,
        }
    }
}
