use otter::{OtterModel, RelatedRows, RelationKind};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Articles are addressed by slug rather than by id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_entity::Entity",
        from = "Column::UserId",
        to = "super::user_entity::Column::Id"
    )]
    Author,
}

impl Related<super::user_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl OtterModel for Model {
    const NAME: &'static str = "Article";
    const ROUTE_KEY: &'static str = "slug";

    fn relation_kind(relation: &str) -> Option<RelationKind> {
        match relation {
            "author" => Some(RelationKind::BelongsTo),
            _ => None,
        }
    }

    fn related(&self, relation: &str) -> Option<RelatedRows> {
        match relation {
            "author" => Some(RelatedRows::one(self.find_related(super::user_entity::Entity))),
            _ => None,
        }
    }
}
