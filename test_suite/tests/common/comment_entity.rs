use otter::OtterModel;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Comments carry no timestamp columns.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: i32,
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post_entity::Entity",
        from = "Column::PostId",
        to = "super::post_entity::Column::Id"
    )]
    Post,
}

impl Related<super::post_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl OtterModel for Model {
    const NAME: &'static str = "Comment";
}
