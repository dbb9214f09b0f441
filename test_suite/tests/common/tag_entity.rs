use otter::OtterModel;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::post_entity::Entity> for Entity {
    fn to() -> RelationDef {
        super::post_tag_entity::Relation::Post.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::post_tag_entity::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl OtterModel for Model {
    const NAME: &'static str = "Tag";
}
