use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub post_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post_entity::Entity",
        from = "Column::PostId",
        to = "super::post_entity::Column::Id"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::tag_entity::Entity",
        from = "Column::TagId",
        to = "super::tag_entity::Column::Id"
    )]
    Tag,
}

impl ActiveModelBehavior for ActiveModel {}
