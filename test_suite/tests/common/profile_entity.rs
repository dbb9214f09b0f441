use otter::{OtterModel, RelatedRows, RelationKind};
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub bio: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_entity::Entity",
        from = "Column::UserId",
        to = "super::user_entity::Column::Id"
    )]
    User,
}

impl Related<super::user_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl OtterModel for Model {
    const NAME: &'static str = "Profile";

    fn relation_kind(relation: &str) -> Option<RelationKind> {
        (relation == "user").then_some(RelationKind::BelongsTo)
    }

    fn related(&self, relation: &str) -> Option<RelatedRows> {
        (relation == "user").then(|| RelatedRows::one(self.find_related(super::user_entity::Entity)))
    }
}
