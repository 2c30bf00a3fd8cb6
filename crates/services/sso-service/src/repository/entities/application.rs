//! Application database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Application;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub secret: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Application {
    fn from(model: Model) -> Self {
        Application {
            id: model.id,
            name: model.name,
            secret: model.secret,
        }
    }
}
