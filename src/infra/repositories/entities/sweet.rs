//! SeaORM entity for the `sweets` table.

use sea_orm::entity::prelude::*;

use crate::domain::Sweet;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sweets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sweet {
    fn from(model: Model) -> Self {
        Sweet {
            id: model.id,
            name: model.name,
            category: model.category,
            price: model.price,
            quantity: model.quantity,
        }
    }
}
