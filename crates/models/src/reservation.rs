use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{menu, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reservation_id: i32,
    pub user_id: i32,
    pub menu_id: i32,
    pub reservation_datetime: DateTimeWithTimeZone,
    pub created: DateTimeWithTimeZone,
    pub updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Menu,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::UserId)
                .into(),
            Relation::Menu => Entity::belongs_to(menu::Entity)
                .from(Column::MenuId)
                .to(menu::Column::MenuId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
