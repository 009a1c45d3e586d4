use chrono::NaiveDate;
use models::menu::Model as Menu;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;

use super::{Resource, Unfiltered};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuInput {
    pub menu_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMenuInput {
    pub menu_id: i32,
    pub menu_name: String,
}

impl Resource for Menu {
    type Key = i32;
    type Create = CreateMenuInput;
    type Update = UpdateMenuInput;
    type ListQuery = Unfiltered;
    type Filter = ();

    const NAME: &'static str = "menu";
    const KEY_NAME: &'static str = "menu_id";
    const AUTO_KEY: bool = true;

    fn key(&self) -> i32 {
        self.menu_id
    }

    fn created(&self) -> DateTimeWithTimeZone {
        self.created
    }

    fn assign_key(&mut self, id: i32) {
        self.menu_id = id;
    }

    fn from_create(input: CreateMenuInput, now: DateTimeWithTimeZone) -> Self {
        Menu { menu_id: 0, menu_name: input.menu_name, created: now, updated: now }
    }

    fn update_key(input: &UpdateMenuInput) -> i32 {
        input.menu_id
    }

    fn from_update(
        input: UpdateMenuInput,
        created: DateTimeWithTimeZone,
        now: DateTimeWithTimeZone,
    ) -> Self {
        Menu { menu_id: input.menu_id, menu_name: input.menu_name, created, updated: now }
    }

    fn resolve_filter(_query: Unfiltered, _today: NaiveDate) -> Result<(), ServiceError> {
        Ok(())
    }
}
