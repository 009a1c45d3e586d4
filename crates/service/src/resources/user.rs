use chrono::NaiveDate;
use models::user::Model as User;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;

use super::{Resource, Unfiltered};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub user_name: String,
    pub user_tel: String,
    pub user_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserInput {
    pub user_id: i32,
    pub user_name: String,
    pub user_tel: String,
    pub user_email: String,
}

impl Resource for User {
    type Key = i32;
    type Create = CreateUserInput;
    type Update = UpdateUserInput;
    type ListQuery = Unfiltered;
    type Filter = ();

    const NAME: &'static str = "user";
    const KEY_NAME: &'static str = "user_id";
    const AUTO_KEY: bool = true;

    fn key(&self) -> i32 {
        self.user_id
    }

    fn created(&self) -> DateTimeWithTimeZone {
        self.created
    }

    fn assign_key(&mut self, id: i32) {
        self.user_id = id;
    }

    fn from_create(input: CreateUserInput, now: DateTimeWithTimeZone) -> Self {
        User {
            user_id: 0,
            user_name: input.user_name,
            user_tel: input.user_tel,
            user_email: input.user_email,
            created: now,
            updated: now,
        }
    }

    fn update_key(input: &UpdateUserInput) -> i32 {
        input.user_id
    }

    fn from_update(
        input: UpdateUserInput,
        created: DateTimeWithTimeZone,
        now: DateTimeWithTimeZone,
    ) -> Self {
        User {
            user_id: input.user_id,
            user_name: input.user_name,
            user_tel: input.user_tel,
            user_email: input.user_email,
            created,
            updated: now,
        }
    }

    fn resolve_filter(_query: Unfiltered, _today: NaiveDate) -> Result<(), ServiceError> {
        Ok(())
    }
}
