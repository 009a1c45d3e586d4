use chrono::{NaiveDate, NaiveTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A business day on the calendar. The date string itself is the key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_day")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sales_day: String,
    pub start_time: String,
    pub end_time: String,
    pub holiday: bool,
    pub created: DateTimeWithTimeZone,
    pub updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// `sales_day` must be a calendar date written as `YYYY-MM-DD`.
pub fn validate_sales_day(value: &str) -> Result<NaiveDate, ModelError> {
    // chrono accepts unpadded fields; the key must stay canonical
    if value.len() != 10 {
        return Err(ModelError::Validation(format!("sales_day={value} must be YYYY-MM-DD")));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ModelError::Validation(format!("sales_day={value} must be YYYY-MM-DD")))
}

/// Opening hours are wall-clock `HH:MM`.
pub fn validate_clock_time(field: &str, value: &str) -> Result<NaiveTime, ModelError> {
    if value.len() != 5 {
        return Err(ModelError::Validation(format!("{field}={value} must be HH:MM")));
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| ModelError::Validation(format!("{field}={value} must be HH:MM")))
}
