use chrono::NaiveDate;
use models::sales_day::{self, Model as SalesDay};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;

use super::{Resource, Unfiltered};
use crate::errors::ServiceError;

/// Body of both POST and PUT: the date is the key, so creation and
/// replacement carry the same fields.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesDayInput {
    pub sales_day: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub holiday: bool,
}

impl SalesDayInput {
    fn validate(&self) -> Result<(), ServiceError> {
        sales_day::validate_sales_day(&self.sales_day)?;
        sales_day::validate_clock_time("start_time", &self.start_time)?;
        sales_day::validate_clock_time("end_time", &self.end_time)?;
        Ok(())
    }
}

impl Resource for SalesDay {
    type Key = String;
    type Create = SalesDayInput;
    type Update = SalesDayInput;
    type ListQuery = Unfiltered;
    type Filter = ();

    const NAME: &'static str = "sales_day";
    const KEY_NAME: &'static str = "sales_day";
    const AUTO_KEY: bool = false;

    fn key(&self) -> String {
        self.sales_day.clone()
    }

    fn created(&self) -> DateTimeWithTimeZone {
        self.created
    }

    fn check_create(input: &SalesDayInput) -> Result<(), ServiceError> {
        input.validate()
    }

    fn check_update(input: &SalesDayInput) -> Result<(), ServiceError> {
        input.validate()
    }

    fn from_create(input: SalesDayInput, now: DateTimeWithTimeZone) -> Self {
        SalesDay {
            sales_day: input.sales_day,
            start_time: input.start_time,
            end_time: input.end_time,
            holiday: input.holiday,
            created: now,
            updated: now,
        }
    }

    fn update_key(input: &SalesDayInput) -> String {
        input.sales_day.clone()
    }

    fn from_update(
        input: SalesDayInput,
        created: DateTimeWithTimeZone,
        now: DateTimeWithTimeZone,
    ) -> Self {
        SalesDay {
            sales_day: input.sales_day,
            start_time: input.start_time,
            end_time: input.end_time,
            holiday: input.holiday,
            created,
            updated: now,
        }
    }

    fn resolve_filter(_query: Unfiltered, _today: NaiveDate) -> Result<(), ServiceError> {
        Ok(())
    }
}
