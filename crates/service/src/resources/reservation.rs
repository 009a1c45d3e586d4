use std::cmp::Ordering;

use chrono::{Days, NaiveDate, NaiveDateTime, TimeZone, Utc};
use models::reservation::Model as Reservation;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;

use super::Resource;
use crate::errors::ServiceError;

/// Days after the lower bound covered when no upper bound is given.
pub const DEFAULT_WINDOW_DAYS: u64 = 6;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationInput {
    pub user_id: i32,
    pub menu_id: i32,
    pub reservation_datetime: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservationInput {
    pub reservation_id: i32,
    pub user_id: i32,
    pub menu_id: i32,
    pub reservation_datetime: DateTimeWithTimeZone,
}

/// `GET /reservation` query string.
///
/// `reservationDate` is the older single-parameter form and only sets the
/// lower bound.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationQuery {
    pub reservation_date_from: Option<String>,
    pub reservation_date_to: Option<String>,
    pub reservation_date: Option<String>,
}

/// Inclusive `[from, to]` window on `reservation_datetime`, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTimeWithTimeZone,
    pub to: DateTimeWithTimeZone,
}

impl DateRange {
    /// `from 00:00:00` through `to 23:59:59`.
    pub fn days(from: NaiveDate, to: NaiveDate) -> Result<Self, ServiceError> {
        let start = from
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ServiceError::Validation(format!("invalid lower bound {from}")))?;
        let end = to
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ServiceError::Validation(format!("invalid upper bound {to}")))?;
        Ok(Self { from: utc(start), to: utc(end) })
    }

    pub fn contains(&self, at: &DateTimeWithTimeZone) -> bool {
        self.from <= *at && *at <= self.to
    }
}

fn utc(naive: NaiveDateTime) -> DateTimeWithTimeZone {
    Utc.from_utc_datetime(&naive).into()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_date(param: &str, value: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ServiceError::Validation(format!("{param}={value} must be YYYY-MM-DD")))
}

impl ReservationQuery {
    /// Missing lower bound means `today`; missing upper bound means six days
    /// after the lower bound.
    pub fn resolve(self, today: NaiveDate) -> Result<DateRange, ServiceError> {
        let from = match non_empty(self.reservation_date_from) {
            Some(v) => parse_date("reservationDateFrom", &v)?,
            None => match non_empty(self.reservation_date) {
                Some(v) => parse_date("reservationDate", &v)?,
                None => today,
            },
        };
        let to = match non_empty(self.reservation_date_to) {
            Some(v) => parse_date("reservationDateTo", &v)?,
            None => from.checked_add_days(Days::new(DEFAULT_WINDOW_DAYS)).ok_or_else(|| {
                ServiceError::Validation(format!("reservationDateFrom={from} is out of range"))
            })?,
        };
        DateRange::days(from, to)
    }
}

impl Resource for Reservation {
    type Key = i32;
    type Create = CreateReservationInput;
    type Update = UpdateReservationInput;
    type ListQuery = ReservationQuery;
    type Filter = DateRange;

    const NAME: &'static str = "reservation";
    const KEY_NAME: &'static str = "reservation_id";
    const AUTO_KEY: bool = true;

    fn key(&self) -> i32 {
        self.reservation_id
    }

    fn created(&self) -> DateTimeWithTimeZone {
        self.created
    }

    fn assign_key(&mut self, id: i32) {
        self.reservation_id = id;
    }

    fn from_create(input: CreateReservationInput, now: DateTimeWithTimeZone) -> Self {
        Reservation {
            reservation_id: 0,
            user_id: input.user_id,
            menu_id: input.menu_id,
            reservation_datetime: input.reservation_datetime,
            created: now,
            updated: now,
        }
    }

    fn update_key(input: &UpdateReservationInput) -> i32 {
        input.reservation_id
    }

    fn from_update(
        input: UpdateReservationInput,
        created: DateTimeWithTimeZone,
        now: DateTimeWithTimeZone,
    ) -> Self {
        Reservation {
            reservation_id: input.reservation_id,
            user_id: input.user_id,
            menu_id: input.menu_id,
            reservation_datetime: input.reservation_datetime,
            created,
            updated: now,
        }
    }

    fn resolve_filter(
        query: ReservationQuery,
        today: NaiveDate,
    ) -> Result<DateRange, ServiceError> {
        query.resolve(today)
    }

    fn matches(&self, filter: &DateRange) -> bool {
        filter.contains(&self.reservation_datetime)
    }

    fn list_order(&self, other: &Self) -> Ordering {
        self.reservation_datetime
            .cmp(&other.reservation_datetime)
            .then(self.reservation_id.cmp(&other.reservation_id))
    }
}
