//! Entity capability trait driving the generic resource machine.
//!
//! Every entity served over HTTP describes here how its payloads decode, how
//! its key is found, how a row is stamped on create and update, and how a list
//! request turns into a store filter.

use std::{cmp::Ordering, fmt::Display};

use chrono::NaiveDate;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::ServiceError;

pub mod menu;
pub mod reservation;
pub mod sales_day;
pub mod user;

pub use reservation::{DateRange, ReservationQuery};

pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    type Key: Clone + Ord + Display + Send + Sync + 'static;
    /// POST body.
    type Create: DeserializeOwned + Send + 'static;
    /// PUT body; carries the key of the row to replace.
    type Update: DeserializeOwned + Send + 'static;
    /// Query string accepted by the list operation.
    type ListQuery: DeserializeOwned + Send + 'static;
    /// Resolved list filter handed to the store.
    type Filter: Send + Sync + 'static;

    /// Table name, used in logs and error messages.
    const NAME: &'static str;
    /// Name of the key field in payloads.
    const KEY_NAME: &'static str;
    /// Whether the store assigns the key on insert.
    const AUTO_KEY: bool;

    fn key(&self) -> Self::Key;
    fn created(&self) -> DateTimeWithTimeZone;

    /// Install a store-assigned key. Only called when `AUTO_KEY` is set.
    fn assign_key(&mut self, _id: i32) {}

    fn check_create(_input: &Self::Create) -> Result<(), ServiceError> {
        Ok(())
    }

    fn check_update(_input: &Self::Update) -> Result<(), ServiceError> {
        Ok(())
    }

    /// New row with `created == updated == now`.
    fn from_create(input: Self::Create, now: DateTimeWithTimeZone) -> Self;

    fn update_key(input: &Self::Update) -> Self::Key;

    /// Replacement row keeping the stored `created`.
    fn from_update(
        input: Self::Update,
        created: DateTimeWithTimeZone,
        now: DateTimeWithTimeZone,
    ) -> Self;

    fn resolve_filter(
        query: Self::ListQuery,
        today: NaiveDate,
    ) -> Result<Self::Filter, ServiceError>;

    /// In-process evaluation of `Filter`, equivalent to the SQL the store issues.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    /// Order of list results.
    fn list_order(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// List query of entities that are always listed in full.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Unfiltered {}
