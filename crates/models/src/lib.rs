//! SeaORM entities backing the reservation service.
//!
//! Each module mirrors one table; column names double as the JSON field names
//! served by the HTTP layer.

pub mod errors;
pub mod db;
pub mod user;
pub mod menu;
pub mod sales_day;
pub mod reservation;
