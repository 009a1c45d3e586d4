//! Service layer for the reservation API.
//! - `resources`: the entity capability trait and the four entity bindings.
//! - `store`: the persistence contract with SeaORM and in-memory backends.
//! - `resource_service`: the single list/create/update machine shared by all entities.

pub mod errors;
pub mod clock;
pub mod resources;
pub mod store;
pub mod resource_service;
#[cfg(test)]
pub mod test_support;

pub use clock::{Clock, ManualClock, SystemClock};
pub use resource_service::ResourceService;
pub use resources::Resource;
pub use store::{memory::MemoryStore, seaorm::SeaOrmStore, ResourceStore, StoreError};
