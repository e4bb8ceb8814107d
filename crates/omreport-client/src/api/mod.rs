//! Report families.

mod chassis;
mod storage;

pub use chassis::ChassisApi;
pub use storage::StorageApi;
