mod about;
mod attributes;
mod chassis;
mod codes;
mod storage;

pub use about::*;
pub use attributes::*;
pub use chassis::*;
pub use codes::*;
pub use storage::*;
