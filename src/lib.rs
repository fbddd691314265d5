pub mod depth;
pub mod error;
pub mod relation;
pub mod transfer;

pub use depth::total_depth;
pub use error::{OrbitError, Result};
pub use relation::{build, Record, RelationMap};
pub use transfer::transfers;
