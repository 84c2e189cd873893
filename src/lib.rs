//! Spatial Radius Filter Library.
//! Finds stored records within a great-circle radius of a center point.

#[macro_use]
extern crate log;

mod types {
    pub mod bounds;
    pub mod location;
    pub mod record;
}

mod utils {
    pub mod generator;
    pub mod haversine;
    pub mod store_state;
}

pub mod error;
pub mod filter;
pub mod store;

pub use crate::types::bounds;
pub use crate::types::location;
pub use crate::types::record;
pub use crate::utils::generator;
pub use crate::utils::haversine;
pub use crate::utils::store_state;
