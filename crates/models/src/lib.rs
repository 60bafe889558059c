//! Records and request schemas shared by the service and HTTP layers.

pub mod errors;
pub mod entry;
pub mod product;
