//! Format implementations
//!
//! Linger is the input side (parsing only), Ibex the output side
//! (serialization only). Both meet at the IR in [`crate::ir`].

pub mod ibex;
pub mod linger;

pub use ibex::{serialize_to_ibex, IbexOptions};
pub use linger::parse_linger;
