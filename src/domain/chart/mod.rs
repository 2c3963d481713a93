//! Chart aggregate: lifecycle state, derived framing, and rendering ports.

pub mod entities;
pub mod services;
pub mod sink;
pub mod value_objects;

pub use entities::*;
pub use sink::*;
pub use value_objects::*;
