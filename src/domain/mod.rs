//! Domain types and the ports through which the engine reaches its collaborators.

pub mod calendar;
pub mod email;
pub mod order;
pub mod ports;
pub mod shipping;
