//! Application layer: the decision components and the engine that wires them.
//!
//! Components are stateless apart from their injected collaborators, so every
//! call is independent and may run concurrently with any other.

pub mod account;
pub mod availability;
pub mod checkout;
pub mod engine;
pub mod pricing;
pub mod shipping;
pub mod storefront;
