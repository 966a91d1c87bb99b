//! The order lifecycle: closed vocabularies, the base state machine and its
//! tenant-filtered wrapper.
//!
//! Everything in here is pure. Values are `Copy`, transitions return new
//! values, and the only failure is
//! [`OrderError::IllegalAction`](crate::error::OrderError::IllegalAction).

pub mod action;
pub mod action_set;
pub mod command;
pub mod order;
pub mod ports;
pub mod state;
pub mod tenant;
pub mod tenanted;

/// Identifies an order tracked by the order desk.
pub type OrderId = u32;
