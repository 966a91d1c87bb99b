//! Application layer coordinating many orders.
//!
//! This module defines the `OrderDesk`, which tracks the current instance of
//! each order behind an `OrderStore` and serialises competing writers with
//! compare-and-swap, and the `OrderView` rows it reports.

pub mod engine;
pub mod view;
