//! HTTP handlers, one module per resource.
//!
//! Handlers validate input, pass the current instant into time-partitioned
//! queries, and shape repository results into responses. They never hold
//! state beyond what `AppState` provides.

pub mod artist;
pub mod show;
pub mod venue;
