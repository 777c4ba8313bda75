// Router module
// Public interface for intent classification

mod decision;
mod policy;

pub use decision::{Intent, Router};
pub use policy::{PolicyKind, RoutingPolicy};
