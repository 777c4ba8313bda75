// Tern - conversational assistant with rule-based query routing
// Library exports

pub mod agent;
pub mod cli;
pub mod config;
pub mod logging;
pub mod providers;
pub mod router;
