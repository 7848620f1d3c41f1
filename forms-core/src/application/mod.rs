//! Application services
//!
//! Orchestrate the domain over the repository ports.

pub mod collector;
pub mod gateway;

pub use collector::{RecordResponse, ResponseCollector};
pub use gateway::FormGateway;
