//! Ports (hexagonal architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::FormWriter;
pub use outbound::{FormRepository, RepoResult, RepositoryError, ResponseRepository};
