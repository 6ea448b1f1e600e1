pub mod client;
pub mod gateway;
pub mod paginator;
pub mod queries;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

pub use client::GitHubClient;
pub use gateway::{CommandOutput, CommandRunner, ProcessRunner};
pub use paginator::Paginator;
