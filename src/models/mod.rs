pub mod repo;
pub mod report;

#[cfg(test)]
pub(crate) mod fixtures;

pub use repo::*;
pub use report::*;
