pub mod command;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod render;
pub mod report;

pub use command::{StatsCommand, StatsOptions};
pub use config::{ClientConfig, Config};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use render::Renderer;
pub use report::ReportFormat;
