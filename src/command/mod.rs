pub mod stats;

pub use stats::{Destination, OutputPlan, Selection, StatsCommand, StatsOptions};
