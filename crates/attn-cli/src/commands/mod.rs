//! CLI subcommand implementations.

pub mod estimate;
pub mod holidays;
pub mod project;
pub mod util;
