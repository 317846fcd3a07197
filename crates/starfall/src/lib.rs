pub mod cli;
pub mod runner;
pub mod settings;
pub mod window;

pub use cli::{parse_counts, UsageError};
pub use runner::SceneRunner;
