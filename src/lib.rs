pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::DrillConfig;

pub use adapters::github::GithubOrgClient;
pub use adapters::http::{get_json, HttpJsonSource};
pub use crate::core::annotations::{element_length, zoom_array};
pub use crate::core::comprehension::{async_comprehension, async_generator, measure_runtime};
pub use crate::core::delays::{measure_time, task_wait_n, task_wait_random, wait_n, wait_random};
pub use utils::error::{DrillError, Result};
pub use utils::memoize::{AsyncMemoized, Memoized};
pub use utils::nested_map::access_nested_map;
