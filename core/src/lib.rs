pub mod config;
pub mod error;
pub mod skills;

pub use config::Config;
pub use error::{Result, SkillError};
pub use skills::*;
