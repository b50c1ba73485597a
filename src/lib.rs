pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{load_students_from_file, save_students_to_file, FlatFileStorage};
pub use config::AppConfig;
pub use crate::core::{
    demo::DemoRunner, score_store::ScoreStore, student_store::StudentStore, Grade, Score, Student,
};
pub use utils::error::{GradebookError, Result};
