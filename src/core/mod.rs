pub mod demo;
pub mod grading;
pub mod report;
pub mod score_store;
pub mod student_store;

pub use crate::domain::model::{Grade, Score, Student};
pub use crate::domain::ports::{ConfigProvider, StudentStorage};
pub use crate::utils::error::Result;
