use crate::domain::model::Student;
use crate::utils::error::Result;

/// Persistence backend for student lists.
pub trait StudentStorage {
    fn save(&self, students: &[Student]) -> Result<()>;
    fn load(&self) -> Result<Vec<Student>>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn top_count(&self) -> usize;
    fn json_report(&self) -> bool;
}
