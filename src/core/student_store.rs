use crate::domain::model::Student;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_value;

/// In-memory list of students in insertion order.
///
/// Duplicate ids are accepted; `remove` only drops the first match.
#[derive(Debug, Clone, Default)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) {
        tracing::debug!("Adding student {}", student.id());
        self.students.push(student);
    }

    /// Same as [`add`](Self::add) for callers holding an optional value.
    pub fn try_add(&mut self, student: Option<Student>) -> Result<()> {
        let student = validate_required_value("student", student)?;
        self.add(student);
        Ok(())
    }

    pub fn remove(&mut self, student: &Student) -> bool {
        match self.students.iter().position(|s| s == student) {
            Some(index) => {
                self.students.remove(index);
                tracing::debug!("Removed student {}", student.id());
                true
            }
            None => false,
        }
    }

    pub fn get_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn find<F>(&self, predicate: F) -> Vec<Student>
    where
        F: Fn(&Student) -> bool,
    {
        self.students
            .iter()
            .filter(|s| predicate(*s))
            .cloned()
            .collect()
    }

    /// 年齡區間兩端皆包含；`min_age > max_age` 時回傳空結果
    pub fn get_students_by_age(&self, min_age: i32, max_age: i32) -> Vec<Student> {
        self.find(|s| s.age() >= min_age && s.age() <= max_age)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Student> {
        self.students.iter().find(|s| s.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
