use crate::domain::model::Student;
use crate::domain::ports::StudentStorage;
use crate::utils::error::Result;
use csv::{ByteRecord, QuoteStyle, ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "students.csv";

/// Plain `id,name,age` lines: no header, no quoting, no escaping.
///
/// A comma inside a name splits the record into too many fields, so that
/// line is dropped on the next load.
#[derive(Debug, Clone)]
pub struct FlatFileStorage {
    path: PathBuf,
}

impl FlatFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends every well-formed record to `students`; stops at the first I/O failure.
    fn read_into(&self, students: &mut Vec<Student>) -> Result<()> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_path(&self.path)?;

        // 以位元組讀取，無效的 UTF-8 在解析欄位時以替代字元保留
        for record in reader.byte_records() {
            if let Some(student) = parse_record(&record?) {
                students.push(student);
            }
        }

        Ok(())
    }
}

impl StudentStorage for FlatFileStorage {
    fn save(&self, students: &[Student]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_path(&self.path)?;

        for student in students {
            let age = student.age().to_string();
            writer.write_record([student.id(), student.name(), age.as_str()])?;
        }
        writer.flush()?;

        tracing::debug!(
            "Saved {} students to {}",
            students.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Vec<Student>> {
        let mut students = Vec::new();
        self.read_into(&mut students)?;

        tracing::debug!(
            "Loaded {} students from {}",
            students.len(),
            self.path.display()
        );
        Ok(students)
    }
}

/// 欄位數不是 3、年齡不是整數、或 id/name 為空的行一律略過
fn parse_record(record: &ByteRecord) -> Option<Student> {
    if record.len() != 3 {
        return None;
    }

    let field = |index: usize| record.get(index).map(String::from_utf8_lossy);
    let age = field(2)?.parse::<i32>().ok()?;
    Student::new(field(0)?, field(1)?, age).ok()
}

/// Best-effort save: failures are logged and swallowed.
pub fn save_students_to_file(students: &[Student], path: impl AsRef<Path>) {
    let storage = FlatFileStorage::new(path.as_ref());
    if let Err(e) = storage.save(students) {
        tracing::error!(
            "Failed to save students to {}: {}",
            storage.path().display(),
            e
        );
    }
}

/// Never fails: on an I/O error, whatever was parsed before it is returned.
pub fn load_students_from_file(path: impl AsRef<Path>) -> Vec<Student> {
    let storage = FlatFileStorage::new(path.as_ref());
    let mut students = Vec::new();
    if let Err(e) = storage.read_into(&mut students) {
        tracing::error!(
            "Failed to load students from {}: {}",
            storage.path().display(),
            e
        );
    }
    students
}
