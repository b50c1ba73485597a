use crate::adapters::{load_students_from_file, save_students_to_file};
use crate::core::report::{build_report, report_to_json};
use crate::core::score_store::ScoreStore;
use crate::core::student_store::StudentStore;
use crate::domain::model::{Score, Student};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::Write;

const SAMPLE_STUDENTS: [(&str, &str, i32); 3] =
    [("S001", "Alice", 20), ("S002", "Bob", 22), ("S003", "Carol", 19)];

const SAMPLE_SCORES: [(&str, &str, f64); 5] = [
    ("S001", "Math", 95.5),
    ("S001", "English", 87.0),
    ("S002", "Math", 78.0),
    ("S002", "English", 86.0),
    ("S003", "Math", 90.0),
];

/// Drives the fixed demo transcript: populate, query, rank, then round-trip
/// the roster through the data file.
pub struct DemoRunner<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> DemoRunner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Vec<Student>> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Returns the students read back from the data file.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<Vec<Student>> {
        tracing::info!("Starting gradebook demo");

        let mut students = StudentStore::new();
        for (id, name, age) in SAMPLE_STUDENTS {
            students.add(Student::new(id, name, age)?);
        }

        let mut scores = ScoreStore::new();
        for (id, subject, points) in SAMPLE_SCORES {
            scores.add_score(id, Score::new(subject, points)?)?;
        }

        writeln!(out, "=== All students ===")?;
        for student in students.get_all() {
            writeln!(
                out,
                "{} {} (age {})",
                student.id(),
                student.name(),
                student.age()
            )?;
        }

        writeln!(out, "=== Students aged 19-20 ===")?;
        for student in students.get_students_by_age(19, 20) {
            writeln!(out, "{} {}", student.id(), student.name())?;
        }

        writeln!(out, "=== Names starting with 'A' ===")?;
        for student in students.find(|s| s.name().starts_with('A')) {
            writeln!(out, "{} {}", student.id(), student.name())?;
        }

        writeln!(
            out,
            "=== Students with scores: {} ===",
            scores.student_ids().join(", ")
        )?;

        writeln!(out, "=== Averages ===")?;
        for student in students.get_all() {
            let average = scores.calculate_average(student.id());
            writeln!(
                out,
                "{}: {:.2} ({})",
                student.name(),
                average,
                scores.get_grade(average)
            )?;
        }

        let top_count = self.config.top_count();
        writeln!(out, "=== Top {} ===", top_count)?;
        for (rank, (id, average)) in scores.get_top_students(top_count).iter().enumerate() {
            writeln!(out, "{}. {} {:.2}", rank + 1, id, average)?;
        }

        if self.config.json_report() {
            writeln!(out, "=== Report (JSON) ===")?;
            writeln!(out, "{}", report_to_json(&build_report(&students, &scores))?)?;
        }

        // Persist and read back
        let data_file = self.config.data_file();
        writeln!(out, "=== Saving to {} ===", data_file)?;
        save_students_to_file(&students.get_all(), data_file);

        let loaded = load_students_from_file(data_file);
        writeln!(out, "=== Loaded {} students ===", loaded.len())?;
        for student in &loaded {
            writeln!(
                out,
                "{} {} (age {})",
                student.id(),
                student.name(),
                student.age()
            )?;
        }

        if let Some(first) = loaded.first() {
            let removed = students.remove(first);
            writeln!(
                out,
                "Removed {}: {} ({} students left)",
                first.id(),
                removed,
                students.len()
            )?;
        }

        tracing::info!("Demo finished with {} students loaded", loaded.len());
        Ok(loaded)
    }
}
