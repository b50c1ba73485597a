use crate::core::score_store::ScoreStore;
use crate::core::student_store::StudentStore;
use crate::domain::model::{Grade, Score};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub scores: Vec<Score>,
    pub average: f64,
    pub grade: Grade,
}

/// One row per student in store order. Students without scores average 0.
pub fn build_report(students: &StudentStore, scores: &ScoreStore) -> Vec<StudentReport> {
    students
        .get_all()
        .into_iter()
        .map(|student| {
            let average = scores.calculate_average(student.id());
            StudentReport {
                id: student.id().to_string(),
                name: student.name().to_string(),
                age: student.age(),
                scores: scores.get_student_scores(student.id()),
                average,
                grade: scores.get_grade(average),
            }
        })
        .collect()
}

pub fn report_to_json(report: &[StudentReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
