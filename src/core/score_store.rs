use crate::core::grading::grade_for;
use crate::domain::model::{Grade, Score};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_text, validate_required_value};
use std::collections::HashMap;

/// Scores per student id.
///
/// An id only shows up once it has at least one score. `order` remembers the
/// sequence in which ids first appeared and drives ranking tie-breaks.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    scores: HashMap<String, Vec<Score>>,
    order: Vec<String>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_score(&mut self, student_id: &str, score: Score) -> Result<()> {
        validate_required_text("student_id", student_id)?;

        tracing::debug!(
            "Adding score {} ({}) for {}",
            score.subject(),
            score.points(),
            student_id
        );

        match self.scores.get_mut(student_id) {
            Some(existing) => existing.push(score),
            None => {
                self.order.push(student_id.to_string());
                self.scores.insert(student_id.to_string(), vec![score]);
            }
        }
        Ok(())
    }

    pub fn try_add_score(&mut self, student_id: &str, score: Option<Score>) -> Result<()> {
        validate_required_text("student_id", student_id)?;
        let score = validate_required_value("score", score)?;
        self.add_score(student_id, score)
    }

    pub fn get_student_scores(&self, student_id: &str) -> Vec<Score> {
        self.scores.get(student_id).cloned().unwrap_or_default()
    }

    /// 平均分數；沒有成績時回傳 0
    pub fn calculate_average(&self, student_id: &str) -> f64 {
        match self.scores.get(student_id) {
            Some(scores) if !scores.is_empty() => {
                let total: f64 = scores.iter().map(Score::points).sum();
                total / scores.len() as f64
            }
            _ => 0.0,
        }
    }

    pub fn get_grade(&self, score: f64) -> Grade {
        grade_for(score)
    }

    /// Highest averages first, NaN averages last. Equal averages keep
    /// first-insertion order.
    pub fn get_top_students(&self, count: usize) -> Vec<(String, f64)> {
        if count == 0 {
            return Vec::new();
        }

        let mut averages: Vec<(String, f64)> = self
            .order
            .iter()
            .map(|id| (id.clone(), self.calculate_average(id)))
            .collect();

        averages.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or_else(|| a.1.is_nan().cmp(&b.1.is_nan()))
        });
        averages.truncate(count);
        averages
    }

    pub fn get_all_scores(&self) -> HashMap<String, Vec<Score>> {
        self.scores.clone()
    }

    pub fn student_ids(&self) -> Vec<String> {
        self.order.clone()
    }
}
