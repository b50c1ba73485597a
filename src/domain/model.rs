use crate::utils::error::Result;
use crate::utils::validation::validate_required_text;
use serde::Serialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use strum::{Display, EnumString};

/// A student record. Identity (equality, hashing, ordering) is the `id` alone.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    id: String,
    name: String,
    age: i32,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        validate_required_text("id", &id)?;
        validate_required_text("name", &name)?;

        Ok(Self { id, name, age })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    subject: String,
    points: f64,
}

impl Score {
    pub fn new(subject: impl Into<String>, points: f64) -> Result<Self> {
        let subject = subject.into();
        validate_required_text("subject", &subject)?;

        Ok(Self { subject, points })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn points(&self) -> f64 {
        self.points
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}
