use std::fmt;

use serde::Serialize;

use crate::analyzers::types::{GradeBook, GradeDistribution};
use crate::store::RecordStore;

/// Letter grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades, best first. Distribution output follows this order.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a score into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
pub fn assign_grade(score: f64) -> Grade {
    match score {
        s if s >= 90.0 => Grade::A,
        s if s >= 80.0 => Grade::B,
        s if s >= 70.0 => Grade::C,
        s if s >= 60.0 => Grade::D,
        _ => Grade::F,
    }
}

/// Grades every record in the store, keeping store order.
pub fn build_grades(store: &RecordStore) -> GradeBook {
    store
        .iter()
        .map(|r| (r.name.clone(), assign_grade(r.score)))
        .collect()
}

/// Counts how many students received each grade.
pub fn grade_distribution(grades: &GradeBook) -> GradeDistribution {
    let mut dist = GradeDistribution::default();
    for (_, grade) in grades.iter() {
        dist.increment(grade);
    }
    dist
}
