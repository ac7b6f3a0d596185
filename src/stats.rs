use serde::Serialize;

use crate::analyzers::grade::{build_grades, grade_distribution};
use crate::analyzers::partition::pass_fail;
use crate::analyzers::types::{GradeBook, GradeDistribution};
use crate::analyzers::utility::{average, max_score, median_score, min_score};
use crate::store::{RecordStore, ScoreRecord};

/// Everything the reporter prints about one record store.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisSummary {
    pub students: usize,
    pub average: f64,
    pub median: f64,
    pub max: ScoreRecord,
    pub min: ScoreRecord,
    pub distribution: GradeDistribution,
    pub pass_mark: f64,
    pub passed: Vec<String>,
    pub failed: Vec<String>,

    #[serde(skip)]
    pub grades: GradeBook,
}

impl AnalysisSummary {
    pub fn from_store(store: &RecordStore, pass_mark: f64) -> Self {
        let (max_name, max) = max_score(store);
        let (min_name, min) = min_score(store);
        let grades = build_grades(store);
        let distribution = grade_distribution(&grades);
        let split = pass_fail(store, pass_mark);

        AnalysisSummary {
            students: store.len(),
            average: average(store),
            median: median_score(store),
            max: ScoreRecord {
                name: max_name,
                score: max,
            },
            min: ScoreRecord {
                name: min_name,
                score: min,
            },
            distribution,
            pass_mark,
            passed: split.passed,
            failed: split.failed,
            grades,
        }
    }
}
