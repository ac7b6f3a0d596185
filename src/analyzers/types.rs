//! Data types produced by the analysis pipeline.

use serde::Serialize;

use crate::analyzers::grade::Grade;

/// Derived name → grade mapping, in the same order as the store it came from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GradeBook {
    entries: Vec<(String, Grade)>,
}

impl GradeBook {
    /// Looks up the grade for `name`.
    pub fn get(&self, name: &str) -> Option<Grade> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, g)| *g)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grade)> {
        self.entries.iter().map(|(n, g)| (n.as_str(), g))
    }
}

impl FromIterator<(String, Grade)> for GradeBook {
    fn from_iter<I: IntoIterator<Item = (String, Grade)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Number of students per grade. Every grade is always present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "B")]
    pub b: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "D")]
    pub d: usize,
    #[serde(rename = "F")]
    pub f: usize,
}

impl GradeDistribution {
    pub fn increment(&mut self, grade: &Grade) {
        *self.slot(grade) += 1;
    }

    pub fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::A => self.a,
            Grade::B => self.b,
            Grade::C => self.c,
            Grade::D => self.d,
            Grade::F => self.f,
        }
    }

    /// Iterates `(grade, count)` in the fixed order A, B, C, D, F.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.into_iter().map(move |g| (g, self.count(g)))
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d + self.f
    }

    fn slot(&mut self, grade: &Grade) -> &mut usize {
        match grade {
            Grade::A => &mut self.a,
            Grade::B => &mut self.b,
            Grade::C => &mut self.c,
            Grade::D => &mut self.d,
            Grade::F => &mut self.f,
        }
    }
}

/// Names split by pass mark. Each name appears in exactly one list.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PassFailPartition {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}
