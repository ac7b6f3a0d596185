//! In-memory record store for one analysis session.

use std::collections::HashMap;

use serde::Serialize;

/// A single student's name and score.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: f64,
}

/// Insertion-ordered mapping from student name to score.
///
/// Names are unique. Inserting an existing name replaces its score but keeps
/// the name at its original position, so iteration order is the order in
/// which names were first seen. Lookups go through a name → position index.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<ScoreRecord>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the score for `name`. Returns the previous score, if any.
    pub fn insert(&mut self, name: impl Into<String>, score: f64) -> Option<f64> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.records[pos].score, score));
        }

        self.index.insert(name.clone(), self.records.len());
        self.records.push(ScoreRecord { name, score });
        None
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&pos| self.records[pos].score)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.score).collect()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a ScoreRecord;
    type IntoIter = std::slice::Iter<'a, ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for (name, score) in iter {
            store.insert(name, score);
        }
        store
    }
}
