use movie_stats_models::{MAX_GRADE, MIN_GRADE};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of reviews per grade.
///
/// Grades 1-5 are always present (possibly with a zero count). Grades outside
/// that range show up only when some review carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeDistribution {
    counts: BTreeMap<i32, usize>,
}

impl GradeDistribution {
    pub fn new() -> Self {
        let counts = (MIN_GRADE..=MAX_GRADE).map(|grade| (grade, 0)).collect();
        Self { counts }
    }

    pub fn from_grades(grades: impl IntoIterator<Item = i32>) -> Self {
        let mut distribution = Self::new();
        for grade in grades {
            distribution.record(grade);
        }
        distribution
    }

    pub fn record(&mut self, grade: i32) {
        *self.counts.entry(grade).or_insert(0) += 1;
    }

    pub fn get(&self, grade: i32) -> usize {
        self.counts.get(&grade).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// (grade, count) pairs in ascending grade order
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(grade, count)| (*grade, *count))
    }
}

impl Default for GradeDistribution {
    fn default() -> Self {
        Self::new()
    }
}
