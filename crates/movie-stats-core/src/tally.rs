// Insertion-ordered per-key review counts and grade sums

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TallyEntry {
    pub key: i32,
    pub count: usize,
    pub grade_sum: i64,
}

/// Groups reviews by an identifier, remembering the order in which each
/// identifier was first seen.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    index: HashMap<i32, usize>,
    entries: Vec<TallyEntry>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: i32, grade: i32) {
        let slot = match self.index.get(&key) {
            Some(slot) => *slot,
            None => {
                self.entries.push(TallyEntry {
                    key,
                    count: 0,
                    grade_sum: 0,
                });
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[slot];
        entry.count += 1;
        entry.grade_sum += i64::from(grade);
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Every key whose count equals the highest count, in first-seen order.
    pub fn leaders(&self) -> Vec<i32> {
        let Some(highest) = self.entries.iter().map(|e| e.count).max() else {
            return Vec::new();
        };

        self.entries
            .iter()
            .filter(|e| e.count == highest)
            .map(|e| e.key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_seen_order() {
        let mut tally = Tally::new();
        tally.add(9, 1);
        tally.add(3, 2);
        tally.add(9, 4);

        let keys: Vec<i32> = tally.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![9, 3]);
        assert_eq!(tally.entries()[0].count, 2);
        assert_eq!(tally.entries()[0].grade_sum, 5);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_leaders_returns_full_tie_set() {
        let mut tally = Tally::new();
        for key in [4, 2, 4, 7, 2, 1] {
            tally.add(key, 5);
        }
        assert_eq!(tally.leaders(), vec![4, 2]);
    }

    #[test]
    fn test_leaders_of_empty_tally() {
        assert!(Tally::new().leaders().is_empty());
    }
}
