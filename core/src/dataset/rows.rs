use crate::records::LaunchRecord;

/// Ordered, borrowed view over a subset of dataset rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowSet<'a> {
    rows: Vec<&'a LaunchRecord>,
}

impl<'a> RowSet<'a> {
    pub fn from_records(records: &'a [LaunchRecord]) -> Self {
        Self {
            rows: records.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LaunchRecord> + '_ {
        self.rows.iter().copied()
    }

    /// Keeps the rows satisfying `predicate`, preserving order.
    pub fn retain_where<F>(&self, mut predicate: F) -> RowSet<'a>
    where
        F: FnMut(&LaunchRecord) -> bool,
    {
        Self {
            rows: self.iter().filter(|record| predicate(*record)).collect(),
        }
    }
}
