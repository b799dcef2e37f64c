//! Synthetic record source standing in for the host's data loading.

const SUBJECTS: [&str; 8] = [
    "invoice", "shipment", "ticket", "order", "payment", "refund", "report", "account",
];

const STATES: [&str; 5] = ["open", "pending", "closed", "archived", "flagged"];

/// Records loaded for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPage {
    pub page_number: u64,
    /// Zero-based index of the first record.
    pub first_index: u64,
    /// Total records in the source when loaded.
    pub total: u64,
    pub records: Vec<String>,
}

/// A record set of fixed size with generated contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticRecords {
    total: u64,
}

impl SyntheticRecords {
    pub fn new(total: u64) -> Self {
        Self { total }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Load a page. Pages past the end come back empty.
    pub fn fetch(&self, page_number: u64, page_size: u64) -> RecordPage {
        let first_index = page_number.saturating_sub(1).saturating_mul(page_size);
        let end = first_index.saturating_add(page_size).min(self.total);
        let records = (first_index..end).map(describe).collect();

        RecordPage {
            page_number,
            first_index,
            total: self.total,
            records,
        }
    }
}

fn describe(index: u64) -> String {
    let number = index + 1;
    let subject = SUBJECTS[(index % SUBJECTS.len() as u64) as usize];
    let state = STATES[(index / 3 % STATES.len() as u64) as usize];
    format!("{subject} #{number:05} ({state})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_middle_page() {
        let source = SyntheticRecords::new(95);
        let page = source.fetch(2, 10);
        assert_eq!(page.first_index, 10);
        assert_eq!(page.records.len(), 10);
        assert!(page.records[0].contains("#00011"));
    }

    #[test]
    fn test_fetch_last_partial_page() {
        let page = SyntheticRecords::new(95).fetch(10, 10);
        assert_eq!(page.records.len(), 5);
    }

    #[test]
    fn test_fetch_past_end() {
        let page = SyntheticRecords::new(95).fetch(11, 10);
        assert!(page.records.is_empty());
        assert_eq!(SyntheticRecords::new(0).fetch(1, 10).records.len(), 0);
    }
}
