#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    documents: usize,
    elements: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            documents: 0,
            elements: 0,
        }
    }

    /// Record that one more document got its own signature
    pub fn bump_documents(&mut self) {
        self.documents += 1
    }

    /// Record that a bunch of elements were pushed into some signature
    pub fn bump_elements(&mut self, element_amount: usize) {
        self.elements += element_amount
    }

    pub fn get_documents(&self) -> usize {
        self.documents
    }

    pub fn get_elements(&self) -> usize {
        self.elements
    }

    /// Sums the counters of two stats objects, e.g. those of two worker threads.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            documents: self.documents + other.documents,
            elements: self.elements + other.elements,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = Stats::new();
        assert_eq!(stats.get_documents(), 0);
        assert_eq!(stats.get_elements(), 0);
    }

    #[test]
    fn test_default_stats_initialized_to_zero() {
        assert_eq!(Stats::default(), Stats::new());
    }

    #[test]
    fn test_bump_documents_increments_by_one() {
        let mut stats = Stats::new();
        stats.bump_documents();
        stats.bump_documents();
        assert_eq!(stats.get_documents(), 2);
        assert_eq!(stats.get_elements(), 0);
    }

    #[test]
    fn test_bump_elements_accumulates() {
        let mut stats = Stats::new();
        stats.bump_elements(5);
        stats.bump_elements(0);
        stats.bump_elements(12);
        assert_eq!(stats.get_elements(), 17);
        assert_eq!(stats.get_documents(), 0);
    }

    #[test]
    fn test_merge_sums_counters() {
        let mut left = Stats::new();
        left.bump_documents();
        left.bump_elements(10);

        let mut right = Stats::new();
        right.bump_documents();
        right.bump_documents();
        right.bump_elements(3);

        let combined = left.merge(&right);
        assert_eq!(combined.get_documents(), 3);
        assert_eq!(combined.get_elements(), 13);
        // operands untouched
        assert_eq!(left.get_documents(), 1);
        assert_eq!(right.get_elements(), 3);
    }

    #[test]
    fn test_merge_with_default_is_identity() {
        let mut stats = Stats::new();
        stats.bump_documents();
        stats.bump_elements(42);
        assert_eq!(stats.merge(&Stats::default()), stats);
    }
}
