use std::collections::HashMap;

use crate::RejectionSummary;

#[derive(Debug, Default)]
pub(crate) struct RejectionCounter {
    counts: HashMap<String, u64>,
}

impl RejectionCounter {
    pub(crate) fn add(&mut self, kind: &str) {
        *self.counts.entry(kind.to_string()).or_default() += 1;
    }

    pub(crate) fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Summaries sorted by kind.
    pub(crate) fn into_summaries(self) -> Vec<RejectionSummary> {
        let mut summaries: Vec<RejectionSummary> = self
            .counts
            .into_iter()
            .map(|(kind, count)| RejectionSummary { kind, count })
            .collect();
        summaries.sort_by(|a, b| a.kind.cmp(&b.kind));
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::RejectionCounter;

    #[test]
    fn summaries_are_sorted_and_totalled() {
        let mut counter = RejectionCounter::default();
        counter.add("invalid_sync");
        counter.add("checksum_mismatch");
        counter.add("invalid_sync");
        assert_eq!(counter.total(), 3);

        let summaries = counter.into_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].kind, "checksum_mismatch");
        assert_eq!(summaries[0].count, 1);
        assert_eq!(summaries[1].kind, "invalid_sync");
        assert_eq!(summaries[1].count, 2);
    }
}
