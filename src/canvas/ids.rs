//! Node identity generation.
//!
//! Each editing session owns its own generator, so two sessions never share
//! a sequence.

use crate::config::DEFAULT_ID_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdGenerator {
    prefix: String,
    counter: u64,
}

impl Default for NodeIdGenerator {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }
}

impl NodeIdGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        NodeIdGenerator {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Next id in the sequence: `<prefix>1`, `<prefix>2`, ...
    pub fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}{}", self.prefix, self.counter)
    }

    /// Restart the sequence. Meant for deterministic test setup.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Number of ids issued since creation or the last reset.
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        let mut ids = NodeIdGenerator::default();
        assert_eq!(ids.next_id(), "node-1");
        assert_eq!(ids.next_id(), "node-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn reset_restarts_sequence() {
        let mut ids = NodeIdGenerator::with_prefix("n");
        ids.next_id();
        ids.next_id();
        ids.reset();
        assert_eq!(ids.issued(), 0);
        assert_eq!(ids.next_id(), "n1");
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = NodeIdGenerator::default();
        let mut b = NodeIdGenerator::default();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), "node-1");
        assert_eq!(a.next_id(), "node-3");
    }
}
