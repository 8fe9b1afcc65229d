use std::collections::VecDeque;

use crate::document::ElementSet;

/// Stack of whole-sketch snapshots backing linear undo.
///
/// Snapshots are taken before each commit, so popping one restores the sketch
/// as it was just before that commit. There is no redo.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    /// Oldest snapshot at the front, newest at the back
    snapshots: VecDeque<ElementSet>,
    max_depth: Option<usize>,
}

impl SnapshotHistory {
    /// Creates a new empty, unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `max_depth` snapshots, evicting the oldest.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            snapshots: VecDeque::new(),
            max_depth,
        }
    }

    /// Push a deep copy of `elements`.
    pub fn snapshot(&mut self, elements: &ElementSet) {
        if self.max_depth == Some(0) {
            return;
        }
        self.snapshots.push_back(elements.clone());
        if let Some(max_depth) = self.max_depth {
            while self.snapshots.len() > max_depth {
                self.snapshots.pop_front();
                log::debug!("Evicted oldest undo snapshot (max depth {})", max_depth);
            }
        }
    }

    /// Pop the most recent snapshot, if any.
    pub fn undo(&mut self) -> Option<ElementSet> {
        self.snapshots.pop_back()
    }

    /// Returns true if there are snapshots that can be restored
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Clear the snapshot history
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, Element, Point};

    fn with_doors(count: usize) -> ElementSet {
        let mut set = ElementSet::new();
        for i in 0..count {
            set.add_element(Element::Door(factory::create_door(Point::new(i as f32, 0.0))));
        }
        set
    }

    #[test]
    fn test_undo_pops_in_reverse_order() {
        let mut history = SnapshotHistory::new();
        let first = with_doors(0);
        let second = with_doors(1);
        history.snapshot(&first);
        history.snapshot(&second);

        assert_eq!(history.undo(), Some(second));
        assert_eq!(history.undo(), Some(first));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutation() {
        let mut history = SnapshotHistory::new();
        let mut live = with_doors(1);
        history.snapshot(&live);

        live.doors[0].rotation = 45.0;
        live.doors.clear();

        let restored = history.undo().unwrap();
        assert_eq!(restored.doors.len(), 1);
        assert_eq!(restored.doors[0].rotation, 0.0);
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut history = SnapshotHistory::with_max_depth(Some(2));
        for i in 0..4 {
            history.snapshot(&with_doors(i));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo().map(|s| s.len()), Some(3));
        assert_eq!(history.undo().map(|s| s.len()), Some(2));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_zero_depth_keeps_nothing() {
        let mut history = SnapshotHistory::with_max_depth(Some(0));
        history.snapshot(&with_doors(1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = SnapshotHistory::new();
        history.snapshot(&with_doors(1));
        history.clear();
        assert!(!history.can_undo());
    }
}
