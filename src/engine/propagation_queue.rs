use std::collections::VecDeque;

use crate::basic_types::HashSet;
use crate::engine::ConstraintId;

/// The constraints woken by domain changes, in the order they were first woken. A constraint is
/// in the queue at most once.
#[derive(Debug, Default)]
pub(crate) struct PropagationQueue {
    queue: VecDeque<ConstraintId>,
    present: HashSet<ConstraintId>,
}

impl PropagationQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.present.len()
    }

    pub(crate) fn enqueue(&mut self, constraint: ConstraintId) {
        if self.present.insert(constraint) {
            self.queue.push_back(constraint);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;
        let _ = self.present.remove(&constraint);
        Some(constraint)
    }

    pub(crate) fn clear(&mut self) {
        self.queue.clear();
        self.present.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::PropagationQueue;
    use crate::engine::ConstraintId;

    #[test]
    fn constraints_are_queued_once_in_wake_order() {
        let mut queue = PropagationQueue::default();

        queue.enqueue(ConstraintId(2));
        queue.enqueue(ConstraintId(0));
        queue.enqueue(ConstraintId(2));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(ConstraintId(2)));
        queue.enqueue(ConstraintId(2));
        assert_eq!(queue.pop(), Some(ConstraintId(0)));
        assert_eq!(queue.pop(), Some(ConstraintId(2)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
