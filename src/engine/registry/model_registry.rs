use enumset::EnumSet;

use super::ConstraintId;
use crate::domains::ConstraintEvent;

/// The permanent constraints of a domain, one list per [`ConstraintEvent`].
///
/// Removal swaps the entry with the last one of its list, so the order within a list is not
/// preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    ground: Vec<ConstraintId>,
    bound: Vec<ConstraintId>,
    any: Vec<ConstraintId>,
}

impl ModelRegistry {
    /// Register `constraint` to be woken on `event`. Returns false if it already was.
    pub fn put(&mut self, constraint: ConstraintId, event: ConstraintEvent) -> bool {
        let list = self.list_mut(event);
        if list.contains(&constraint) {
            return false;
        }

        list.push(constraint);
        true
    }

    /// Remove `constraint`, looking at the most specific event first. Returns the event it was
    /// registered for.
    pub fn remove(&mut self, constraint: ConstraintId) -> Option<ConstraintEvent> {
        for event in EnumSet::<ConstraintEvent>::all() {
            let list = self.list_mut(event);
            if let Some(position) = list.iter().position(|&entry| entry == constraint) {
                let _ = list.swap_remove(position);
                return Some(event);
            }
        }

        None
    }

    pub fn constraints(&self, event: ConstraintEvent) -> &[ConstraintId] {
        match event {
            ConstraintEvent::Ground => &self.ground,
            ConstraintEvent::Bound => &self.bound,
            ConstraintEvent::Any => &self.any,
        }
    }

    pub fn contains(&self, constraint: ConstraintId) -> bool {
        EnumSet::<ConstraintEvent>::all()
            .iter()
            .any(|event| self.constraints(event).contains(&constraint))
    }

    /// The number of entries over all events.
    pub fn len(&self) -> usize {
        self.ground.len() + self.bound.len() + self.any.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list_mut(&mut self, event: ConstraintEvent) -> &mut Vec<ConstraintId> {
        match event {
            ConstraintEvent::Ground => &mut self.ground,
            ConstraintEvent::Bound => &mut self.bound,
            ConstraintEvent::Any => &mut self.any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModelRegistry;
    use crate::domains::ConstraintEvent;
    use crate::engine::ConstraintId;

    #[test]
    fn adding_twice_at_one_event_is_a_no_op() {
        let mut registry = ModelRegistry::default();

        assert!(registry.put(ConstraintId(1), ConstraintEvent::Bound));
        assert!(!registry.put(ConstraintId(1), ConstraintEvent::Bound));

        assert_eq!(registry.constraints(ConstraintEvent::Bound), &[ConstraintId(1)]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn removal_swaps_with_the_last_entry() {
        let mut registry = ModelRegistry::default();
        for id in 0..4 {
            let _ = registry.put(ConstraintId(id), ConstraintEvent::Any);
        }

        assert_eq!(registry.remove(ConstraintId(1)), Some(ConstraintEvent::Any));

        assert_eq!(
            registry.constraints(ConstraintEvent::Any),
            &[ConstraintId(0), ConstraintId(3), ConstraintId(2)]
        );
        assert!(!registry.contains(ConstraintId(1)));
    }

    #[test]
    fn removal_prefers_the_most_specific_event() {
        let mut registry = ModelRegistry::default();
        let _ = registry.put(ConstraintId(7), ConstraintEvent::Any);
        let _ = registry.put(ConstraintId(7), ConstraintEvent::Ground);

        assert_eq!(registry.remove(ConstraintId(7)), Some(ConstraintEvent::Ground));
        assert_eq!(registry.remove(ConstraintId(7)), Some(ConstraintEvent::Any));
        assert_eq!(registry.remove(ConstraintId(7)), None);
        assert!(registry.is_empty());
    }
}
