use std::fmt::Display;

use enumset::EnumSet;
use enumset::EnumSetType;

use super::Domain;
use crate::basic_types::DomainValue;

/// The levels at which a constraint can ask to be woken up by changes to a domain.
#[derive(Debug, EnumSetType, Hash)]
pub enum ConstraintEvent {
    /// The domain collapsed to a single value.
    Ground,
    /// One of the bounds of the domain moved.
    Bound,
    /// Any value was removed from the domain.
    Any,
}

impl Display for ConstraintEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintEvent::Ground => write!(f, "[Event:Ground]"),
            ConstraintEvent::Bound => write!(f, "[Event:Bound]"),
            ConstraintEvent::Any => write!(f, "[Event:Any]"),
        }
    }
}

/// Classification of how a domain changed, ordered from most to least specific.
///
/// A [`PruningEvent::Ground`] change is also a bound change and a removal, and a
/// [`PruningEvent::Bound`] change is also a removal; [`PruningEvent::included_events`] expands an
/// event into every [`ConstraintEvent`] it subsumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PruningEvent {
    /// The domain became a single value.
    Ground,
    /// An endpoint moved and no value in between was removed on its own.
    Bound,
    /// Only values strictly between the endpoints were removed.
    Any,
    /// The domain did not change.
    None,
}

impl PruningEvent {
    /// Classify the change from `before` to `after`, where `after` is a non-empty subset of
    /// `before`.
    pub fn between<V: DomainValue>(before: &Domain<V>, after: &Domain<V>) -> PruningEvent {
        if after.size() == before.size() {
            PruningEvent::None
        } else if after.is_singleton() {
            PruningEvent::Ground
        } else if after.min() != before.min() || after.max() != before.max() {
            PruningEvent::Bound
        } else {
            PruningEvent::Any
        }
    }

    /// The constraint events which fire when a domain changes with `self`.
    pub fn included_events(self) -> EnumSet<ConstraintEvent> {
        match self {
            PruningEvent::Ground => EnumSet::all(),
            PruningEvent::Bound => ConstraintEvent::Bound | ConstraintEvent::Any,
            PruningEvent::Any => EnumSet::only(ConstraintEvent::Any),
            PruningEvent::None => EnumSet::empty(),
        }
    }

    /// Whether the domain changed at all.
    pub fn is_change(self) -> bool {
        self != PruningEvent::None
    }

    /// The more specific of two events; used to summarise several changes to one domain.
    pub fn most_specific(self, other: PruningEvent) -> PruningEvent {
        self.min(other)
    }
}

impl From<ConstraintEvent> for PruningEvent {
    fn from(event: ConstraintEvent) -> Self {
        match event {
            ConstraintEvent::Ground => PruningEvent::Ground,
            ConstraintEvent::Bound => PruningEvent::Bound,
            ConstraintEvent::Any => PruningEvent::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::ConstraintEvent;
    use super::PruningEvent;
    use crate::domains::Domain;

    #[test]
    fn classification_of_changes() {
        let before = Domain::interval(1, 10);

        assert_eq!(
            PruningEvent::between(&before, &Domain::interval(5, 5)),
            PruningEvent::Ground
        );
        assert_eq!(
            PruningEvent::between(&before, &Domain::interval(3, 10)),
            PruningEvent::Bound
        );
        assert_eq!(
            PruningEvent::between(&before, &before.subtract_value(&5)),
            PruningEvent::Any
        );
        assert_eq!(
            PruningEvent::between(&before, &before.clone()),
            PruningEvent::None
        );
    }

    #[test]
    fn more_specific_events_include_less_specific_ones() {
        assert_eq!(PruningEvent::Ground.included_events(), EnumSet::all());
        assert!(PruningEvent::Bound
            .included_events()
            .contains(ConstraintEvent::Any));
        assert!(!PruningEvent::Bound
            .included_events()
            .contains(ConstraintEvent::Ground));
        assert_eq!(
            PruningEvent::Any.included_events(),
            EnumSet::only(ConstraintEvent::Any)
        );
        assert!(PruningEvent::None.included_events().is_empty());
    }

    #[test]
    fn most_specific_prefers_ground() {
        assert_eq!(
            PruningEvent::Any.most_specific(PruningEvent::Ground),
            PruningEvent::Ground
        );
        assert_eq!(
            PruningEvent::None.most_specific(PruningEvent::Any),
            PruningEvent::Any
        );
    }
}
