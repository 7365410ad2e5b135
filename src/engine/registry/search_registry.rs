use super::ConstraintId;
use crate::munchkin_assert_simple;

/// The constraints local to the current search node.
///
/// Entries before the cursor are active; entries at or after it are parked, i.e. satisfied at
/// some deeper node and kept around so that reactivating them does not allocate.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchRegistry {
    entries: Vec<ConstraintId>,
    active: usize,
}

impl SearchRegistry {
    /// Make `constraint` active. Returns false if it already was.
    pub fn activate(&mut self, constraint: ConstraintId) -> bool {
        if self.is_active(constraint) {
            return false;
        }

        if let Some(parked) = self.entries[self.active..]
            .iter()
            .position(|&entry| entry == constraint)
        {
            self.entries.swap(self.active, self.active + parked);
        } else if self.active == self.entries.len() {
            self.entries.push(constraint);
        } else {
            // The parked entry at the cursor moves to the end to make room.
            let displaced = std::mem::replace(&mut self.entries[self.active], constraint);
            self.entries.push(displaced);
        }

        self.active += 1;
        true
    }

    /// Park `constraint`. Returns false if it was not active.
    pub fn deactivate(&mut self, constraint: ConstraintId) -> bool {
        match self.active().iter().position(|&entry| entry == constraint) {
            Some(position) => {
                self.deactivate_at(position);
                true
            }
            None => false,
        }
    }

    /// Park the active entry at `position`; the last active entry takes its place.
    pub fn deactivate_at(&mut self, position: usize) {
        munchkin_assert_simple!(
            position < self.active,
            "position {position} is not an active entry, only {} are active",
            self.active
        );

        self.entries.swap(position, self.active - 1);
        self.active -= 1;
    }

    pub fn is_active(&self, constraint: ConstraintId) -> bool {
        self.active().contains(&constraint)
    }

    pub fn active(&self) -> &[ConstraintId] {
        &self.entries[..self.active]
    }

    pub fn parked(&self) -> &[ConstraintId] {
        &self.entries[self.active..]
    }

    pub fn active_count(&self) -> usize {
        self.active
    }
}

/// A copy holds only the active entries; parked entries stay with the registry that parked them.
impl Clone for SearchRegistry {
    fn clone(&self) -> Self {
        SearchRegistry {
            entries: self.active().to_vec(),
            active: self.active,
        }
    }
}
