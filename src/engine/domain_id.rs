use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

/// The handle of a variable in a [`crate::engine::DomainStore`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Copy, Hash)]
pub struct DomainId {
    id: u32,
}

impl DomainId {
    pub fn new(id: u32) -> Self {
        DomainId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn index(&self) -> usize {
        self.id as usize
    }
}

impl Display for DomainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl Debug for DomainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
