use crate::basic_types::HashMap;
use crate::engine::DomainId;

#[derive(Debug, Default)]
pub(crate) struct VariableNames {
    integers: HashMap<DomainId, String>,
    integers_by_name: HashMap<String, DomainId>,
}

impl VariableNames {
    /// Get a domain by its name.
    pub(crate) fn get_domain_by_name(&self, name: &str) -> Option<DomainId> {
        self.integers_by_name.get(name).copied()
    }

    /// Get the name associated with a domain id.
    pub(crate) fn get_int_name(&self, domain_id: DomainId) -> Option<&str> {
        self.integers.get(&domain_id).map(|s| s.as_str())
    }

    /// Add a name to the integer variable. This will override the existing name if it exists.
    pub(crate) fn add_integer(&mut self, integer: DomainId, name: String) {
        if let Some(previous) = self.integers.insert(integer, name.clone()) {
            let _ = self.integers_by_name.remove(&previous);
        }
        let _ = self.integers_by_name.insert(name, integer);
    }
}
