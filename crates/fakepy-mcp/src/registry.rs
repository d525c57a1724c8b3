//! Tool registration.

use fakegen::{Faker, RegistryEntry};
use std::collections::HashMap;
use std::sync::Arc;

use crate::adapter::{build_adapter, ToolAdapter};

/// Registered adapters in registration order. The first registration for a
/// name wins.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    adapters: Vec<Arc<ToolAdapter>>,
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false, leaving the registry untouched, if the name is taken.
    pub fn register(&mut self, adapter: ToolAdapter) -> bool {
        if self.by_name.contains_key(adapter.name()) {
            return false;
        }
        self.by_name.insert(adapter.name(), self.adapters.len());
        self.adapters.push(Arc::new(adapter));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ToolAdapter>> {
        self.by_name.get(name).map(|&index| &self.adapters[index])
    }

    pub fn adapters(&self) -> &[Arc<ToolAdapter>] {
        &self.adapters
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.adapters.iter().map(|adapter| adapter.name())
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

/// Adapt every eligible entry and register it. Names already present are
/// skipped, so running this twice changes nothing. Returns how many adapters
/// were added.
pub fn register_all(
    registry: &mut ToolRegistry,
    entries: &[RegistryEntry],
    faker: &Arc<Faker>,
) -> usize {
    let mut added = 0;
    for entry in entries {
        if registry.contains(entry.name) {
            continue;
        }
        let Some(adapter) = build_adapter(entry, faker) else {
            continue;
        };
        tracing::debug!(
            tool = adapter.name(),
            params = adapter.params().len(),
            returns = %adapter.returns(),
            "Registered tool"
        );
        if registry.register(adapter) {
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faker() -> Arc<Faker> {
        Arc::new(Faker::new())
    }

    #[test]
    fn test_register_all_is_idempotent() {
        let faker = faker();
        let mut registry = ToolRegistry::new();
        let first = register_all(&mut registry, fakegen::registry(), &faker);
        assert!(first > 50);
        assert_eq!(register_all(&mut registry, fakegen::registry(), &faker), 0);
        assert_eq!(registry.len(), first);
    }

    #[test]
    fn test_values_are_not_registered() {
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, fakegen::registry(), &faker());
        assert!(!registry.contains("locale"));
        assert!(registry.contains("pyint"));
        assert!(registry.contains("pdf_file"));
    }

    #[test]
    fn test_first_registration_wins() {
        let faker = faker();
        let entries = fakegen::registry();
        let pyint = entries.iter().find(|e| e.name == "pyint").unwrap();

        let mut registry = ToolRegistry::new();
        let first = build_adapter(pyint, &faker).unwrap();
        assert!(registry.register(first));
        assert!(!registry.register(build_adapter(pyint, &faker).unwrap()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_order_follows_registry() {
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, fakegen::registry(), &faker());
        let names: Vec<_> = registry.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
