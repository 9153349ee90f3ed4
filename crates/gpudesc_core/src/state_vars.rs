//! Generator Annotation Store
//!
//! Code generation passes attach string annotations to descriptors while
//! they only hold a shared reference. [`StateVars`] keeps those annotations
//! apart from the descriptor's identity: writes go through `&self`, and the
//! store never takes part in descriptor equality.
//!
//! The map is ordered by key so that encoded descriptors are byte-stable.

use std::collections::BTreeMap;

use parking_lot::RwLock;

/// Key/value annotations writable through a shared reference.
#[derive(Debug, Default)]
pub struct StateVars {
    vars: RwLock<BTreeMap<String, String>>,
}

impl StateVars {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value.
    pub fn set(&self, key: &str, value: &str) {
        self.vars.write().insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.read().contains_key(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.read().is_empty()
    }

    /// Copy of the current contents, in key order.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.read().clone()
    }

    /// Replace the whole contents. Used when restoring a cached descriptor.
    pub fn replace(&self, vars: BTreeMap<String, String>) {
        *self.vars.write() = vars;
    }
}

impl Clone for StateVars {
    fn clone(&self) -> Self {
        Self {
            vars: RwLock::new(self.snapshot()),
        }
    }
}

impl From<BTreeMap<String, String>> for StateVars {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: RwLock::new(vars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_overwrite() {
        let vars = StateVars::new();
        vars.set("batch_id", "0");
        vars.set("batch_id", "B");

        assert_eq!(vars.get("batch_id"), Some("B".to_string()));
        assert_eq!(vars.len(), 1);
        assert!(vars.get("missing").is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let a = StateVars::new();
        a.set("k", "1");

        let b = a.clone();
        b.set("k", "2");
        b.set("other", "x");

        assert_eq!(a.get("k"), Some("1".to_string()));
        assert!(!a.contains("other"));
        assert_eq!(b.get("k"), Some("2".to_string()));
    }

    #[test]
    fn test_snapshot_is_key_ordered() {
        let vars = StateVars::new();
        vars.set("z", "1");
        vars.set("a", "2");

        let keys: Vec<_> = vars.snapshot().into_keys().collect();
        assert_eq!(keys, ["a", "z"]);
    }
}
