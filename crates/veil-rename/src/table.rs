use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RenameError;

/// Persistent store of renaming decisions, in both directions.
///
/// Keys are composite identities: `class` for classes and
/// `class name descriptor` (space-separated) for members. The table holds
/// no policy; duplicate inserts for the same identity simply overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameTable {
    old_to_new: HashMap<String, String>,
    new_to_old: HashMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_class(&mut self, old_name: &str, new_name: &str) {
        self.insert(old_name.to_string(), new_name.to_string());
    }

    pub fn record_member(
        &mut self,
        old_class: &str,
        old_name: &str,
        old_descriptor: &str,
        new_class: &str,
        new_name: &str,
        new_descriptor: &str,
    ) {
        self.insert(
            member_identity(old_class, old_name, old_descriptor),
            member_identity(new_class, new_name, new_descriptor),
        );
    }

    fn insert(&mut self, old: String, new: String) {
        self.new_to_old.insert(new.clone(), old.clone());
        self.old_to_new.insert(old, new);
    }

    /// New qualified name for a renamed class, if any.
    pub fn new_class_name(&self, old_name: &str) -> Option<&str> {
        self.old_to_new.get(old_name).map(String::as_str)
    }

    /// Original qualified name behind a renamed class, if any.
    pub fn old_class_name(&self, new_name: &str) -> Option<&str> {
        self.new_to_old.get(new_name).map(String::as_str)
    }

    /// New `(class, name, descriptor)` identity for a renamed member.
    pub fn new_member(
        &self,
        old_class: &str,
        old_name: &str,
        old_descriptor: &str,
    ) -> Option<(&str, &str, &str)> {
        self.old_to_new
            .get(&member_identity(old_class, old_name, old_descriptor))
            .and_then(|identity| split_member_identity(identity))
    }

    /// Original `(class, name, descriptor)` identity behind a renamed member.
    pub fn old_member(
        &self,
        new_class: &str,
        new_name: &str,
        new_descriptor: &str,
    ) -> Option<(&str, &str, &str)> {
        self.new_to_old
            .get(&member_identity(new_class, new_name, new_descriptor))
            .and_then(|identity| split_member_identity(identity))
    }

    pub fn len(&self) -> usize {
        self.old_to_new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old_to_new.is_empty()
    }

    /// All `(old, new)` composite identities.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.old_to_new
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }

    /// Serialize the mapping to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RenameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RenameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the mapping artifact for downstream bytecode rewriting.
    pub fn save_to(&self, path: &Path) -> Result<(), RenameError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self, RenameError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

fn member_identity(class: &str, name: &str, descriptor: &str) -> String {
    format!("{class} {name} {descriptor}")
}

fn split_member_identity(identity: &str) -> Option<(&str, &str, &str)> {
    let mut parts = identity.splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(class), Some(name), Some(descriptor)) => Some((class, name, descriptor)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lookup_both_directions() {
        let mut table = RenameTable::new();
        table.record_class("a", "com/renamed/Class0");

        assert_eq!(table.new_class_name("a"), Some("com/renamed/Class0"));
        assert_eq!(table.old_class_name("com/renamed/Class0"), Some("a"));
        assert_eq!(table.new_class_name("b"), None);
    }

    #[test]
    fn member_lookup_both_directions() {
        let mut table = RenameTable::new();
        table.record_member("a", "m", "()V", "Class0", "method_0", "()V");

        assert_eq!(table.new_member("a", "m", "()V"), Some(("Class0", "method_0", "()V")));
        assert_eq!(table.old_member("Class0", "method_0", "()V"), Some(("a", "m", "()V")));
        assert_eq!(table.new_member("a", "m", "(I)V"), None);
    }

    #[test]
    fn duplicate_insert_overwrites() {
        let mut table = RenameTable::new();
        table.record_class("a", "First");
        table.record_class("a", "Second");

        assert_eq!(table.len(), 1);
        assert_eq!(table.new_class_name("a"), Some("Second"));
        assert_eq!(table.old_class_name("Second"), Some("a"));
    }

    #[test]
    fn json_round_trip() {
        let mut table = RenameTable::new();
        table.record_class("a", "Class0");
        table.record_member("a", "m", "(La;)V", "Class0", "method_0", "(LClass0;)V");

        let restored = RenameTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.new_class_name("a"), Some("Class0"));
        assert_eq!(
            restored.new_member("a", "m", "(La;)V"),
            Some(("Class0", "method_0", "(LClass0;)V"))
        );
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");

        let mut table = RenameTable::new();
        table.record_class("a", "Class0");
        table.save_to(&path).unwrap();

        let restored = RenameTable::load_from(&path).unwrap();
        assert_eq!(restored.new_class_name("a"), Some("Class0"));
    }
}
