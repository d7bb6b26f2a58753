use std::collections::HashMap;

use veil_classfile::ClassInfo;

/// Supplies the closed universe of classes a renaming pass operates on.
///
/// `resolve` must cover both own and external (library) classes; names it
/// cannot resolve are treated as absent ancestors, never as errors.
pub trait ClassProvider {
    /// Own (renameable) classes, in a stable order.
    fn own_classes(&self) -> Vec<&ClassInfo>;

    fn resolve(&self, name: &str) -> Option<&ClassInfo>;

    /// Invoked once after a renaming pass has fully populated its table, so
    /// implementations can re-derive whatever depends on the identifiers.
    fn reload(&mut self) {}
}

/// In-memory [`ClassProvider`] over an insertion-ordered set of classes.
#[derive(Debug, Default)]
pub struct ClassSet {
    classes: Vec<ClassInfo>,
    by_name: HashMap<String, usize>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class, replacing any existing class with the same name.
    pub fn insert(&mut self, class: ClassInfo) {
        match self.by_name.get(&class.name) {
            Some(&idx) => self.classes[idx] = class,
            None => {
                self.by_name.insert(class.name.clone(), self.classes.len());
                self.classes.push(class);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        self.by_name.get(name).map(|&idx| &self.classes[idx])
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.iter()
    }
}

impl ClassProvider for ClassSet {
    fn own_classes(&self) -> Vec<&ClassInfo> {
        self.classes.iter().filter(|cl| cl.own).collect()
    }

    fn resolve(&self, name: &str) -> Option<&ClassInfo> {
        self.get(name)
    }
}
