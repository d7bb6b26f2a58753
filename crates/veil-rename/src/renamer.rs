use std::collections::{HashMap, HashSet};

use veil_classfile::{replace_simple_name, simple_name, ClassInfo, MemberInfo};

use crate::error::RenameError;
use crate::forest::InheritanceForest;
use crate::oracle::{ElementKind, NameOracle};
use crate::provider::ClassProvider;
use crate::rewrite::{rewrite_field_descriptor, rewrite_method_descriptor};
use crate::table::RenameTable;

/// Inherited member-name decisions for one class: `"name descriptor"` key
/// to the new simple name.
type NameMap = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Upper bound on candidate names requested per identifier before the
    /// pass fails with [`RenameError::NameGenerationExhausted`]. Guards
    /// against oracles whose candidates never clear the collision sets.
    pub max_name_attempts: usize,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            max_name_attempts: 1000,
        }
    }
}

/// Run a full renaming pass over the provider's classes.
///
/// In order: build the inheritance forests, rename class simple names,
/// rename interface members roots-first, rename class members roots-first
/// (folding in interface decisions), then let the provider reload whatever
/// derives from the identifiers. Member-name decisions propagate downward
/// so overrides keep a single new name; see [`RenameTable`] for the key
/// scheme of the result.
pub fn rename_all<P, O>(
    provider: &mut P,
    oracle: &mut O,
    options: &RenameOptions,
) -> Result<RenameTable, RenameError>
where
    P: ClassProvider + ?Sized,
    O: NameOracle + ?Sized,
{
    let forest = InheritanceForest::build(&*provider);
    let mut pass = Pass {
        provider: &*provider,
        oracle,
        options,
        forest: &forest,
        table: RenameTable::new(),
        interface_maps: HashMap::new(),
        external_in_progress: HashSet::new(),
    };

    pass.rename_class_names()?;
    pass.rename_interface_members()?;
    pass.rename_class_members()?;

    let table = pass.table;
    provider.reload();
    Ok(table)
}

struct Pass<'a, P: ?Sized, O: ?Sized> {
    provider: &'a P,
    oracle: &'a mut O,
    options: &'a RenameOptions,
    forest: &'a InheritanceForest,
    table: RenameTable,
    /// Completed name maps of processed interfaces, keyed by original name.
    interface_maps: HashMap<String, NameMap>,
    /// External interfaces currently being resolved, to keep cyclic library
    /// data from recursing forever.
    external_in_progress: HashSet<String>,
}

impl<P, O> Pass<'_, P, O>
where
    P: ClassProvider + ?Sized,
    O: NameOracle + ?Sized,
{
    /// Pass A: decide new simple names for all own classes. Traversal order
    /// is irrelevant here; each class is decided exactly once.
    fn rename_class_names(&mut self) -> Result<(), RenameError> {
        let mut order = self.forest.reverse_post_order(self.forest.interface_roots());
        order.extend(self.forest.reverse_post_order(self.forest.class_roots()));

        for id in order {
            let Some(class) = self.provider.resolve(self.forest.name(id)) else {
                continue;
            };
            if !class.own {
                continue;
            }
            let old_simple = simple_name(&class.name);
            if !self
                .oracle
                .should_rename(ElementKind::Class, &class.name, old_simple, None)
            {
                continue;
            }

            let mut attempts = 0;
            let new_name = loop {
                if attempts >= self.options.max_name_attempts {
                    return Err(RenameError::NameGenerationExhausted {
                        kind: ElementKind::Class,
                        owner: class.name.clone(),
                        name: old_simple.to_string(),
                        attempts,
                    });
                }
                attempts += 1;
                let candidate =
                    self.oracle
                        .next_name(ElementKind::Class, &class.name, old_simple, None);
                let full = replace_simple_name(&class.name, &candidate);
                if self.provider.resolve(&full).is_none() {
                    break full;
                }
                tracing::debug!(class = %class.name, %candidate, "class name taken, retrying");
            };

            tracing::debug!(old = %class.name, new = %new_name, "renaming class");
            self.table.record_class(&class.name, &new_name);
        }
        Ok(())
    }

    /// Pass B: interface members, roots first, so super-interface decisions
    /// are in `interface_maps` before any subtype consults them.
    fn rename_interface_members(&mut self) -> Result<(), RenameError> {
        for id in self.forest.reverse_post_order(self.forest.interface_roots()) {
            let Some(class) = self.provider.resolve(self.forest.name(id)) else {
                continue;
            };
            let mut names = NameMap::new();
            self.merge_super_interfaces(class, &mut names)?;
            self.rename_members(class, &mut names)?;
            self.interface_maps.insert(class.name.clone(), names);
        }
        Ok(())
    }

    /// Pass C: class members, roots first. Seeds each class from its
    /// superclass map, then folds in interface maps in declaration order.
    fn rename_class_members(&mut self) -> Result<(), RenameError> {
        let mut class_maps: HashMap<String, NameMap> = HashMap::new();

        for id in self.forest.reverse_post_order(self.forest.class_roots()) {
            let Some(class) = self.provider.resolve(self.forest.name(id)) else {
                continue;
            };

            let mut names = NameMap::new();
            if let Some(super_name) = &class.super_name {
                if let Some(map) = class_maps.get(super_name) {
                    names.extend(map.iter().map(|(key, value)| (key.clone(), value.clone())));
                }
            }
            self.merge_super_interfaces(class, &mut names)?;
            self.rename_members(class, &mut names)?;

            // Leaf classes have no subtypes left to seed.
            if !self.forest.children(id).is_empty() {
                class_maps.insert(class.name.clone(), names);
            }
        }
        Ok(())
    }

    /// Fold the name maps of `class`'s declared interfaces into `names`, in
    /// declaration order; later entries overwrite earlier ones. Interfaces
    /// not processed by Pass B (external ones) are resolved on the fly.
    fn merge_super_interfaces(
        &mut self,
        class: &ClassInfo,
        names: &mut NameMap,
    ) -> Result<(), RenameError> {
        for super_interface in &class.interfaces {
            if let Some(map) = self.interface_maps.get(super_interface) {
                names.extend(map.iter().map(|(key, value)| (key.clone(), value.clone())));
            } else if let Some(external) = self.provider.resolve(super_interface) {
                let map = self.external_interface_names(external)?;
                names.extend(map);
            }
        }
        Ok(())
    }

    /// Name map of an interface outside the interface forest. Recomputed on
    /// every call and never stored in `interface_maps`: external interfaces
    /// are not part of the rename set.
    fn external_interface_names(&mut self, class: &ClassInfo) -> Result<NameMap, RenameError> {
        if !self.external_in_progress.insert(class.name.clone()) {
            tracing::debug!(interface = %class.name, "cyclic external interface data");
            return Ok(NameMap::new());
        }

        let mut names = NameMap::new();
        let result = self
            .merge_super_interfaces(class, &mut names)
            .and_then(|()| self.rename_members(class, &mut names));
        self.external_in_progress.remove(&class.name);
        result?;
        Ok(names)
    }

    /// Rename the members of one class into `names`.
    ///
    /// Collision checks are per-class and name-only: a candidate is accepted
    /// as soon as no declared member of the class carries that name,
    /// descriptors notwithstanding.
    fn rename_members(&mut self, class: &ClassInfo, names: &mut NameMap) -> Result<(), RenameError> {
        let new_class_name = self
            .table
            .new_class_name(&class.name)
            .unwrap_or(&class.name)
            .to_string();

        let declared_methods: HashSet<&str> =
            class.methods.iter().map(|m| m.name.as_str()).collect();

        for method in &class.methods {
            let key = member_key(&method.name, &method.descriptor);

            if !class.own || method.is_native() {
                // Not renameable, but non-private methods still seed
                // subtypes so overrides keep the original name.
                if !method.is_private() {
                    names.insert(key, method.name.clone());
                }
                continue;
            }
            if !self.oracle.should_rename(
                ElementKind::Method,
                &class.name,
                &method.name,
                Some(&method.descriptor),
            ) {
                continue;
            }

            // An inherited decision wins for anything that can override.
            let inherited = if method.is_private() {
                None
            } else {
                names.get(&key).cloned()
            };
            let new_name = match inherited {
                Some(name) => name,
                None => {
                    let fresh =
                        self.fresh_name(ElementKind::Method, class, method, &declared_methods)?;
                    if !method.is_private() {
                        names.insert(key, fresh.clone());
                    }
                    fresh
                }
            };

            let new_descriptor = rewrite_method_descriptor(&method.descriptor, &self.table);
            self.table.record_member(
                &class.name,
                &method.name,
                &method.descriptor,
                &new_class_name,
                &new_name,
                &new_descriptor,
            );
        }

        // External fields are never renamed and never propagate.
        if !class.own {
            return Ok(());
        }

        let declared_fields: HashSet<&str> = class.fields.iter().map(|f| f.name.as_str()).collect();

        for field in &class.fields {
            if !self.oracle.should_rename(
                ElementKind::Field,
                &class.name,
                &field.name,
                Some(&field.descriptor),
            ) {
                continue;
            }
            let new_name = self.fresh_name(ElementKind::Field, class, field, &declared_fields)?;
            let new_descriptor = rewrite_field_descriptor(&field.descriptor, &self.table);
            self.table.record_member(
                &class.name,
                &field.name,
                &field.descriptor,
                &new_class_name,
                &new_name,
                &new_descriptor,
            );
        }
        Ok(())
    }

    fn fresh_name(
        &mut self,
        kind: ElementKind,
        class: &ClassInfo,
        member: &MemberInfo,
        declared: &HashSet<&str>,
    ) -> Result<String, RenameError> {
        let mut attempts = 0;
        loop {
            if attempts >= self.options.max_name_attempts {
                return Err(RenameError::NameGenerationExhausted {
                    kind,
                    owner: class.name.clone(),
                    name: member.name.clone(),
                    attempts,
                });
            }
            attempts += 1;
            let candidate =
                self.oracle
                    .next_name(kind, &class.name, &member.name, Some(&member.descriptor));
            if !declared.contains(candidate.as_str()) {
                return Ok(candidate);
            }
            tracing::debug!(
                class = %class.name,
                member = %member.name,
                %candidate,
                "member name taken, retrying"
            );
        }
    }
}

fn member_key(name: &str, descriptor: &str) -> String {
    format!("{name} {descriptor}")
}
