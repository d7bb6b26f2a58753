use std::collections::HashMap;

use veil_classfile::ClassInfo;

use crate::provider::ClassProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Node {
    name: String,
    children: Vec<NodeId>,
}

/// Inheritance forests over the renaming universe: one rooted at classes
/// with no resolvable superclass, one at interfaces with no resolvable
/// super-interfaces.
///
/// Nodes are arena-allocated and keyed by class name; a node is expanded at
/// most once, so malformed (cyclic) inheritance data degrades to a
/// partially-attached forest instead of looping.
#[derive(Debug)]
pub struct InheritanceForest {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
    class_roots: Vec<NodeId>,
    interface_roots: Vec<NodeId>,
}

impl InheritanceForest {
    pub fn build<P: ClassProvider + ?Sized>(provider: &P) -> Self {
        let mut forest = Self {
            nodes: Vec::new(),
            by_name: HashMap::new(),
            class_roots: Vec::new(),
            interface_roots: Vec::new(),
        };

        for class in provider.own_classes() {
            forest.add_ancestry(class, provider);
        }
        forest
    }

    /// Walk upward from `class`, attaching each node under every resolvable
    /// parent. The walk is an explicit stack of (class, pending child) pairs;
    /// hierarchies of any depth are fine.
    fn add_ancestry<P: ClassProvider + ?Sized>(&mut self, class: &ClassInfo, provider: &P) {
        let mut stack: Vec<(&ClassInfo, Option<NodeId>)> = vec![(class, None)];

        while let Some((info, child)) = stack.pop() {
            let (id, inserted) = self.intern(&info.name);
            if let Some(child) = child {
                self.nodes[id.index()].children.push(child);
            }
            if !inserted {
                // Already expanded: shared ancestor or an inheritance cycle.
                tracing::debug!(class = %info.name, "ancestor already expanded, stopping walk");
                continue;
            }

            let mut found_parent = false;
            if info.is_interface() {
                for super_interface in &info.interfaces {
                    if let Some(parent) = provider.resolve(super_interface) {
                        stack.push((parent, Some(id)));
                        found_parent = true;
                    }
                }
            } else if let Some(super_name) = &info.super_name {
                if let Some(parent) = provider.resolve(super_name) {
                    stack.push((parent, Some(id)));
                    found_parent = true;
                }
            }

            if !found_parent {
                if info.is_interface() {
                    self.interface_roots.push(id);
                } else {
                    self.class_roots.push(id);
                }
            }
        }
    }

    fn intern(&mut self, name: &str) -> (NodeId, bool) {
        if let Some(&id) = self.by_name.get(name) {
            return (id, false);
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.to_string(),
            children: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        (id, true)
    }

    pub fn class_roots(&self) -> &[NodeId] {
        &self.class_roots
    }

    pub fn interface_roots(&self) -> &[NodeId] {
        &self.interface_roots
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reverse post-order over the given roots: every node appears before
    /// all of its known subtypes, each node exactly once even when it is
    /// reachable from several parents.
    pub fn reverse_post_order(&self, roots: &[NodeId]) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut visited = vec![false; self.nodes.len()];
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        for &root in roots {
            if visited[root.index()] {
                continue;
            }
            visited[root.index()] = true;
            stack.push((root, 0));

            while let Some((node, next_child)) = stack.last_mut() {
                let node = *node;
                match self.nodes[node.index()].children.get(*next_child) {
                    Some(&child) => {
                        *next_child += 1;
                        if !visited[child.index()] {
                            visited[child.index()] = true;
                            stack.push((child, 0));
                        }
                    }
                    None => {
                        order.push(node);
                        stack.pop();
                    }
                }
            }
        }

        order.reverse();
        order
    }
}
