//! Identifier renaming for a closed set of JVM class files.
//!
//! The entry point is [`rename_all`]: it builds inheritance forests over the
//! classes supplied by a [`ClassProvider`], decides renames through a
//! pluggable [`NameOracle`], propagates member-name decisions from
//! superclasses and interfaces to subtypes, and returns the populated
//! [`RenameTable`] that downstream bytecode rewriting consumes.

#![forbid(unsafe_code)]

mod error;
mod forest;
mod oracle;
mod provider;
mod renamer;
mod rewrite;
mod table;

pub use crate::error::RenameError;
pub use crate::forest::{InheritanceForest, NodeId};
pub use crate::oracle::{ElementKind, NameOracle, SimpleNameOracle};
pub use crate::provider::{ClassProvider, ClassSet};
pub use crate::renamer::{rename_all, RenameOptions};
pub use crate::rewrite::{rewrite_field_descriptor, rewrite_method_descriptor};
pub use crate::table::RenameTable;
