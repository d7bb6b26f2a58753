use veil_classfile::{
    parse_field_descriptor, parse_method_descriptor, write_field_descriptor,
    write_method_descriptor, FieldType, ReturnType,
};

use crate::table::RenameTable;

/// Rewrite a field descriptor through the rename table.
///
/// Class references with no new name are left as they are; a descriptor
/// that does not parse is returned unchanged (an unrewritten descriptor is
/// a safe degradation, a hard error is not).
pub fn rewrite_field_descriptor(descriptor: &str, table: &RenameTable) -> String {
    match parse_field_descriptor(descriptor) {
        Ok(ty) => write_field_descriptor(&substitute(ty, table)),
        Err(err) => {
            tracing::debug!(%descriptor, %err, "leaving unparseable field descriptor unchanged");
            descriptor.to_string()
        }
    }
}

/// Rewrite a method descriptor through the rename table; same fallback
/// rules as [`rewrite_field_descriptor`].
pub fn rewrite_method_descriptor(descriptor: &str, table: &RenameTable) -> String {
    match parse_method_descriptor(descriptor) {
        Ok(mut desc) => {
            desc.params = desc
                .params
                .into_iter()
                .map(|param| substitute(param, table))
                .collect();
            desc.return_type = match desc.return_type {
                ReturnType::Void => ReturnType::Void,
                ReturnType::Type(ty) => ReturnType::Type(substitute(ty, table)),
            };
            write_method_descriptor(&desc)
        }
        Err(err) => {
            tracing::debug!(%descriptor, %err, "leaving unparseable method descriptor unchanged");
            descriptor.to_string()
        }
    }
}

fn substitute(ty: FieldType, table: &RenameTable) -> FieldType {
    match ty {
        FieldType::Object(name) => match table.new_class_name(&name) {
            Some(new_name) => FieldType::Object(new_name.to_string()),
            None => FieldType::Object(name),
        },
        FieldType::Array(component) => FieldType::Array(Box::new(substitute(*component, table))),
        base => base,
    }
}
