#![forbid(unsafe_code)]

mod class_info;
mod descriptor;
mod error;

pub use crate::class_info::{
    replace_simple_name, simple_name, ClassInfo, MemberInfo, ACC_ABSTRACT, ACC_FINAL,
    ACC_INTERFACE, ACC_NATIVE, ACC_PRIVATE, ACC_PUBLIC, ACC_STATIC,
};
pub use crate::descriptor::{parse_field_descriptor, parse_method_descriptor};
pub use crate::descriptor::{write_field_descriptor, write_method_descriptor};
pub use crate::descriptor::{BaseType, FieldType, MethodDescriptor, ReturnType};
pub use crate::error::{Error, Result};
