use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl BaseType {
    fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            b'B' => BaseType::Byte,
            b'C' => BaseType::Char,
            b'D' => BaseType::Double,
            b'F' => BaseType::Float,
            b'I' => BaseType::Int,
            b'J' => BaseType::Long,
            b'S' => BaseType::Short,
            b'Z' => BaseType::Boolean,
            _ => return None,
        })
    }

    fn code(self) -> char {
        match self {
            BaseType::Byte => 'B',
            BaseType::Char => 'C',
            BaseType::Double => 'D',
            BaseType::Float => 'F',
            BaseType::Int => 'I',
            BaseType::Long => 'J',
            BaseType::Short => 'S',
            BaseType::Boolean => 'Z',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Base(BaseType),
    Object(String),
    Array(Box<FieldType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Type(FieldType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub params: Vec<FieldType>,
    pub return_type: ReturnType,
}

pub fn parse_field_descriptor(desc: &str) -> Result<FieldType> {
    let mut rest = desc;
    let ty = take_field_type(&mut rest, desc)?;
    if !rest.is_empty() {
        return Err(Error::InvalidDescriptor(desc.to_string()));
    }
    Ok(ty)
}

pub fn parse_method_descriptor(desc: &str) -> Result<MethodDescriptor> {
    let mut rest = desc
        .strip_prefix('(')
        .ok_or_else(|| Error::InvalidDescriptor(desc.to_string()))?;

    let mut params = Vec::new();
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        if rest.is_empty() {
            return Err(Error::InvalidDescriptor(desc.to_string()));
        }
        params.push(take_field_type(&mut rest, desc)?);
    }

    let return_type = if rest == "V" {
        ReturnType::Void
    } else {
        let ty = take_field_type(&mut rest, desc)?;
        if !rest.is_empty() {
            return Err(Error::InvalidDescriptor(desc.to_string()));
        }
        ReturnType::Type(ty)
    };

    Ok(MethodDescriptor {
        params,
        return_type,
    })
}

pub fn write_field_descriptor(ty: &FieldType) -> String {
    let mut out = String::new();
    push_field_type(&mut out, ty);
    out
}

pub fn write_method_descriptor(desc: &MethodDescriptor) -> String {
    let mut out = String::from("(");
    for param in &desc.params {
        push_field_type(&mut out, param);
    }
    out.push(')');
    match &desc.return_type {
        ReturnType::Void => out.push('V'),
        ReturnType::Type(ty) => push_field_type(&mut out, ty),
    }
    out
}

fn take_field_type(rest: &mut &str, whole: &str) -> Result<FieldType> {
    let bytes = rest.as_bytes();
    let first = *bytes
        .first()
        .ok_or_else(|| Error::InvalidDescriptor(whole.to_string()))?;

    if let Some(base) = BaseType::from_code(first) {
        *rest = &rest[1..];
        return Ok(FieldType::Base(base));
    }

    match first {
        b'L' => {
            let end = rest
                .find(';')
                .ok_or_else(|| Error::InvalidDescriptor(whole.to_string()))?;
            let name = rest[1..end].to_string();
            if name.is_empty() {
                return Err(Error::InvalidDescriptor(whole.to_string()));
            }
            *rest = &rest[end + 1..];
            Ok(FieldType::Object(name))
        }
        b'[' => {
            *rest = &rest[1..];
            let component = take_field_type(rest, whole)?;
            Ok(FieldType::Array(Box::new(component)))
        }
        _ => Err(Error::InvalidDescriptor(whole.to_string())),
    }
}

fn push_field_type(out: &mut String, ty: &FieldType) {
    match ty {
        FieldType::Base(base) => out.push(base.code()),
        FieldType::Object(name) => {
            out.push('L');
            out.push_str(name);
            out.push(';');
        }
        FieldType::Array(component) => {
            out.push('[');
            push_field_type(out, component);
        }
    }
}
