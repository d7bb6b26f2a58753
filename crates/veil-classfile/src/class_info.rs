pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_NATIVE: u16 = 0x0100;
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;

/// One class in the renaming universe.
///
/// Names are in internal (slash-separated) form, e.g. `com/example/Foo`.
/// `own` marks classes that belong to the project and may be renamed;
/// everything else is a read-only library class.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub name: String,
    pub super_name: Option<String>,
    pub interfaces: Vec<String>,
    pub access_flags: u16,
    pub own: bool,
    pub methods: Vec<MemberInfo>,
    pub fields: Vec<MemberInfo>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_name: None,
            interfaces: Vec::new(),
            access_flags: ACC_PUBLIC,
            own: true,
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn is_interface(&self) -> bool {
        self.access_flags & ACC_INTERFACE != 0
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct MemberInfo {
    pub name: String,
    pub descriptor: String,
    pub access_flags: u16,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>, access_flags: u16) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            access_flags,
        }
    }

    pub fn is_private(&self) -> bool {
        self.access_flags & ACC_PRIVATE != 0
    }

    pub fn is_native(&self) -> bool {
        self.access_flags & ACC_NATIVE != 0
    }
}

/// Last segment of an internal class name (`com/example/Foo` -> `Foo`).
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind('/') {
        Some(idx) => &qualified[idx + 1..],
        None => qualified,
    }
}

/// Replace the last segment of an internal class name, keeping the package.
pub fn replace_simple_name(qualified: &str, simple: &str) -> String {
    match qualified.rfind('/') {
        Some(idx) => format!("{}{simple}", &qualified[..idx + 1]),
        None => simple.to_string(),
    }
}
