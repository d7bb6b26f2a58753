use std::fmt;

/// Which kind of identifier a renaming decision is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Class,
    Method,
    Field,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Class => "class",
            ElementKind::Method => "method",
            ElementKind::Field => "field",
        })
    }
}

/// Renaming policy: decides which identifiers need a new name and supplies
/// candidates.
///
/// For classes, `owner` is the qualified internal name and `name` the simple
/// name; for members, `owner` is the declaring class and `descriptor` is
/// present. `next_name` is called repeatedly until the caller is satisfied
/// the candidate is collision-free, so implementations should vary their
/// output across calls.
pub trait NameOracle {
    fn should_rename(
        &self,
        kind: ElementKind,
        owner: &str,
        name: &str,
        descriptor: Option<&str>,
    ) -> bool;

    fn next_name(
        &mut self,
        kind: ElementKind,
        owner: &str,
        name: &str,
        descriptor: Option<&str>,
    ) -> String;
}

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient",
    "true", "try", "void", "volatile", "while", "_", "var",
];

// Invalid as Windows file stems; renamed classes end up on disk as
// `<SimpleName>.class`.
const WINDOWS_RESERVED: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

// Longest simple name that still fits a 255-byte filename with `.class` appended.
const MAX_CLASS_NAME_LEN: usize = 255 - ".class".len();

/// Default renaming policy.
///
/// Renames identifiers that are shorter than `min_length`, are not valid
/// Java identifiers, or collide with reserved words; class names
/// additionally must survive as filenames. Replacement names are drawn from
/// per-kind counters owned by this instance, so a fresh oracle per renaming
/// run yields deterministic output.
#[derive(Debug, Clone)]
pub struct SimpleNameOracle {
    min_length: usize,
    class_counter: usize,
    method_counter: usize,
    field_counter: usize,
}

impl SimpleNameOracle {
    pub fn new() -> Self {
        Self {
            min_length: 3,
            class_counter: 0,
            method_counter: 0,
            field_counter: 0,
        }
    }

    /// Identifiers shorter than `min_length` are considered obfuscated.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

impl Default for SimpleNameOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl NameOracle for SimpleNameOracle {
    fn should_rename(
        &self,
        kind: ElementKind,
        _owner: &str,
        name: &str,
        _descriptor: Option<&str>,
    ) -> bool {
        if name.chars().count() < self.min_length {
            return true;
        }
        if !is_valid_identifier(name, kind == ElementKind::Method) {
            return true;
        }
        if KEYWORDS.contains(&name) {
            return true;
        }
        kind == ElementKind::Class
            && (WINDOWS_RESERVED.contains(&name.to_ascii_lowercase().as_str())
                || name.len() > MAX_CLASS_NAME_LEN)
    }

    fn next_name(
        &mut self,
        kind: ElementKind,
        _owner: &str,
        _name: &str,
        _descriptor: Option<&str>,
    ) -> String {
        let counter = match kind {
            ElementKind::Class => &mut self.class_counter,
            ElementKind::Method => &mut self.method_counter,
            ElementKind::Field => &mut self.field_counter,
        };
        let index = *counter;
        *counter += 1;
        match kind {
            ElementKind::Class => format!("Class{index}"),
            ElementKind::Method => format!("method_{index}"),
            ElementKind::Field => format!("field_{index}"),
        }
    }
}

/// `<init>` and `<clinit>` are structural method names, never renamed.
fn is_valid_identifier(name: &str, is_method: bool) -> bool {
    if is_method && (name == "<init>" || name == "<clinit>") {
        return true;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
