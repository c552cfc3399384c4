use std::fmt;

use super::builtins::{self, BUILTIN_TYPES, LIST_MARKER};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Integer,
    String,
    Boolean,
    Float,
}

impl Primitive {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Float => "Float",
        }
    }
}

/// The structured meaning of a type string found in a field or parameter table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    Primitive(Primitive),
    CallbackGame,
    InputFile,
    ParseMode,
    /// Reference to a documented type. `super_type` is set when the name starts with the name of
    /// a super type.
    Declared {
        name: String,
        super_type: Option<&'static str>,
    },
    ListType(Box<ResolvedType>),
    /// Root of a polymorphic type family, see [`builtins::SUPER_TYPE_NAMES`].
    Super(&'static str),
    /// One of a fixed set of "A or B" types, see [`builtins::ALTERNATIVE_TYPES`].
    WithAlternative {
        name: &'static str,
        valid_types: Vec<ResolvedType>,
    },
}

impl ResolvedType {
    /// Resolve a documentation type string. Unknown names become [`ResolvedType::Declared`]; this
    /// never fails.
    pub fn resolve(type_string: &str) -> Self {
        if let Some(builtin) = BUILTIN_TYPES.get(type_string) {
            return builtin.clone();
        }
        if let Some(name) = builtins::super_type(type_string) {
            return Self::Super(name);
        }
        if let Some((name, members)) = builtins::alternative_type(type_string) {
            return Self::WithAlternative {
                name,
                valid_types: members.iter().map(|m| Self::resolve(m)).collect(),
            };
        }
        if let Some(element) = type_string.strip_prefix(LIST_MARKER) {
            return Self::ListType(Box::new(Self::resolve(element)));
        }
        Self::Declared {
            name: type_string.to_string(),
            super_type: builtins::super_type_prefix(type_string),
        }
    }

    /// The innermost element type, looking through any number of list layers.
    pub fn without_generics(&self) -> &Self {
        let mut ty = self;
        while let Self::ListType(element) = ty {
            ty = element.as_ref();
        }
        ty
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::ListType(_))
    }

    /// Number of list layers around the innermost element type.
    pub fn list_depth(&self) -> usize {
        let mut depth = 0;
        let mut ty = self;
        while let Self::ListType(element) = ty {
            depth += 1;
            ty = element.as_ref();
        }
        depth
    }

    /// The super type this type belongs to, either by being the super type itself or by being a
    /// declared subtype of it.
    pub fn super_type(&self) -> Option<&'static str> {
        match self {
            Self::Super(name) => Some(*name),
            Self::Declared { super_type, .. } => *super_type,
            _ => None,
        }
    }
}

impl fmt::Display for ResolvedType {
    /// Writes the type back in documentation notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.name()),
            Self::CallbackGame => f.write_str("CallbackGame"),
            Self::InputFile => f.write_str("InputFile"),
            Self::ParseMode => f.write_str("ParseMode"),
            Self::Declared { name, .. } => f.write_str(name),
            Self::ListType(element) => write!(f, "{LIST_MARKER}{element}"),
            Self::Super(name) => f.write_str(name),
            Self::WithAlternative { name, .. } => f.write_str(name),
        }
    }
}

/// Shorthand for [`ResolvedType::resolve`].
pub fn resolve(type_string: &str) -> ResolvedType {
    ResolvedType::resolve(type_string)
}

/// Shorthand for [`ResolvedType::without_generics`].
pub fn type_without_generics(ty: &ResolvedType) -> &ResolvedType {
    ty.without_generics()
}
