use std::collections::{BTreeSet, HashSet};

use super::builtins::LIST_MARKER;
use super::resolved_type::ResolvedType;
use super::section::Section;

/// Names referenced by fields and parameters that the document never declares as a type.
///
/// This is advice for whoever maintains the static type tables; none of it prevents the document
/// from being used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Every referenced name, with list markers removed, that is not the name of a declared type.
    /// Primitive and other builtin names are included.
    pub unknown_types: BTreeSet<String>,
    /// Declared type names occurring more than once.
    pub duplicate_types: BTreeSet<String>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_types.is_empty() && self.duplicate_types.is_empty()
    }

    /// The unknown names no static table accounts for, i.e. those the resolver can only treat as
    /// references to a declared type.
    pub fn unaccounted(&self) -> impl Iterator<Item = &str> + '_ {
        self.unknown_types
            .iter()
            .map(String::as_str)
            .filter(|name| matches!(ResolvedType::resolve(name), ResolvedType::Declared { .. }))
    }
}

fn strip_list_markers(mut type_string: &str) -> &str {
    while let Some(element) = type_string.strip_prefix(LIST_MARKER) {
        type_string = element;
    }
    type_string
}

pub fn check_consistency(sections: &[Section]) -> ConsistencyReport {
    let mut declared = HashSet::new();
    let mut duplicate_types = BTreeSet::new();
    for ty in sections.iter().flat_map(|s| &s.types) {
        if !declared.insert(ty.name.as_str()) {
            duplicate_types.insert(ty.name.clone());
        }
    }

    let field_types = sections
        .iter()
        .flat_map(|s| &s.types)
        .flat_map(|t| &t.fields)
        .map(|f| f.type_.as_str());
    let parameter_types = sections
        .iter()
        .flat_map(|s| &s.methods)
        .flat_map(|m| &m.parameters)
        .map(|p| p.type_.as_str());

    let unknown_types = field_types
        .chain(parameter_types)
        .map(strip_list_markers)
        .filter(|name| !declared.contains(name))
        .map(str::to_string)
        .collect();

    ConsistencyReport {
        unknown_types,
        duplicate_types,
    }
}
