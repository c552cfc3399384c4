pub mod builtins;
pub mod consistency;
pub mod entry;
pub mod error;
pub mod markup;
pub mod resolved_type;
pub mod section;
pub mod table;

use std::collections::HashMap;

use scraper::{ElementRef, Html};

pub use consistency::{check_consistency, ConsistencyReport};
pub use entry::{Entry, Field, Method, Parameter, Type};
pub use error::ParseError;
pub use resolved_type::{resolve, type_without_generics, Primitive, ResolvedType};
pub use section::Section;

/// Id of the element holding the reference content in the published document.
pub const DEFAULT_CONTENT_ROOT_ID: &str = "dev_page_content";

#[derive(Clone, Debug)]
pub struct ReadOptions {
    /// The `id` of the element whose children are the section and entry blocks.
    pub content_root_id: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            content_root_id: DEFAULT_CONTENT_ROOT_ID.to_string(),
        }
    }
}

/// The sections of a reference document with everything they declare.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiReference {
    pub sections: Vec<Section>,
}

impl ApiReference {
    pub fn types(&self) -> impl Iterator<Item = &Type> + '_ {
        self.sections.iter().flat_map(|s| &s.types)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> + '_ {
        self.sections.iter().flat_map(|s| &s.methods)
    }

    pub fn find_type(&self, name: &str) -> Option<&Type> {
        self.types().find(|t| t.name == name)
    }

    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods().find(|m| m.name == name)
    }

    /// Types by name. If a name is declared twice, the first declaration wins.
    pub fn type_index(&self) -> HashMap<&str, &Type> {
        let mut index = HashMap::new();
        for ty in self.types() {
            index.entry(ty.name.as_str()).or_insert(ty);
        }
        index
    }

    /// The declared types belonging to the family of `super_type`, in document order.
    pub fn subtypes_of<'a>(&'a self, super_type: &'a str) -> impl Iterator<Item = &'a Type> + 'a {
        self.types().filter(move |t| {
            matches!(
                ResolvedType::resolve(&t.name),
                ResolvedType::Declared { super_type: Some(s), .. } if s == super_type
            )
        })
    }

    pub fn check_consistency(&self) -> ConsistencyReport {
        check_consistency(&self.sections)
    }
}

/// Reads all sections of a parsed reference document.
pub fn read_api_reference(
    document: &Html,
    options: &ReadOptions,
) -> Result<ApiReference, ParseError> {
    let content_root = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().attr("id") == Some(options.content_root_id.as_str()))
        .ok_or_else(|| ParseError::ContentRootNotFound(options.content_root_id.clone()))?;
    let sections = Section::read_all(content_root)?;
    Ok(ApiReference { sections })
}
