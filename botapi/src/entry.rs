use log::debug;
use scraper::ElementRef;

use super::error::ParseError;
use super::markup::{source_markup, text_content, BlockKind};
use super::resolved_type::ResolvedType;
use super::table::Table;

/// Marker in the description of a method that takes no parameters and therefore has no table.
pub const METHOD_MARKER: &str = "Use this method";

/// A documented data structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Type {
    pub name: String,
    /// Raw markup of the description blocks.
    pub description: String,
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: String,
    pub type_: String,
    /// False if and only if the description mentions [`OPTIONAL_MARKER`](super::table::OPTIONAL_MARKER).
    pub required: bool,
}

/// A documented remote operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub description: String,
    /// In table order.
    pub parameters: Vec<Parameter>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    pub type_: String,
    /// True if and only if the required column reads
    /// [`REQUIRED_MARKER`](super::table::REQUIRED_MARKER).
    pub required: bool,
}

impl Field {
    pub fn resolved_type(&self) -> ResolvedType {
        ResolvedType::resolve(&self.type_)
    }
}

impl Parameter {
    pub fn resolved_type(&self) -> ResolvedType {
        ResolvedType::resolve(&self.type_)
    }
}

impl Method {
    /// Parameters with the required ones first; the table order is kept within both groups.
    pub fn sorted_parameters(&self) -> Vec<&Parameter> {
        let mut parameters: Vec<_> = self.parameters.iter().collect();
        parameters.sort_by_key(|p| !p.required);
        parameters
    }
}

/// What a block of documentation under an entry heading turned out to describe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Type(Type),
    Method(Method),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Self::Type(t) => &t.name,
            Self::Method(m) => &m.name,
        }
    }

    /// Classifies the blocks following an entry heading. Returns `Ok(None)` for entries without
    /// a field or parameter table, e.g. narrative subsections.
    pub fn classify(section: &str, name: &str, blocks: &[ElementRef]) -> Result<Option<Self>, ParseError> {
        let mut description = Vec::new();
        let mut fields = None;
        let mut parameters = None;

        for &block in blocks {
            let kind = BlockKind::of(block);
            if kind.is_descriptive() {
                description.push(source_markup(block));
            }
            match kind {
                BlockKind::Paragraph if text_content(block).contains(METHOD_MARKER) => {
                    parameters.get_or_insert_with(Vec::new);
                }
                BlockKind::Table => match Table::map_from_html(block) {
                    Some(Table::Fields(f)) => fields = Some(f),
                    Some(Table::Parameters(p)) => parameters = Some(p),
                    None => {}
                },
                _ => {}
            }
        }

        let name = name.to_string();
        let description = description.join("\n");
        let entry = match (fields, parameters) {
            (Some(_), Some(_)) => {
                return Err(ParseError::AmbiguousEntry {
                    section: section.to_string(),
                    entry: name,
                })
            }
            (None, Some(parameters)) => Self::Method(Method {
                name,
                description,
                parameters,
            }),
            (Some(fields), None) => Self::Type(Type {
                name,
                description,
                fields,
            }),
            (None, None) => {
                debug!("{section:?} / {name:?} describes neither a type nor a method");
                return Ok(None);
            }
        };
        debug!("{section:?} / {:?} classified as {}", entry.name(), entry.kind());
        Ok(Some(entry))
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Type(_) => "type",
            Self::Method(_) => "method",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::markup::element_children;
    use scraper::{Html, Selector};

    fn classify(src: &str) -> Result<Option<Entry>, ParseError> {
        let html = Html::parse_fragment(src);
        let div = html.select(&Selector::parse("div").unwrap()).next().unwrap();
        let blocks: Vec<_> = element_children(div).collect();
        Entry::classify("Section", "entry", &blocks)
    }

    const FIELD_TABLE: &str = "<table>
        <tr><th>Field</th><th>Type</th><th>Description</th></tr>
        <tr><td>id</td><td>Integer</td><td>Identifier</td></tr>
    </table>";

    const PARAMETER_TABLE: &str = "<table>
        <tr><th>Parameter</th><th>Type</th><th>Required</th><th>Description</th></tr>
        <tr><td>chat_id</td><td>Integer or String</td><td>Yes</td><td>Target chat</td></tr>
        <tr><td>text</td><td>String</td><td>Optional</td><td>Caption</td></tr>
        <tr><td>photo</td><td>InputFile or String</td><td>Yes</td><td>Photo</td></tr>
    </table>";

    #[test]
    fn field_table_makes_a_type() {
        let entry = classify(&format!("<div><p>This object is a thing.</p>{FIELD_TABLE}</div>"))
            .unwrap()
            .unwrap();
        let Entry::Type(ty) = entry else {
            panic!("expected type");
        };
        assert_eq!(ty.name, "entry");
        assert_eq!(ty.description, "<p>This object is a thing.</p>");
        assert_eq!(ty.fields.len(), 1);
    }

    #[test]
    fn parameter_table_makes_a_method() {
        let entry = classify(&format!("<div><p>Sends a photo.</p>{PARAMETER_TABLE}</div>"))
            .unwrap()
            .unwrap();
        let Entry::Method(method) = entry else {
            panic!("expected method");
        };
        let names: Vec<_> = method.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["chat_id", "text", "photo"]);
        let sorted: Vec<_> = method
            .sorted_parameters()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(sorted, vec!["chat_id", "photo", "text"]);
    }

    #[test]
    fn method_marker_without_table_makes_an_empty_method() {
        let entry = classify(
            "<div><p>Use this method to receive incoming updates.</p><blockquote><p>Note</p></blockquote></div>",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            entry,
            Entry::Method(Method {
                name: "entry".into(),
                description: "<p>Use this method to receive incoming updates.</p>\n<blockquote><p>Note</p></blockquote>".into(),
                parameters: vec![],
            })
        );
    }

    #[test]
    fn method_marker_with_table_keeps_parameters() {
        let entry = classify(&format!(
            "<div><p>Use this method to send photos.</p>{PARAMETER_TABLE}</div>"
        ))
        .unwrap()
        .unwrap();
        let Entry::Method(method) = entry else {
            panic!("expected method");
        };
        assert_eq!(method.parameters.len(), 3);
    }

    #[test]
    fn narrative_entry_is_dropped() {
        let entry = classify("<div><p>Some notes.</p><ul><li>A</li></ul></div>").unwrap();
        assert_eq!(entry, None);
    }

    #[test]
    fn both_tables_is_fatal() {
        let err = classify(&format!("<div>{FIELD_TABLE}{PARAMETER_TABLE}</div>")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::AmbiguousEntry { ref section, ref entry } if section == "Section" && entry == "entry"
        ));
    }

    #[test]
    fn method_marker_with_field_table_is_fatal() {
        let err = classify(&format!("<div><p>Use this method.</p>{FIELD_TABLE}</div>"));
        assert!(err.is_err());
    }

    #[test]
    fn resolves_member_types() {
        let Entry::Method(method) = classify(&format!("<div>{PARAMETER_TABLE}</div>"))
            .unwrap()
            .unwrap()
        else {
            panic!("expected method");
        };
        assert!(matches!(
            method.parameters[0].resolved_type(),
            ResolvedType::WithAlternative { name: "Integer or String", .. }
        ));
    }
}
