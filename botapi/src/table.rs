use log::warn;
use scraper::ElementRef;

use super::entry::{Field, Parameter};
use super::markup::{children_named, element_children, inner_markup, text_content, trimmed_text};

/// Marker in a field description making the field optional.
pub const OPTIONAL_MARKER: &str = "Optional";
/// Content of the required column for a required parameter.
pub const REQUIRED_MARKER: &str = "Yes";

/// The rows of a field or parameter table.
#[derive(Clone, Debug)]
pub enum Table {
    Fields(Vec<Field>),
    Parameters(Vec<Parameter>),
}

impl Table {
    pub const TAG_NAME: &'static str = "table";

    /// Reads a table, deciding its kind from the header row. Returns `None` for tables that are
    /// neither a field nor a parameter table.
    pub fn map_from_html(table: ElementRef) -> Option<Self> {
        assert_eq!(table.value().name(), Self::TAG_NAME);

        let mut rows = rows(table).into_iter();
        let header = text_content(rows.next()?);

        if header.contains("Field") {
            Some(Self::Fields(rows.filter_map(Field::map_from_row).collect()))
        } else if header.contains("Parameter") {
            Some(Self::Parameters(
                rows.filter_map(Parameter::map_from_row).collect(),
            ))
        } else {
            warn!("ignoring table with header {:?}", header.trim());
            None
        }
    }
}

/// The rows of `table` itself, in order. Rows of tables nested in a cell are not included.
fn rows(table: ElementRef) -> Vec<ElementRef> {
    let mut rows = Vec::new();
    for child in element_children(table) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(children_named(child, "tr")),
            _ => {}
        }
    }
    rows
}

fn cells(row: ElementRef) -> Vec<ElementRef> {
    element_children(row)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .collect()
}

impl Field {
    fn map_from_row(row: ElementRef) -> Option<Self> {
        let cells = cells(row);
        let [name, type_, description, ..] = cells[..] else {
            warn!("skipping field row with {} cells", cells.len());
            return None;
        };
        let description = inner_markup(description).trim().to_string();
        Some(Self {
            name: trimmed_text(name),
            type_: trimmed_text(type_),
            required: !description.contains(OPTIONAL_MARKER),
            description,
        })
    }
}

impl Parameter {
    fn map_from_row(row: ElementRef) -> Option<Self> {
        let cells = cells(row);
        let [name, type_, required, description, ..] = cells[..] else {
            warn!("skipping parameter row with {} cells", cells.len());
            return None;
        };
        Some(Self {
            name: trimmed_text(name),
            type_: trimmed_text(type_),
            description: inner_markup(description).trim().to_string(),
            required: trimmed_text(required) == REQUIRED_MARKER,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use scraper::{Html, Selector};

    fn read(src: &str) -> Option<Table> {
        let html = Html::parse_fragment(src);
        let table = html
            .select(&Selector::parse("table").unwrap())
            .next()
            .unwrap();
        Table::map_from_html(table)
    }

    #[test]
    fn reads_field_table() {
        let table = read(
            r##"<table>
                <thead><tr><th>Field</th><th>Type</th><th>Description</th></tr></thead>
                <tbody>
                    <tr><td>update_id</td><td>Integer</td><td>The update's unique identifier.</td></tr>
                    <tr><td>message</td><td><a href="#message">Message</a></td><td><em>Optional</em>. New message</td></tr>
                </tbody>
            </table>"##,
        );
        let Some(Table::Fields(fields)) = table else {
            panic!("expected field table, got {table:?}");
        };
        assert_eq!(
            fields,
            vec![
                Field {
                    name: "update_id".into(),
                    type_: "Integer".into(),
                    description: "The update's unique identifier.".into(),
                    required: true,
                },
                Field {
                    name: "message".into(),
                    type_: "Message".into(),
                    description: "<em>Optional</em>. New message".into(),
                    required: false,
                },
            ]
        );
    }

    #[test]
    fn reads_parameter_table_without_sections() {
        let table = read(
            "<table>
                <tr><td>Parameter</td><td>Type</td><td>Required</td><td>Description</td></tr>
                <tr><td>offset</td><td>Integer</td><td>Optional</td><td>Identifier of the first update</td></tr>
                <tr><td>chat_id</td><td>Integer or String</td><td> Yes </td><td>Target chat</td></tr>
                <tr><td>limit</td><td>Integer</td><td>yes</td><td>Lowercase is not a match</td></tr>
            </table>",
        );
        let Some(Table::Parameters(parameters)) = table else {
            panic!("expected parameter table, got {table:?}");
        };
        let required: Vec<_> = parameters
            .iter()
            .map(|p| (p.name.as_str(), p.type_.as_str(), p.required))
            .collect();
        assert_eq!(
            required,
            vec![
                ("offset", "Integer", false),
                ("chat_id", "Integer or String", true),
                ("limit", "Integer", false),
            ]
        );
    }

    #[test]
    fn parameter_description_does_not_drive_required() {
        let Some(Table::Parameters(parameters)) = read(
            "<table>
                <tr><th>Parameter</th><th>Type</th><th>Required</th><th>Description</th></tr>
                <tr><td>text</td><td>String</td><td>Yes</td><td>Optional formatting applies</td></tr>
            </table>",
        ) else {
            panic!("expected parameter table");
        };
        assert!(parameters[0].required);
    }

    #[test]
    fn skips_short_rows() {
        let Some(Table::Fields(fields)) = read(
            "<table>
                <tr><th>Field</th><th>Type</th><th>Description</th></tr>
                <tr><td>broken</td><td>Integer</td></tr>
                <tr><td>ok</td><td>String</td><td>Fine</td></tr>
            </table>",
        ) else {
            panic!("expected field table");
        };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "ok");
    }

    #[test]
    fn ignores_other_tables() {
        assert!(read("<table><tr><th>Code</th><th>Meaning</th></tr></table>").is_none());
        assert!(read("<table></table>").is_none());
    }

    #[test]
    fn optional_marker_is_matched_in_description_markup() {
        let Some(Table::Fields(fields)) = read(
            "<table>
                <tr><th>Field</th><th>Type</th><th>Description</th></tr>
                <tr><td>a</td><td>String</td><td>Opt<b>ional</b> in text only</td></tr>
                <tr><td>b</td><td>String</td><td><em>Optional</em>. Marked</td></tr>
            </table>",
        ) else {
            panic!("expected field table");
        };
        assert_eq!(fields[0].description, "Opt<b>ional</b> in text only");
        assert!(fields[0].required);
        assert!(!fields[1].required);
    }

    #[test]
    fn rows_of_nested_tables_are_not_read() {
        let Some(Table::Fields(fields)) = read(
            "<table>
                <thead><tr><th>Field</th><th>Type</th><th>Description</th></tr></thead>
                <tbody>
                    <tr><td>kind</td><td>String</td><td>One of:
                        <table>
                            <tr><td>private</td><td>String</td><td>Private chat</td></tr>
                            <tr><td>group</td><td>String</td><td>Group chat</td></tr>
                        </table>
                    </td></tr>
                    <tr><td>id</td><td>Integer</td><td>Identifier</td></tr>
                </tbody>
            </table>",
        ) else {
            panic!("expected field table");
        };
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["kind", "id"]);
    }

    #[test]
    fn reads_rows_with_implied_end_tags() {
        let Some(Table::Parameters(parameters)) = read(
            "<table class=table>
                <thead><tr><th>Parameter<th>Type<th>Required<th>Description
                <tbody>
                <tr><td>chat_id<td>Integer or String<td>Yes<td>Target&nbsp;chat
                <tr><td>text<td>String<td>Optional<td>Text of the message
            </table>",
        ) else {
            panic!("expected parameter table");
        };
        assert_eq!(parameters.len(), 2);
        assert!(parameters[0].required);
        assert_eq!(parameters[0].description, "Target&nbsp;chat");
        assert!(!parameters[1].required);
    }
}
