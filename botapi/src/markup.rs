//! Helpers for reading the block elements of a reference document.

use scraper::ElementRef;

/// The kinds of block element the grouper and classifier care about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockKind {
    SectionHeading,
    EntryHeading,
    Paragraph,
    Quote,
    List,
    Table,
    Other,
}

impl BlockKind {
    pub fn of(element: ElementRef) -> Self {
        match element.value().name() {
            "h3" => Self::SectionHeading,
            "h4" => Self::EntryHeading,
            "p" => Self::Paragraph,
            "blockquote" => Self::Quote,
            "ul" | "ol" => Self::List,
            "table" => Self::Table,
            _ => Self::Other,
        }
    }

    /// Whether blocks of this kind make up the description of an entry.
    pub fn is_descriptive(self) -> bool {
        matches!(self, Self::Paragraph | Self::Quote | Self::List)
    }
}

/// Concatenated text of all descendant text nodes, with entities resolved.
pub fn text_content(element: ElementRef) -> String {
    element.text().collect()
}

/// Text content with surrounding whitespace removed.
pub fn trimmed_text(element: ElementRef) -> String {
    text_content(element).trim().to_string()
}

/// The markup of `element` itself, tags included.
pub fn source_markup(element: ElementRef) -> String {
    element.html()
}

/// The markup between the start and end tag of `element`.
pub fn inner_markup(element: ElementRef) -> String {
    element.inner_html()
}

/// Element children of `element`, skipping text and comments.
pub fn element_children<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Element children of `element` with the given tag name.
pub fn children_named<'a>(
    element: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> {
    element_children(element).filter(move |c| c.value().name() == name)
}
