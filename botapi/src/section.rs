use indexmap::IndexMap;
use log::debug;
use scraper::ElementRef;

use super::entry::{Entry, Method, Type};
use super::error::ParseError;
use super::markup::{element_children, source_markup, trimmed_text, BlockKind};

/// The content under one section heading. Sections without types and methods are never produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    /// Raw markup of the blocks between the section heading and its first entry heading.
    pub description: String,
    pub types: Vec<Type>,
    pub methods: Vec<Method>,
}

/// Blocks of one section, before classification.
#[derive(Default)]
struct SectionBlocks<'a> {
    description: Vec<ElementRef<'a>>,
    entries: IndexMap<String, Vec<ElementRef<'a>>>,
}

/// Buckets the children of the content root by the section and entry heading preceding them, in
/// document order. Headings themselves are not part of any bucket.
fn group(content_root: ElementRef) -> IndexMap<String, SectionBlocks> {
    let (_, _, sections) = element_children(content_root).fold(
        (String::new(), String::new(), IndexMap::<String, SectionBlocks>::new()),
        |(mut section, mut entry, mut sections), block| {
            match BlockKind::of(block) {
                BlockKind::SectionHeading => {
                    section = trimmed_text(block);
                    entry.clear();
                    sections.entry(section.clone()).or_default();
                }
                BlockKind::EntryHeading => {
                    entry = trimmed_text(block);
                    let blocks = sections.entry(section.clone()).or_default();
                    blocks.entries.entry(entry.clone()).or_default();
                }
                _ => {
                    let blocks = sections.entry(section.clone()).or_default();
                    if entry.is_empty() {
                        blocks.description.push(block);
                    } else {
                        blocks.entries.entry(entry.clone()).or_default().push(block);
                    }
                }
            }
            (section, entry, sections)
        },
    );
    sections
}

impl Section {
    fn map_from_blocks(name: String, blocks: SectionBlocks) -> Result<Self, ParseError> {
        let description = blocks
            .description
            .iter()
            .map(|&b| source_markup(b))
            .collect::<Vec<_>>()
            .join("\n");

        let mut types = Vec::new();
        let mut methods = Vec::new();
        for (entry_name, entry_blocks) in &blocks.entries {
            match Entry::classify(&name, entry_name, entry_blocks)? {
                Some(Entry::Type(t)) => types.push(t),
                Some(Entry::Method(m)) => methods.push(m),
                None => {}
            }
        }

        Ok(Self {
            name,
            description,
            types,
            methods,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.methods.is_empty()
    }

    /// Reads all sections below `content_root`, dropping those without types and methods.
    pub fn read_all(content_root: ElementRef) -> Result<Vec<Self>, ParseError> {
        let mut sections = Vec::new();
        for (name, blocks) in group(content_root) {
            let section = Self::map_from_blocks(name, blocks)?;
            if section.is_empty() {
                debug!("dropping section {:?} without types or methods", section.name);
            } else {
                sections.push(section);
            }
        }
        Ok(sections)
    }
}
