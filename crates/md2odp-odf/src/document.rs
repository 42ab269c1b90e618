//! Presentation document loading and `content.xml` surgery.
//!
//! [`OdpDocument`] keeps the template package untouched except for
//! `content.xml`, which is rewritten in place through event-level splices:
//! style registrations land inside `office:automatic-styles`, inserted
//! nodes land at a chosen position in the `office:presentation` slide
//! sequence. Everything else streams through verbatim, so the template's
//! own formatting survives.

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::error::DocumentError;
use crate::inventory::TemplateInventory;
use crate::node::{Node, TextFrame};
use crate::package::{
    CONTENT_ENTRY, MIMETYPE_ENTRY, OdpPackage, PRESENTATION_MIMETYPE, STYLES_ENTRY,
};
use crate::style::{StyleDefinition, StyleFamily};
use crate::xml;

/// An OpenDocument presentation opened from a template package.
#[derive(Debug)]
pub struct OdpDocument {
    package: OdpPackage,
    content: String,
    inventory: TemplateInventory,
    slide_count: usize,
    registered: HashSet<(StyleFamily, String)>,
}

impl OdpDocument {
    /// Open a template from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Self::read(File::open(path)?)
    }

    /// Open a template from any seekable reader.
    pub fn read<R: Read + Seek>(reader: R) -> Result<Self, DocumentError> {
        let package = OdpPackage::read(reader)?;

        let mimetype = package
            .entry(MIMETYPE_ENTRY)
            .ok_or_else(|| DocumentError::MissingEntry(MIMETYPE_ENTRY.to_owned()))?;
        if mimetype != PRESENTATION_MIMETYPE.as_bytes() {
            return Err(DocumentError::NotAPresentation(
                String::from_utf8_lossy(mimetype).into_owned(),
            ));
        }

        let content = String::from_utf8(
            package
                .entry(CONTENT_ENTRY)
                .ok_or_else(|| DocumentError::MissingEntry(CONTENT_ENTRY.to_owned()))?
                .to_vec(),
        )?;

        let mut inventory = TemplateInventory::default();
        inventory.scan(&content)?;
        if let Some(styles) = package.entry(STYLES_ENTRY) {
            inventory.scan(&String::from_utf8(styles.to_vec())?)?;
        }

        let slide_count = count_slides(&content)?;
        debug!(slide_count, "template opened");

        Ok(Self {
            package,
            content,
            inventory,
            slide_count,
            registered: HashSet::new(),
        })
    }

    /// Number of slides currently in the document.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// The template's resource inventory.
    #[must_use]
    pub fn inventory(&self) -> &TemplateInventory {
        &self.inventory
    }

    /// Register automatic styles, in order.
    ///
    /// # Errors
    ///
    /// Rejects a (family, name) pair that was already registered, and fails
    /// if the template's `content.xml` has no `office:automatic-styles`.
    pub fn insert_styles(&mut self, styles: &[StyleDefinition]) -> Result<(), DocumentError> {
        for style in styles {
            if !self
                .registered
                .insert((style.family, style.name.clone()))
            {
                return Err(DocumentError::DuplicateStyle {
                    family: style.family.as_odf(),
                    name: style.name.clone(),
                });
            }
        }
        self.content = splice_automatic_styles(&self.content, styles)?;
        Ok(())
    }

    /// Insert nodes into the slide sequence starting at `index`.
    ///
    /// Every master page, page layout, presentation style, and list style
    /// the nodes reference must exist in the template.
    pub fn insert_nodes(&mut self, index: usize, nodes: Vec<Node>) -> Result<(), DocumentError> {
        if index > self.slide_count {
            return Err(DocumentError::IndexOutOfRange {
                index,
                count: self.slide_count,
            });
        }
        for node in &nodes {
            self.validate_references(node)?;
        }
        self.content = splice_nodes(&self.content, index, &nodes)?;
        self.slide_count += nodes.iter().filter(|node| node.is_slide()).count();
        Ok(())
    }

    fn validate_references(&self, node: &Node) -> Result<(), DocumentError> {
        match node {
            Node::Slide(slide) => {
                if !self.inventory.has_master_page(&slide.master_page) {
                    return Err(DocumentError::MissingTemplateResource {
                        kind: "master page",
                        name: slide.master_page.clone(),
                    });
                }
                if !self.inventory.has_page_layout(&slide.layout) {
                    return Err(DocumentError::MissingTemplateResource {
                        kind: "page layout",
                        name: slide.layout.clone(),
                    });
                }
                for frame in &slide.frames {
                    self.validate_frame(frame)?;
                }
            }
            Node::TextFrame(frame) => self.validate_frame(frame)?,
            Node::List(list) => {
                if !self.inventory.has_list_style(&list.style) {
                    return Err(DocumentError::MissingTemplateResource {
                        kind: "list style",
                        name: list.style.clone(),
                    });
                }
                for item in &list.items {
                    self.validate_references(item)?;
                }
            }
            Node::Paragraph(para) => {
                for child in &para.children {
                    self.validate_references(child)?;
                }
            }
            Node::Span(span) => {
                for child in &span.children {
                    self.validate_references(child)?;
                }
            }
            Node::ListItem(item) => {
                for child in &item.content {
                    self.validate_references(child)?;
                }
            }
            Node::LineBreak | Node::Link(_) => {}
        }
        Ok(())
    }

    fn validate_frame(&self, frame: &TextFrame) -> Result<(), DocumentError> {
        if let Some(style) = &frame.style {
            if !self.inventory.has_presentation_style(style) {
                return Err(DocumentError::MissingTemplateResource {
                    kind: "presentation style",
                    name: style.clone(),
                });
            }
        }
        for child in &frame.content {
            self.validate_references(child)?;
        }
        Ok(())
    }

    /// Write the document to a file path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        self.write(File::create(path)?)
    }

    /// Write the document to any seekable writer.
    pub fn write<W: Write + Seek>(&self, writer: W) -> Result<(), DocumentError> {
        self.package
            .write(writer, CONTENT_ENTRY, self.content.as_bytes())
    }

    #[cfg(test)]
    pub(crate) fn content_xml(&self) -> &str {
        &self.content
    }
}

/// Count top-level `draw:page` elements under `office:presentation`.
fn count_slides(content: &str) -> Result<usize, DocumentError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    let mut in_presentation = false;
    let mut seen_presentation = false;
    let mut count = 0;
    loop {
        match reader.read_event()? {
            Event::Start(elem) => match elem.name().as_ref() {
                b"office:presentation" => {
                    in_presentation = true;
                    seen_presentation = true;
                }
                b"draw:page" if in_presentation => count += 1,
                _ => {}
            },
            Event::Empty(elem) => match elem.name().as_ref() {
                b"office:presentation" => seen_presentation = true,
                b"draw:page" if in_presentation => count += 1,
                _ => {}
            },
            Event::End(elem) if elem.name().as_ref() == b"office:presentation" => {
                in_presentation = false;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if seen_presentation {
        Ok(count)
    } else {
        Err(DocumentError::MalformedTemplate(
            "no office:presentation element in content.xml".to_owned(),
        ))
    }
}

/// Stream-copy `content.xml`, appending style definitions at the end of
/// `office:automatic-styles`.
fn splice_automatic_styles(
    content: &str,
    styles: &[StyleDefinition],
) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Vec::new());
    let mut spliced = false;
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Empty(elem) if elem.name().as_ref() == b"office:automatic-styles" => {
                // Expand the empty element so the styles have a home
                writer.write_event(Event::Start(elem))?;
                for style in styles {
                    xml::write_style(&mut writer, style)?;
                }
                writer.write_event(Event::End(quick_xml::events::BytesEnd::new(
                    "office:automatic-styles",
                )))?;
                spliced = true;
            }
            Event::End(elem) if elem.name().as_ref() == b"office:automatic-styles" => {
                for style in styles {
                    xml::write_style(&mut writer, style)?;
                }
                writer.write_event(Event::End(elem))?;
                spliced = true;
            }
            event => writer.write_event(event)?,
        }
    }
    if !spliced {
        return Err(DocumentError::MalformedTemplate(
            "no office:automatic-styles element in content.xml".to_owned(),
        ));
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Stream-copy `content.xml`, inserting serialized nodes before the slide
/// at `index` (or after the last slide when `index` equals the count).
fn splice_nodes(content: &str, index: usize, nodes: &[Node]) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Vec::new());
    let mut in_presentation = false;
    let mut page_index = 0;
    let mut inserted = false;
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(elem) if elem.name().as_ref() == b"office:presentation" => {
                in_presentation = true;
                writer.write_event(Event::Start(elem))?;
            }
            Event::End(elem) if elem.name().as_ref() == b"office:presentation" => {
                if !inserted {
                    // Empty presentation, or insertion at the very end
                    xml::write_nodes(&mut writer, nodes)?;
                    inserted = true;
                }
                in_presentation = false;
                writer.write_event(Event::End(elem))?;
            }
            Event::Start(elem) if in_presentation && elem.name().as_ref() == b"draw:page" => {
                if !inserted && page_index == index {
                    xml::write_nodes(&mut writer, nodes)?;
                    inserted = true;
                }
                writer.write_event(Event::Start(elem))?;
            }
            Event::End(elem) if in_presentation && elem.name().as_ref() == b"draw:page" => {
                writer.write_event(Event::End(elem))?;
                page_index += 1;
                if !inserted && page_index == index {
                    xml::write_nodes(&mut writer, nodes)?;
                    inserted = true;
                }
            }
            Event::Empty(elem) if in_presentation && elem.name().as_ref() == b"draw:page" => {
                if !inserted && page_index == index {
                    xml::write_nodes(&mut writer, nodes)?;
                    inserted = true;
                }
                writer.write_event(Event::Empty(elem))?;
                page_index += 1;
                if !inserted && page_index == index {
                    xml::write_nodes(&mut writer, nodes)?;
                    inserted = true;
                }
            }
            event => writer.write_event(event)?,
        }
    }
    if !inserted {
        return Err(DocumentError::MalformedTemplate(
            "no office:presentation element in content.xml".to_owned(),
        ));
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FrameRole, Slide, Span, TextFrame};
    use crate::style::{PropertyArea, StyleFamily};
    use std::io::Cursor;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    const CONTENT_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
        <office:document-content>\
        <office:automatic-styles/>\
        <office:body><office:presentation>\
        <draw:page draw:name=\"First\"><draw:frame/></draw:page>\
        <draw:page draw:name=\"Second\"/>\
        <presentation:settings/>\
        </office:presentation></office:body>\
        </office:document-content>";

    const STYLES_XML: &str = "<office:document-styles>\
        <office:automatic-styles>\
        <style:presentation-page-layout style:name=\"AL3T19\"/>\
        <style:style style:name=\"pr9\" style:family=\"presentation\"/>\
        </office:automatic-styles>\
        <office:master-styles>\
        <style:master-page style:name=\"Break\"/>\
        </office:master-styles>\
        </office:document-styles>";

    fn template() -> OdpDocument {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        zip.start_file(MIMETYPE_ENTRY, options).unwrap();
        zip.write_all(PRESENTATION_MIMETYPE.as_bytes()).unwrap();
        zip.start_file(CONTENT_ENTRY, options).unwrap();
        zip.write_all(CONTENT_XML.as_bytes()).unwrap();
        zip.start_file(STYLES_ENTRY, options).unwrap();
        zip.write_all(STYLES_XML.as_bytes()).unwrap();
        let mut cursor = zip.finish().unwrap();
        cursor.set_position(0);
        OdpDocument::read(cursor).unwrap()
    }

    fn title_slide(name: &str) -> Node {
        let mut slide = Slide::new(name, "Break", "AL3T19");
        let mut frame = TextFrame::new(
            FrameRole::Title,
            Some("pr9"),
            ("20cm", "3cm"),
            ("2cm", "8cm"),
        );
        frame.append([Node::Span(Span::text(name))]);
        slide.push_frame(frame);
        Node::Slide(slide)
    }

    #[test]
    fn open_counts_template_slides() {
        assert_eq!(template().slide_count(), 2);
    }

    #[test]
    fn open_rejects_wrong_mimetype() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        zip.start_file(MIMETYPE_ENTRY, options).unwrap();
        zip.write_all(b"application/vnd.oasis.opendocument.text")
            .unwrap();
        let mut cursor = zip.finish().unwrap();
        cursor.set_position(0);

        let err = OdpDocument::read(cursor).unwrap_err();
        assert!(matches!(err, DocumentError::NotAPresentation(_)));
    }

    #[test]
    fn styles_land_inside_automatic_styles_in_order() {
        let mut doc = template();
        doc.insert_styles(&[
            StyleDefinition::new(StyleFamily::Text, "TextEmphasisStyle")
                .with_area(PropertyArea::Text, &[("fo:font-style", "italic")]),
            StyleDefinition::new(StyleFamily::Text, "TextCodeStyle"),
        ])
        .unwrap();

        let content = doc.content_xml();
        let styles_block = content
            .split("<office:automatic-styles>")
            .nth(1)
            .and_then(|rest| rest.split("</office:automatic-styles>").next())
            .expect("automatic styles block");
        let emphasis = styles_block.find("TextEmphasisStyle").unwrap();
        let code = styles_block.find("TextCodeStyle").unwrap();
        assert!(emphasis < code);
    }

    #[test]
    fn duplicate_style_registration_is_rejected() {
        let mut doc = template();
        let style = StyleDefinition::new(StyleFamily::Text, "TextEmphasisStyle");
        doc.insert_styles(std::slice::from_ref(&style)).unwrap();

        let err = doc.insert_styles(&[style]).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateStyle { .. }));
    }

    #[test]
    fn insert_at_zero_prepends() {
        let mut doc = template();
        doc.insert_nodes(0, vec![title_slide("New")]).unwrap();

        let content = doc.content_xml();
        assert!(content.find("draw:name=\"New\"").unwrap() < content.find("\"First\"").unwrap());
        assert_eq!(doc.slide_count(), 3);
    }

    #[test]
    fn insert_between_existing_slides() {
        let mut doc = template();
        doc.insert_nodes(1, vec![title_slide("New")]).unwrap();

        let content = doc.content_xml();
        let new = content.find("draw:name=\"New\"").unwrap();
        assert!(content.find("\"First\"").unwrap() < new);
        assert!(new < content.find("\"Second\"").unwrap());
    }

    #[test]
    fn insert_at_count_appends_before_settings() {
        let mut doc = template();
        doc.insert_nodes(2, vec![title_slide("New")]).unwrap();

        let content = doc.content_xml();
        let new = content.find("draw:name=\"New\"").unwrap();
        assert!(content.find("\"Second\"").unwrap() < new);
        assert!(new < content.find("<presentation:settings/>").unwrap());
    }

    #[test]
    fn insert_beyond_count_is_rejected() {
        let mut doc = template();
        let err = doc.insert_nodes(3, vec![title_slide("New")]).unwrap_err();
        assert!(matches!(err, DocumentError::IndexOutOfRange { .. }));
    }

    #[test]
    fn unknown_master_page_is_rejected() {
        let mut doc = template();
        let slide = Node::Slide(Slide::new("New", "NoSuchMaster", "AL3T19"));
        let err = doc.insert_nodes(0, vec![slide]).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::MissingTemplateResource {
                kind: "master page",
                ..
            }
        ));
    }

    #[test]
    fn save_round_trips_through_the_package() {
        let mut doc = template();
        doc.insert_nodes(2, vec![title_slide("New")]).unwrap();

        let mut out = Cursor::new(Vec::new());
        doc.write(&mut out).unwrap();
        out.set_position(0);

        let reopened = OdpDocument::read(out).unwrap();
        assert_eq!(reopened.slide_count(), 3);
        assert!(reopened.content_xml().contains("draw:name=\"New\""));
    }
}
