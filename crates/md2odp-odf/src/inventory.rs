//! Template resource inventory.
//!
//! Collects the names of reusable resources a template defines, so node
//! insertion can reject references the target renderer would not resolve.
//! Master pages and page layouts normally live in `styles.xml`;
//! presentation styles and list styles can appear in the automatic styles
//! of either `styles.xml` or `content.xml`, so both documents are scanned.

use std::collections::HashSet;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::DocumentError;

/// Names of reusable resources found in a template.
#[derive(Debug, Default)]
pub struct TemplateInventory {
    master_pages: HashSet<String>,
    page_layouts: HashSet<String>,
    presentation_styles: HashSet<String>,
    list_styles: HashSet<String>,
}

impl TemplateInventory {
    /// Scan one of the template's XML documents into the inventory.
    pub(crate) fn scan(&mut self, xml: &str) -> Result<(), DocumentError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);
        loop {
            match reader.read_event()? {
                Event::Start(elem) | Event::Empty(elem) => self.record(&elem)?,
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(())
    }

    fn record(&mut self, elem: &BytesStart) -> Result<(), DocumentError> {
        match elem.name().as_ref() {
            b"style:master-page" => {
                if let Some(name) = attribute(elem, b"style:name")? {
                    self.master_pages.insert(name);
                }
            }
            b"style:presentation-page-layout" => {
                if let Some(name) = attribute(elem, b"style:name")? {
                    self.page_layouts.insert(name);
                }
            }
            b"text:list-style" => {
                if let Some(name) = attribute(elem, b"style:name")? {
                    self.list_styles.insert(name);
                }
            }
            b"style:style" => {
                if attribute(elem, b"style:family")?.as_deref() == Some("presentation") {
                    if let Some(name) = attribute(elem, b"style:name")? {
                        self.presentation_styles.insert(name);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Whether the template defines a master page with this name.
    #[must_use]
    pub fn has_master_page(&self, name: &str) -> bool {
        self.master_pages.contains(name)
    }

    /// Whether the template defines a presentation page layout.
    #[must_use]
    pub fn has_page_layout(&self, name: &str) -> bool {
        self.page_layouts.contains(name)
    }

    /// Whether the template defines a presentation style.
    #[must_use]
    pub fn has_presentation_style(&self, name: &str) -> bool {
        self.presentation_styles.contains(name)
    }

    /// Whether the template defines a list style.
    #[must_use]
    pub fn has_list_style(&self, name: &str) -> bool {
        self.list_styles.contains(name)
    }
}

fn attribute(elem: &BytesStart, key: &[u8]) -> Result<Option<String>, DocumentError> {
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES_XML: &str = r#"<office:document-styles>
      <office:automatic-styles>
        <style:presentation-page-layout style:name="AL3T19"/>
        <style:style style:name="pr9" style:family="presentation"/>
        <style:style style:name="Heading" style:family="paragraph"/>
        <text:list-style style:name="L2"/>
      </office:automatic-styles>
      <office:master-styles>
        <style:master-page style:name="Break" draw:style-name="dp1"/>
      </office:master-styles>
    </office:document-styles>"#;

    #[test]
    fn scan_collects_each_resource_kind() {
        let mut inventory = TemplateInventory::default();
        inventory.scan(STYLES_XML).unwrap();

        assert!(inventory.has_master_page("Break"));
        assert!(inventory.has_page_layout("AL3T19"));
        assert!(inventory.has_presentation_style("pr9"));
        assert!(inventory.has_list_style("L2"));
    }

    #[test]
    fn non_presentation_styles_are_not_inventoried() {
        let mut inventory = TemplateInventory::default();
        inventory.scan(STYLES_XML).unwrap();

        assert!(!inventory.has_presentation_style("Heading"));
        assert!(!inventory.has_master_page("AL3T19"));
    }

    #[test]
    fn scans_accumulate_across_documents() {
        let mut inventory = TemplateInventory::default();
        inventory.scan(STYLES_XML).unwrap();
        inventory
            .scan(r#"<office:automatic-styles><style:style style:name="pr7" style:family="presentation"/></office:automatic-styles>"#)
            .unwrap();

        assert!(inventory.has_presentation_style("pr9"));
        assert!(inventory.has_presentation_style("pr7"));
    }
}
