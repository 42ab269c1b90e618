//! Automatic style definitions.
//!
//! A [`StyleDefinition`] is a document-local (`office:automatic-styles`)
//! style: a family, a unique name within that family, and per-area ODF
//! formatting attributes. Property keys are literal ODF attribute names
//! (`fo:font-style`, `fo:margin-left`, …) so the serializer stays a plain
//! pass-through.

/// The style family (`style:family`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Character-level style, referenced by spans.
    Text,
    /// Paragraph-level style, referenced by paragraphs.
    Paragraph,
}

impl StyleFamily {
    /// The ODF `style:family` attribute value.
    #[must_use]
    pub fn as_odf(self) -> &'static str {
        match self {
            StyleFamily::Text => "text",
            StyleFamily::Paragraph => "paragraph",
        }
    }
}

/// The formatting area a property set targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyArea {
    /// `style:text-properties`.
    Text,
    /// `style:paragraph-properties`.
    Paragraph,
}

impl PropertyArea {
    /// The ODF properties element name for this area.
    #[must_use]
    pub fn element_name(self) -> &'static str {
        match self {
            PropertyArea::Text => "style:text-properties",
            PropertyArea::Paragraph => "style:paragraph-properties",
        }
    }
}

/// A named automatic style with per-area formatting properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDefinition {
    /// Style family.
    pub family: StyleFamily,
    /// Unique name within the family.
    pub name: String,
    /// Property sets, in serialization order.
    pub areas: Vec<(PropertyArea, Vec<(String, String)>)>,
}

impl StyleDefinition {
    /// Create a definition with no properties.
    #[must_use]
    pub fn new(family: StyleFamily, name: impl Into<String>) -> Self {
        Self {
            family,
            name: name.into(),
            areas: Vec::new(),
        }
    }

    /// Add a property set for one area.
    #[must_use]
    pub fn with_area(mut self, area: PropertyArea, properties: &[(&str, &str)]) -> Self {
        self.areas.push((
            area,
            properties
                .iter()
                .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                .collect(),
        ));
        self
    }
}
