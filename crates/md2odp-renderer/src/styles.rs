//! The fixed style vocabulary.
//!
//! Six automatic styles cover everything the rules emit. They are defined
//! once, in a fixed order, and registered into the target document when
//! the render context is built; rules reference them by name only.

use md2odp_odf::{DocumentError, OdpDocument, PropertyArea, StyleDefinition, StyleFamily};

/// Inline emphasis (`*text*`).
pub const TEXT_EMPHASIS: &str = "TextEmphasisStyle";
/// Inline double emphasis (`**text**`).
pub const TEXT_DOUBLE_EMPHASIS: &str = "TextDoubleEmphasisStyle";
/// Quotation glyphs around block quotes.
pub const TEXT_QUOTE: &str = "TextQuoteStyle";
/// Block quote paragraphs.
pub const PARAGRAPH_QUOTE: &str = "ParagraphQuoteStyle";
/// Inline code and code block lines.
pub const TEXT_CODE: &str = "TextCodeStyle";
/// Code block paragraphs.
pub const PARAGRAPH_CODE: &str = "ParagraphCodeStyle";

/// The automatic styles the renderer registers and references.
pub struct StyleRegistry {
    definitions: Vec<StyleDefinition>,
}

impl StyleRegistry {
    /// Build the registry. Definition order is fixed so repeated runs
    /// produce identical documents.
    #[must_use]
    pub fn new() -> Self {
        let definitions = vec![
            StyleDefinition::new(StyleFamily::Text, TEXT_EMPHASIS)
                .with_area(PropertyArea::Text, &[("fo:font-style", "italic")]),
            StyleDefinition::new(StyleFamily::Text, TEXT_DOUBLE_EMPHASIS).with_area(
                PropertyArea::Text,
                &[("fo:font-style", "italic"), ("fo:font-weight", "bold")],
            ),
            StyleDefinition::new(StyleFamily::Text, TEXT_QUOTE).with_area(
                PropertyArea::Text,
                &[("fo:font-size", "150%"), ("fo:color", "#ccf4c6")],
            ),
            StyleDefinition::new(StyleFamily::Paragraph, PARAGRAPH_QUOTE)
                .with_area(PropertyArea::Text, &[("fo:color", "#18a303")])
                .with_area(
                    PropertyArea::Paragraph,
                    &[
                        ("fo:margin-left", "0.5cm"),
                        ("fo:margin-right", "0.5cm"),
                        ("fo:margin-top", "0.5cm"),
                        ("fo:margin-bottom", "0.5cm"),
                        ("fo:text-indent", "-0.5cm"),
                    ],
                ),
            StyleDefinition::new(StyleFamily::Text, TEXT_CODE).with_area(
                PropertyArea::Text,
                &[
                    ("fo:font-size", "110%"),
                    ("style:font-name", "Courier"),
                    ("fo:font-family", "monospace"),
                ],
            ),
            StyleDefinition::new(StyleFamily::Paragraph, PARAGRAPH_CODE)
                .with_area(
                    PropertyArea::Text,
                    &[
                        ("fo:font-size", "110%"),
                        ("style:font-name", "Courier"),
                        ("fo:font-family", "monospace"),
                    ],
                )
                .with_area(
                    PropertyArea::Paragraph,
                    &[
                        ("fo:margin-left", "0.5cm"),
                        ("fo:margin-right", "0.5cm"),
                        ("fo:margin-top", "0.5cm"),
                        ("fo:margin-bottom", "0.5cm"),
                        ("fo:text-indent", "0cm"),
                    ],
                ),
        ];
        Self { definitions }
    }

    /// Register every definition into the document, once.
    pub fn install(&self, document: &mut OdpDocument) -> Result<(), DocumentError> {
        document.insert_styles(&self.definitions)
    }

    /// The definitions, in registration order.
    #[must_use]
    pub fn definitions(&self) -> &[StyleDefinition] {
        &self.definitions
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
