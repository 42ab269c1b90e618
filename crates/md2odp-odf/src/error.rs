//! Error types for presentation package handling.

/// Error raised while loading, editing, or saving a presentation package.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Zip container error.
    #[error("package archive error")]
    Zip(#[from] zip::result::ZipError),

    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// A package entry that must be UTF-8 XML is not.
    #[error("package XML is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The package is not an OpenDocument presentation.
    #[error("not an OpenDocument presentation (mimetype `{0}`)")]
    NotAPresentation(String),

    /// A required package entry is absent.
    #[error("missing package entry `{0}`")]
    MissingEntry(String),

    /// The template's XML lacks a structure the converter relies on.
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// A node references a master page, layout, or style the template
    /// does not define.
    #[error("template is missing {kind} `{name}`")]
    MissingTemplateResource {
        /// Resource kind (e.g. "master page").
        kind: &'static str,
        /// The referenced name.
        name: String,
    },

    /// A style with this family and name is already registered.
    #[error("duplicate {family} style `{name}`")]
    DuplicateStyle {
        /// Style family.
        family: &'static str,
        /// Style name.
        name: String,
    },

    /// An insertion index beyond the current slide sequence.
    #[error("insertion index {index} exceeds slide count {count}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current number of slides.
        count: usize,
    },
}
