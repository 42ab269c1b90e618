//! The render context.

use md2odp_odf::{DocumentError, Node, OdpDocument};

use crate::error::RenderError;
use crate::placement;
use crate::profile::TemplateProfile;
use crate::renderer::SlideRenderer;
use crate::styles::StyleRegistry;

/// Everything one conversion run needs: the exclusive document handle, the
/// style registry, and the template profile.
///
/// One instance per run. Construction registers the fixed style vocabulary
/// into the document's automatic-style table, so styles exist before any
/// rendered node references them.
pub struct RenderContext<'a> {
    document: &'a mut OdpDocument,
    styles: StyleRegistry,
    profile: TemplateProfile,
}

impl<'a> RenderContext<'a> {
    /// Build the context and register the style vocabulary.
    pub fn new(
        document: &'a mut OdpDocument,
        profile: TemplateProfile,
    ) -> Result<Self, DocumentError> {
        let styles = StyleRegistry::new();
        styles.install(document)?;
        Ok(Self {
            document,
            styles,
            profile,
        })
    }

    /// Render a markdown document with this context's profile.
    pub fn render(&self, input: &str) -> Result<Vec<Node>, RenderError> {
        SlideRenderer::new(&self.profile).render(input)
    }

    /// Insert rendered nodes at the user anchor; returns the resolved
    /// insertion index.
    pub fn insert(&mut self, anchor: i64, nodes: Vec<Node>) -> Result<usize, DocumentError> {
        placement::insert_at_anchor(self.document, anchor, nodes)
    }

    /// The document under conversion.
    #[must_use]
    pub fn document(&self) -> &OdpDocument {
        self.document
    }

    /// The template profile in use.
    #[must_use]
    pub fn profile(&self) -> &TemplateProfile {
        &self.profile
    }

    /// The registered style vocabulary.
    #[must_use]
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }
}
