//! Renderer error types.

/// Error raised while rendering markdown into slides.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A heading deeper than level 2 was encountered. Slide structure
    /// depends on exactly two usable title levels, so the conversion
    /// aborts rather than guessing.
    #[error("unsupported heading level {level}: only levels 1 and 2 map to slides")]
    UnsupportedHeading {
        /// The offending level (3..=6).
        level: u8,
    },
}
