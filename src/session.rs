//! Session state for the generate / regenerate / export workflow.
//!
//! The session owns the only mutable state in the system: the current logo
//! asset and the last generated artifact. Each field has single-writer
//! semantics; the most recent action wins.

use crate::compose;
use crate::error::{Result, WorkshopError};
use crate::export::{self, ClipboardProvider};
use crate::models::{LogoAsset, QrRequest, RenderOptions, RECOMMENDED_LOGO_EC};
use crate::payload;
use crate::render;
use image::RgbaImage;
use std::path::Path;
use tracing::warn;

/// The last successfully rendered artifact: the final surface plus the
/// payload text and options that produced it.
///
/// Overwritten by the next successful generation; consumed by regenerate,
/// save, and copy.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// Final surface, with any logo overlay already composited
    pub surface: RgbaImage,
    /// Payload text encoded into the symbol
    pub payload: String,
    /// Options the symbol was rendered with
    pub options: RenderOptions,
}

/// Workshop session context.
#[derive(Debug, Default)]
pub struct QrSession {
    logo: Option<LogoAsset>,
    artifact: Option<GeneratedArtifact>,
}

impl QrSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the logo asset, replacing any prior one.
    pub fn set_logo(&mut self, logo: LogoAsset) {
        self.logo = Some(logo);
    }

    /// Removes the current logo asset.
    pub fn remove_logo(&mut self) {
        self.logo = None;
    }

    /// Returns the current logo asset, if any.
    #[must_use]
    pub fn logo(&self) -> Option<&LogoAsset> {
        self.logo.as_ref()
    }

    /// Returns the last generated artifact, if any.
    #[must_use]
    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        self.artifact.as_ref()
    }

    /// Encodes, renders, and composites a request, storing the result as
    /// the session artifact.
    ///
    /// Compositing runs to completion before the artifact is stored, so an
    /// exported surface always carries the finished overlay. On failure the
    /// previous artifact is left untouched.
    pub fn generate(
        &mut self,
        request: &QrRequest,
        options: &RenderOptions,
    ) -> Result<&GeneratedArtifact> {
        let text = payload::encode(request)?;
        self.render_artifact(text, *options)
    }

    /// Re-renders the stored payload with the stored options, without
    /// re-reading or re-validating input.
    ///
    /// Two consecutive regenerations produce pixel-identical surfaces.
    pub fn regenerate(&mut self) -> Result<&GeneratedArtifact> {
        let (text, options) = match &self.artifact {
            Some(artifact) => (artifact.payload.clone(), artifact.options),
            None => return Err(WorkshopError::NoArtifact),
        };
        self.render_artifact(text, options)
    }

    fn render_artifact(
        &mut self,
        text: String,
        options: RenderOptions,
    ) -> Result<&GeneratedArtifact> {
        if self.logo.is_some() && options.error_correction < RECOMMENDED_LOGO_EC {
            warn!(
                level = ?options.error_correction,
                "logo overlay with error correction below H; the symbol may not scan"
            );
        }

        let mut surface = render::render_symbol(&text, &options)?;
        if let Some(logo) = &self.logo {
            compose::overlay_logo(&mut surface, logo);
        }

        Ok(self.artifact.insert(GeneratedArtifact {
            surface,
            payload: text,
            options,
        }))
    }

    /// Writes the current artifact to `path` as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::NoArtifact`] when nothing has been generated
    /// yet; no file is written in that case.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let artifact = self.artifact.as_ref().ok_or(WorkshopError::NoArtifact)?;
        export::save_png(&artifact.surface, path)
    }

    /// Copies the current artifact to the clipboard as an image.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::NoArtifact`] when nothing has been generated
    /// yet, or [`WorkshopError::ClipboardUnavailable`] when the clipboard
    /// write fails; the two are distinct so callers can suggest the file
    /// export alternative for the latter.
    pub fn copy_to_clipboard(&self, provider: &mut dyn ClipboardProvider) -> Result<()> {
        let artifact = self.artifact.as_ref().ok_or(WorkshopError::NoArtifact)?;
        export::copy_to_clipboard(provider, &artifact.surface)
    }
}
