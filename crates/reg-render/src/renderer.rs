//! Document regeneration.

use std::fs;
use std::path::Path;

use reg_core::{Diagnostic, Registries, Report};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::RenderError;
use crate::markers;
use crate::sections::Section;

/// Result of rendering a document.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutcome {
    /// The regenerated document.
    #[serde(skip)]
    pub text: String,
    /// Sections whose markers were found and whose content was regenerated.
    pub updated: Vec<Section>,
    /// Whether the text differs from the input.
    pub changed: bool,
    /// One warning per section left unchanged.
    pub report: Report,
}

/// Regenerate every section of `document`.
///
/// `label` names the document in diagnostics. Sections are processed in
/// [`Section::ALL`] order; a section with missing markers or an unavailable
/// source registry is left as is with a warning.
#[must_use]
pub fn render(label: &str, document: &str, registries: &Registries) -> RenderOutcome {
    let mut text = document.to_string();
    let mut updated = Vec::new();
    let mut report = Report::new();

    for section in Section::ALL {
        let name = section.marker_name();
        let Some(content) = section.render(registries) else {
            warn!(section = name, "source registry unavailable");
            report.push(Diagnostic::warn(
                label,
                format!("Source registry for {name} unavailable; section left unchanged"),
            ));
            continue;
        };
        match markers::replace_section(&text, name, &content) {
            Some(next) => {
                debug!(section = name, "section regenerated");
                text = next;
                updated.push(section);
            }
            None => {
                warn!(section = name, "markers not found");
                report.push(Diagnostic::warn(
                    label,
                    format!("Markers for {name} not found; section left unchanged"),
                ));
            }
        }
    }

    let changed = text != document;
    RenderOutcome {
        text,
        updated,
        changed,
        report,
    }
}

/// Read the document at `path`, regenerate it and write it back.
///
/// The file is read once and always rewritten as a whole.
///
/// # Errors
///
/// Returns `RenderError::Read` or `RenderError::Write` on I/O failure.
pub fn render_file(path: &Path, registries: &Registries) -> Result<RenderOutcome, RenderError> {
    let document = fs::read_to_string(path).map_err(|source| RenderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let label = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    let outcome = render(&label, &document, registries);
    fs::write(path, &outcome.text).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        sections = outcome.updated.len(),
        changed = outcome.changed,
        "document rendered"
    );
    Ok(outcome)
}
