//! Entry-page access provisioning.
//!
//! Turns one shared static entry page into N individually-keyed entry
//! points without any server-side access check. Two layers:
//!
//! 1. the page itself moves to a secret-derived filename (capability URL —
//!    possession of the path is the credential);
//! 2. each participant's `${...}` placeholder is filled with the secret
//!    assigned to the integer id rendered next to it in the markup.

use crate::line_split;
use huddle_core::util::fs;
use huddle_secrets::{generator, ParticipantAccess};
use huddle_types::{HuddleError, ParticipantId, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Canonical entry file name before provisioning.
pub const ENTRY_PAGE: &str = "index.html";

static SECRET_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());
static PARTICIPANT_ID_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r">(\d+)<").unwrap());

/// Rewrites the entry page against a provisioned slot mapping.
#[derive(Debug)]
pub struct EntryPageProvisioner<'a> {
    access: &'a ParticipantAccess,
}

impl<'a> EntryPageProvisioner<'a> {
    /// Create a provisioner over an existing slot mapping.
    pub fn new(access: &'a ParticipantAccess) -> Self {
        Self { access }
    }

    /// Rewrite template text, attributing diagnostics to `origin`.
    ///
    /// A line is rewritten only when it carries both a `${...}` placeholder
    /// and a `>N<` id marker; the placeholder substring is replaced by the
    /// secret assigned to slot N. Every other line passes through. Not
    /// every `${...}` occurrence is a secret slot, so a placeholder without
    /// an id marker is deliberately left alone.
    ///
    /// # Errors
    ///
    /// [`HuddleError::UnknownParticipant`] when an id has no provisioned
    /// slot. No wrap-around, no silent skip.
    pub fn rewrite(&self, text: &str, origin: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len());

        for raw in text.split_inclusive('\n') {
            let (line, ending) = line_split::split_terminator(raw);
            result.push_str(&self.rewrite_line(line, origin)?);
            result.push_str(ending);
        }

        Ok(result)
    }

    fn rewrite_line(&self, line: &str, origin: &str) -> Result<String> {
        let placeholder = SECRET_PLACEHOLDER.find(line);
        let id_caps = PARTICIPANT_ID_MARKER.captures(line);

        let (placeholder, id_caps) = match (placeholder, id_caps) {
            (Some(p), Some(c)) => (p, c),
            // One pattern alone is not an injection point
            _ => return Ok(line.to_string()),
        };

        let id_text = &id_caps[1];
        let id_value: u32 = id_text.parse().map_err(|_| HuddleError::Validation(
            format!("Participant id '{}' in {} is out of range", id_text, origin),
        ))?;

        let secret = ParticipantId::new(id_value)
            .ok()
            .and_then(|id| self.access.get(id))
            .ok_or_else(|| HuddleError::UnknownParticipant {
                id: id_value,
                slots: self.access.len(),
                path: origin.to_string(),
            })?;

        Ok(line.replace(placeholder.as_str(), secret.as_str()))
    }

    /// Secure the entry page under `dir`.
    ///
    /// Renames `index.html` to `<fresh secret>.html`, rewrites every
    /// placeholder line in the renamed file, and returns the new path.
    /// The rename happens first so a failed rewrite never leaves a keyed
    /// page at the guessable location.
    pub fn secure(&self, dir: impl AsRef<Path>, secret_length: usize) -> Result<PathBuf> {
        let dir = dir.as_ref();
        let canonical = dir.join(ENTRY_PAGE);

        if !canonical.exists() {
            return Err(HuddleError::Bundle(format!(
                "Entry page not found: {}",
                canonical.display()
            )));
        }

        let capability = generator::generate(secret_length)?;
        let secret_path = dir.join(format!("{}.html", capability));
        std::fs::rename(&canonical, &secret_path)?;

        let text = fs::slurp(&secret_path)?;
        let rewritten = self.rewrite(&text, &secret_path.display().to_string())?;
        fs::spit(&secret_path, &rewritten)?;

        tracing::info!(page = %secret_path.display(), "Entry page secured");

        Ok(secret_path)
    }
}
