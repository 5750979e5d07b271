//! Marker-delimited region rewriting.
//!
//! The frontend config file carries regions bounded by `//replace_start`
//! and `//replace_end` lines. Each region declares exactly one variable
//! (`const <name> = ...`) whose name selects a precomputed replacement
//! block; the whole region is swapped for that block. The declaration is
//! only ever used for naming, never evaluated.
//!
//! The scan is an explicit two-state machine so the "no declared name"
//! and "unknown name" branches stay independently testable.

use crate::replacements::ReplacementTable;
use huddle_core::util::fs;
use huddle_types::{HuddleError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Line prefix opening a replaceable region.
pub const REPLACE_START: &str = "//replace_start";
/// Line prefix closing a replaceable region.
pub const REPLACE_END: &str = "//replace_end";

static DECLARED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=").unwrap());

/// What to do with a region whose declared name has no replacement.
///
/// The historical behavior silently discarded such regions, which makes
/// template content vanish on a typo. Dropping stays the default for
/// compatibility, but it is a policy, not hard-coded silence, and every
/// occurrence is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRegionPolicy {
    /// Emit nothing for the region (compatible default)
    #[default]
    Drop,
    /// Emit the region's original content, minus the marker lines
    Preserve,
}

#[derive(Debug, PartialEq, Eq)]
enum ScanState {
    PassThrough,
    Collecting,
}

/// Rewrites marker regions against a [`ReplacementTable`].
#[derive(Debug)]
pub struct MarkerRewriter<'a> {
    table: &'a ReplacementTable,
    policy: UnknownRegionPolicy,
}

impl<'a> MarkerRewriter<'a> {
    /// Create a rewriter with the default [`UnknownRegionPolicy::Drop`].
    pub fn new(table: &'a ReplacementTable) -> Self {
        Self {
            table,
            policy: UnknownRegionPolicy::default(),
        }
    }

    /// Override the unknown-region policy.
    pub fn with_policy(mut self, policy: UnknownRegionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rewrite `text`, attributing diagnostics to `origin`.
    ///
    /// Input without any markers passes through byte-identically: every
    /// untouched line keeps its own terminator (LF or CRLF), and a missing
    /// final newline stays missing.
    ///
    /// # Errors
    ///
    /// [`HuddleError::MalformedRegion`] when a region closes without a
    /// parseable declaration, or when the input ends inside an open region.
    pub fn rewrite(&self, text: &str, origin: &str) -> Result<String> {
        let mut output: Vec<&str> = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        let mut state = ScanState::PassThrough;

        // Lines carry their terminators; prefix checks are unaffected
        for line in text.split_inclusive('\n') {
            match state {
                ScanState::PassThrough => {
                    if line.starts_with(REPLACE_START) {
                        state = ScanState::Collecting;
                        buffer.clear();
                    } else {
                        output.push(line);
                    }
                }
                ScanState::Collecting => {
                    if line.starts_with(REPLACE_END) {
                        self.close_region(&buffer, origin, &mut output)?;
                        buffer.clear();
                        state = ScanState::PassThrough;
                    } else {
                        buffer.push(line);
                    }
                }
            }
        }

        if state == ScanState::Collecting {
            return Err(HuddleError::MalformedRegion {
                path: origin.to_string(),
                region: buffer.concat().trim_end().to_string(),
            });
        }

        Ok(output.concat())
    }

    /// Rewrite a file in place: full read, transform, full write.
    pub fn rewrite_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::slurp(path)?;
        let rewritten = self.rewrite(&text, &path.display().to_string())?;
        fs::spit(path, &rewritten)
    }

    fn close_region<'b>(
        &self,
        buffer: &[&'b str],
        origin: &str,
        output: &mut Vec<&'b str>,
    ) -> Result<()>
    where
        'a: 'b,
    {
        let region = buffer.concat();
        let name = DECLARED_NAME
            .captures(&region)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .ok_or_else(|| HuddleError::MalformedRegion {
                path: origin.to_string(),
                region: region.trim_end().to_string(),
            })?;

        match self.table.get(&name) {
            Some(replacement) => {
                tracing::debug!(name = %name, "Replacing marker region");
                output.push(replacement);
                output.push("\n");
            }
            None => match self.policy {
                UnknownRegionPolicy::Drop => {
                    tracing::warn!(
                        name = %name,
                        file = %origin,
                        "Unknown declared name, dropping region"
                    );
                }
                UnknownRegionPolicy::Preserve => {
                    tracing::warn!(
                        name = %name,
                        file = %origin,
                        "Unknown declared name, preserving region content"
                    );
                    output.extend_from_slice(buffer);
                }
            },
        }

        Ok(())
    }
}
