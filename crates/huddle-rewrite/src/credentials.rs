//! Service credential file editing.
//!
//! The coturn config is a line-oriented `key=value` file. Exactly one line
//! is expected to carry the relay credentials; that line is rewritten to
//! the freshly generated pair and every other line is preserved
//! byte-for-byte.

use crate::line_split;
use huddle_core::util::fs;
use huddle_secrets::Secret;
use huddle_types::{HuddleError, Result};
use std::path::Path;

/// Key of the credential line in the coturn config.
pub const CREDENTIAL_KEY: &str = "user";

/// How to treat a file where the expected key line is absent or repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrictness {
    /// Log a warning and keep going (compatible default)
    #[default]
    Warn,
    /// Fail the run
    Strict,
}

/// Rewrites the credential line of a service config file in place.
#[derive(Debug)]
pub struct CredentialFileEditor {
    key: String,
    strictness: MatchStrictness,
}

impl Default for CredentialFileEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialFileEditor {
    /// Create an editor for the default `user` key.
    pub fn new() -> Self {
        Self {
            key: CREDENTIAL_KEY.to_string(),
            strictness: MatchStrictness::default(),
        }
    }

    /// Use a different key name.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Override the multiplicity strictness.
    pub fn with_strictness(mut self, strictness: MatchStrictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Rewrite matching lines in `text`, returning the result and how many
    /// lines matched.
    ///
    /// A line matches when its prefix before `=` equals the key exactly.
    pub fn apply(
        &self,
        text: &str,
        username: &Secret,
        password: &Secret,
    ) -> (String, usize) {
        let mut matched = 0;
        let mut result = String::with_capacity(text.len());

        for raw in text.split_inclusive('\n') {
            let (line, ending) = line_split::split_terminator(raw);
            let is_credential = line
                .split_once('=')
                .map(|(key, _)| key == self.key)
                .unwrap_or(false);

            if is_credential {
                matched += 1;
                result.push_str(&format!(
                    "{}={}:{}{}",
                    self.key, username, password, ending
                ));
            } else {
                result.push_str(raw);
            }
        }

        (result, matched)
    }

    /// Rewrite the credential line of the file at `path` in place.
    ///
    /// The file is read to completion before any write begins.
    ///
    /// # Errors
    ///
    /// Under [`MatchStrictness::Strict`], zero or multiple matching lines
    /// is a [`HuddleError::Credential`]; the file is left untouched.
    pub fn set_credentials(
        &self,
        path: impl AsRef<Path>,
        username: &Secret,
        password: &Secret,
    ) -> Result<()> {
        let path = path.as_ref();
        let text = fs::slurp(path)?;
        let (rewritten, matched) = self.apply(&text, username, password);

        if matched != 1 {
            let detail = format!(
                "Expected exactly one '{}=' line in {}, found {}",
                self.key,
                path.display(),
                matched
            );
            match self.strictness {
                MatchStrictness::Strict => return Err(HuddleError::Credential(detail)),
                MatchStrictness::Warn => tracing::warn!("{}", detail),
            }
        }

        fs::spit(path, &rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_secrets::generate;
    use tempfile::TempDir;

    fn editor() -> CredentialFileEditor {
        CredentialFileEditor::new()
    }

    #[test]
    fn test_single_line_rewritten_others_untouched() {
        let mut input = String::new();
        for i in 0..5 {
            input.push_str(&format!("listening-port-{}=3478\n", i));
        }
        input.push_str("user=old:old\n");
        for i in 0..4 {
            input.push_str(&format!("realm-{}=example.org\n", i));
        }

        let user = generate(8).unwrap();
        let pass = generate(8).unwrap();
        let (output, matched) = editor().apply(&input, &user, &pass);

        assert_eq!(matched, 1);
        assert_eq!(output.lines().count(), input.lines().count());

        for (orig, new) in input.lines().zip(output.lines()) {
            if orig == "user=old:old" {
                assert_eq!(new, format!("user={}:{}", user, pass));
            } else {
                assert_eq!(orig, new);
            }
        }
    }

    #[test]
    fn test_prefix_keys_do_not_match() {
        // "username=..." starts with "user" but is a different key
        let input = "username=alice\nuser=old:old\n";
        let user = generate(8).unwrap();
        let pass = generate(8).unwrap();

        let (output, matched) = editor().apply(input, &user, &pass);
        assert_eq!(matched, 1);
        assert!(output.starts_with("username=alice\n"));
    }

    #[test]
    fn test_crlf_endings_survive_rewrite() {
        let input = "realm=example.org\r\nuser=old:old\r\nno-tcp\r\n";
        let user = generate(8).unwrap();
        let pass = generate(8).unwrap();

        let (output, matched) = editor().apply(input, &user, &pass);
        assert_eq!(matched, 1);
        assert_eq!(
            output,
            format!("realm=example.org\r\nuser={}:{}\r\nno-tcp\r\n", user, pass)
        );
    }

    #[test]
    fn test_strict_mode_requires_exactly_one_match() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coturn.conf");
        std::fs::write(&path, "realm=example.org\n").unwrap();

        let user = generate(8).unwrap();
        let pass = generate(8).unwrap();

        let strict = editor().with_strictness(MatchStrictness::Strict);
        let err = strict.set_credentials(&path, &user, &pass).unwrap_err();
        assert!(matches!(err, HuddleError::Credential(_)));

        // Untouched on failure
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "realm=example.org\n"
        );
    }

    #[test]
    fn test_warn_mode_tolerates_missing_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coturn.conf");
        std::fs::write(&path, "realm=example.org\n").unwrap();

        let user = generate(8).unwrap();
        let pass = generate(8).unwrap();

        editor().set_credentials(&path, &user, &pass).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "realm=example.org\n"
        );
    }

    #[test]
    fn test_file_rewrite_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coturn.conf");
        std::fs::write(&path, "user=old:old\nrealm=example.org\n").unwrap();

        let user = generate(8).unwrap();
        let pass = generate(8).unwrap();
        editor().set_credentials(&path, &user, &pass).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            format!("user={}:{}\nrealm=example.org\n", user, pass)
        );
    }
}
