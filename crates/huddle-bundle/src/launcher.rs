//! Launch-script emission.
//!
//! The bundle ships a small bash launcher that exports the provisioned
//! values as environment variables and execs the backend jar. The script
//! is the only place the full participant export appears outside the
//! rewritten entry page.

use crate::certs::StagedCerts;
use crate::layout::{BundleLayout, FRONTEND, JAR_NAME, LAUNCHER_NAME};
use huddle_core::util::fs;
use huddle_types::{DeployParams, Result};
use std::path::PathBuf;

/// Renders the `huddle.bash` launcher.
#[derive(Debug)]
pub struct LaunchScript<'a> {
    params: &'a DeployParams,
    certs: &'a StagedCerts,
    participants_export: &'a str,
}

impl<'a> LaunchScript<'a> {
    /// Create a launcher for one packaging run.
    pub fn new(
        params: &'a DeployParams,
        certs: &'a StagedCerts,
        participants_export: &'a str,
    ) -> Self {
        Self {
            params,
            certs,
            participants_export,
        }
    }

    /// Render the script text.
    ///
    /// Optional exports are omitted entirely rather than exported empty,
    /// so the backend's own defaulting stays in charge.
    pub fn render(&self) -> String {
        let mut exports = vec![format!(
            "export HUDDLE_STATIC_ROOT_DIR=\"${{to_package_dir}}{}\"",
            FRONTEND
        )];

        exports.push(format!(
            "export HUDDLE_HTTP_SERVER_PORT=\"{}\"",
            self.params.effective_port()
        ));

        if self.params.use_https {
            exports.push("export HUDDLE_USE_HTTPS=true".to_string());
        }
        if let Some(cert) = &self.certs.cert {
            exports.push(format!(
                "export HUDDLE_HTTPS_CERT_PATH=\"{}\"",
                cert.display()
            ));
        }
        if let Some(key) = &self.certs.key {
            exports.push(format!(
                "export HUDDLE_HTTPS_KEY_PATH=\"{}\"",
                key.display()
            ));
        }

        exports.push(format!(
            "export HUDDLE_PARTICIPANTS_ACCESS=\"{}\"",
            self.participants_export
        ));

        format!(
            "#!/bin/bash\n\
            if [ -z \"${{to_package_dir}}\" ]; then\n\
            \x20   to_package_dir=\"\"\n\
            else\n\
            \x20   to_package_dir=\"${{to_package_dir}}/\"\n\
            fi\n\
            \n\
            {exports}\n\
            \n\
            jar_path=\"${{to_package_dir}}{jar}\"\n\
            \n\
            exec java -jar \"${{jar_path}}\"\n",
            exports = exports.join("\n"),
            jar = JAR_NAME
        )
    }

    /// Write the launcher into the application bundle, returning its path.
    pub fn write(&self, layout: &BundleLayout) -> Result<PathBuf> {
        let path = layout.app_bundle_dir().join(LAUNCHER_NAME);
        fs::spit(&path, &self.render())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_types::HostName;

    fn params() -> DeployParams {
        DeployParams::new(HostName::new("localhost").unwrap())
    }

    #[test]
    fn test_render_plain_http() {
        let params = params();
        let certs = StagedCerts::default();
        let script = LaunchScript::new(&params, &certs, "1=aaa,2=bbb").render();

        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains("export HUDDLE_HTTP_SERVER_PORT=\"8888\""));
        assert!(script.contains("export HUDDLE_PARTICIPANTS_ACCESS=\"1=aaa,2=bbb\""));
        assert!(!script.contains("HUDDLE_USE_HTTPS"));
        assert!(!script.contains("HUDDLE_HTTPS_CERT_PATH"));
        assert!(script.contains("exec java -jar"));
    }

    #[test]
    fn test_render_https_with_certs() {
        let mut params = params();
        params.use_https = true;

        let certs = StagedCerts {
            cert: Some("certs/selfsigned.crt".into()),
            key: Some("certs/selfsigned.key".into()),
        };
        let script = LaunchScript::new(&params, &certs, "1=aaa").render();

        assert!(script.contains("export HUDDLE_HTTP_SERVER_PORT=\"4444\""));
        assert!(script.contains("export HUDDLE_USE_HTTPS=true"));
        assert!(script.contains("export HUDDLE_HTTPS_CERT_PATH=\"certs/selfsigned.crt\""));
        assert!(script.contains("export HUDDLE_HTTPS_KEY_PATH=\"certs/selfsigned.key\""));
    }
}
