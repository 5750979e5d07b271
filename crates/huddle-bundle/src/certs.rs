//! Certificate staging.

use crate::layout::{BundleLayout, CERTS};
use huddle_core::util::fs;
use huddle_types::{DeployParams, HuddleError, Result};
use std::path::PathBuf;

/// Relative cert/key paths inside the bundle, as the launcher needs them.
#[derive(Debug, Clone, Default)]
pub struct StagedCerts {
    /// Certificate path relative to the bundle root
    pub cert: Option<PathBuf>,
    /// Key path relative to the bundle root
    pub key: Option<PathBuf>,
}

/// Stage TLS material into the bundle's `certs/` directory.
///
/// Without HTTPS only the empty directory is created. With HTTPS,
/// user-supplied cert and key are copied in when both are given; otherwise
/// the bundled self-signed pair is used.
pub fn stage_certs(layout: &BundleLayout, params: &DeployParams) -> Result<StagedCerts> {
    let certs_dir = layout.certs_bundle_dir();
    std::fs::create_dir_all(&certs_dir)?;

    if !params.use_https {
        return Ok(StagedCerts::default());
    }

    if let (Some(cert_src), Some(key_src)) =
        (&params.https_cert_path, &params.https_key_path)
    {
        let cert_name = cert_src.file_name().ok_or_else(|| {
            HuddleError::Config(format!("Invalid cert path: {}", cert_src.display()))
        })?;
        let key_name = key_src.file_name().ok_or_else(|| {
            HuddleError::Config(format!("Invalid key path: {}", key_src.display()))
        })?;

        std::fs::copy(cert_src, certs_dir.join(cert_name))?;
        std::fs::copy(key_src, certs_dir.join(key_name))?;

        tracing::info!("Staged user-supplied certificates");

        return Ok(StagedCerts {
            cert: Some(PathBuf::from(CERTS).join(cert_name)),
            key: Some(PathBuf::from(CERTS).join(key_name)),
        });
    }

    tracing::warn!("No certificate pair supplied, staging self-signed fallback");
    fs::copy_tree(layout.fake_certs_dir(), &certs_dir)?;

    Ok(StagedCerts {
        cert: Some(PathBuf::from(CERTS).join("selfsigned.crt")),
        key: Some(PathBuf::from(CERTS).join("selfsigned.key")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_types::HostName;
    use tempfile::TempDir;

    fn setup() -> (TempDir, BundleLayout, DeployParams) {
        let dir = TempDir::new().unwrap();
        let layout = BundleLayout::new(dir.path());
        std::fs::create_dir_all(layout.app_bundle_dir()).unwrap();

        let fake = layout.fake_certs_dir();
        std::fs::create_dir_all(&fake).unwrap();
        std::fs::write(fake.join("selfsigned.crt"), "CERT").unwrap();
        std::fs::write(fake.join("selfsigned.key"), "KEY").unwrap();

        let params = DeployParams::new(HostName::new("localhost").unwrap());
        (dir, layout, params)
    }

    #[test]
    fn test_plain_http_creates_empty_certs_dir() {
        let (_dir, layout, params) = setup();

        let staged = stage_certs(&layout, &params).unwrap();
        assert!(staged.cert.is_none());
        assert!(staged.key.is_none());
        assert!(layout.certs_bundle_dir().exists());
    }

    #[test]
    fn test_https_falls_back_to_self_signed() {
        let (_dir, layout, mut params) = setup();
        params.use_https = true;

        let staged = stage_certs(&layout, &params).unwrap();
        assert_eq!(staged.cert.unwrap(), PathBuf::from("certs/selfsigned.crt"));
        assert_eq!(staged.key.unwrap(), PathBuf::from("certs/selfsigned.key"));
        assert!(layout.certs_bundle_dir().join("selfsigned.crt").exists());
    }

    #[test]
    fn test_https_with_custom_pair() {
        let (dir, layout, mut params) = setup();

        let cert = dir.path().join("my.crt");
        let key = dir.path().join("my.key");
        std::fs::write(&cert, "MYCERT").unwrap();
        std::fs::write(&key, "MYKEY").unwrap();

        params.use_https = true;
        params.https_cert_path = Some(cert);
        params.https_key_path = Some(key);

        let staged = stage_certs(&layout, &params).unwrap();
        assert_eq!(staged.cert.unwrap(), PathBuf::from("certs/my.crt"));
        assert_eq!(
            std::fs::read_to_string(layout.certs_bundle_dir().join("my.crt")).unwrap(),
            "MYCERT"
        );
    }
}
