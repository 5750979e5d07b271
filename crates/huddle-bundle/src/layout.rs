//! Project and bundle directory layout.
//!
//! One source of truth for where everything lives, relative to the project
//! root. Nothing else in the pipeline concatenates path segments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the staged frontend directory inside the bundle.
pub const FRONTEND: &str = "frontend";
/// Name of the certs directory inside the bundle.
pub const CERTS: &str = "certs";
/// Name of the coturn sub-bundle.
pub const COTURN: &str = "coturn";
/// Name of the application sub-bundle.
pub const APP: &str = "huddle";
/// File name of the built backend artifact.
pub const JAR_NAME: &str = "huddle-jar-with-dependencies.jar";
/// File name of the generated launcher.
pub const LAUNCHER_NAME: &str = "huddle.bash";
/// File name of the coturn config inside its docker directory.
pub const COTURN_CONF: &str = "coturn.conf";
/// Frontend config file carrying the marker regions.
pub const CONFIG_JS: &str = "config.js";

/// Directory layout for one packaging run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleLayout {
    /// Project root directory
    pub root: PathBuf,
}

impl BundleLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Backend source directory (`code/`).
    pub fn code_dir(&self) -> PathBuf {
        self.root.join("code")
    }

    /// Maven output directory of the backend build.
    pub fn code_target_dir(&self) -> PathBuf {
        self.code_dir().join("target")
    }

    /// Source directory of the static frontend.
    pub fn frontend_src(&self) -> PathBuf {
        self.root.join("static").join(FRONTEND)
    }

    /// Bundled self-signed certificate pair.
    pub fn fake_certs_dir(&self) -> PathBuf {
        self.root.join("static").join("fake-certs")
    }

    /// Docker context for a named service.
    pub fn docker_dir(&self, service: &str) -> PathBuf {
        self.root.join("docker").join(service)
    }

    /// Root of the produced bundle (`_deploy/`). Wiped on every run.
    pub fn deploy_root(&self) -> PathBuf {
        self.root.join("_deploy")
    }

    /// Application sub-bundle inside the deploy root.
    pub fn app_bundle_dir(&self) -> PathBuf {
        self.deploy_root().join(APP)
    }

    /// coturn sub-bundle inside the deploy root.
    pub fn coturn_bundle_dir(&self) -> PathBuf {
        self.deploy_root().join(COTURN)
    }

    /// Staged frontend inside the application bundle.
    pub fn frontend_bundle_dir(&self) -> PathBuf {
        self.app_bundle_dir().join(FRONTEND)
    }

    /// Certs directory inside the application bundle.
    pub fn certs_bundle_dir(&self) -> PathBuf {
        self.app_bundle_dir().join(CERTS)
    }
}
