//! The packaging pipeline.
//!
//! Sequences every collaborator into one deployable bundle. Any fatal
//! error aborts the run; a half-written `_deploy/` tree is never declared
//! usable (the next run wipes it).

use crate::build;
use crate::certs::{self, StagedCerts};
use crate::launcher::LaunchScript;
use crate::layout::{BundleLayout, APP, CONFIG_JS, COTURN, COTURN_CONF};
use chrono::{DateTime, Utc};
use huddle_core::util::fs;
use huddle_rewrite::replacements::TurnServer;
use huddle_rewrite::{
    CredentialFileEditor, EntryPageProvisioner, MarkerRewriter, ReplacementTable,
};
use huddle_secrets::{ParticipantAccess, TurnCredentialPair};
use huddle_types::{DeployParams, Result};
use serde::Serialize;
use std::path::PathBuf;

/// What one successful packaging run produced.
#[derive(Debug, Clone, Serialize)]
pub struct BundleSummary {
    /// Root of the produced bundle
    pub deploy_root: PathBuf,
    /// Application sub-bundle
    pub app_dir: PathBuf,
    /// Secret-named entry page inside the staged frontend
    pub entry_page: PathBuf,
    /// Number of provisioned participant slots
    pub participants: usize,
    /// When the bundle was produced
    pub created_at: DateTime<Utc>,
}

/// Drives one packaging run.
#[derive(Debug)]
pub struct Packager {
    params: DeployParams,
    layout: BundleLayout,
    skip_build: bool,
}

impl Packager {
    /// Create a packager for the given parameters and project layout.
    pub fn new(params: DeployParams, layout: BundleLayout) -> Self {
        Self {
            params,
            layout,
            skip_build: false,
        }
    }

    /// Skip the Maven build and artifact copy.
    ///
    /// Useful when iterating on frontend provisioning with an already
    /// built backend.
    pub fn skip_build(mut self, skip: bool) -> Self {
        self.skip_build = skip;
        self
    }

    /// Run the full pipeline.
    pub async fn run(&self) -> Result<BundleSummary> {
        self.params.validate()?;

        tracing::info!(
            root = %self.layout.deploy_root().display(),
            "Preparing deploy dir"
        );
        fs::recreate_dir(self.layout.deploy_root())?;

        self.stage_docker()?;
        let turn = self.rotate_coturn_credentials()?;

        if self.skip_build {
            tracing::info!("Skipping backend build");
        } else {
            build::build_backend(&self.layout).await?;
        }

        let access =
            ParticipantAccess::provision(self.params.participants, self.params.secret_length)?;

        self.stage_frontend()?;
        self.rewrite_frontend_config(&turn)?;
        let entry_page = self.secure_entry_page(&access)?;

        let staged_certs = self.stage_certs()?;
        self.write_launcher(&staged_certs, &access)?;

        tracing::info!("Bundle ready to be deployed");

        Ok(BundleSummary {
            deploy_root: self.layout.deploy_root(),
            app_dir: self.layout.app_bundle_dir(),
            entry_page,
            participants: access.len(),
            created_at: Utc::now(),
        })
    }

    fn stage_docker(&self) -> Result<()> {
        tracing::info!("Staging docker contexts");
        fs::copy_tree(self.layout.docker_dir(APP), self.layout.app_bundle_dir())?;
        fs::copy_tree(
            self.layout.docker_dir(COTURN),
            self.layout.coturn_bundle_dir(),
        )?;
        Ok(())
    }

    fn rotate_coturn_credentials(&self) -> Result<TurnCredentialPair> {
        tracing::info!("Rotating coturn credentials");
        let pair = TurnCredentialPair::generate(self.params.secret_length)?;

        let conf = self.layout.coturn_bundle_dir().join(COTURN_CONF);
        CredentialFileEditor::new().set_credentials(&conf, &pair.username, &pair.password)?;

        Ok(pair)
    }

    fn stage_frontend(&self) -> Result<()> {
        tracing::info!(
            from = %self.layout.frontend_src().display(),
            "Staging frontend"
        );
        fs::copy_tree(
            self.layout.frontend_src(),
            self.layout.frontend_bundle_dir(),
        )
    }

    fn rewrite_frontend_config(&self, turn: &TurnCredentialPair) -> Result<()> {
        tracing::info!("Rewriting frontend config");
        let relay = TurnServer {
            host: self.params.server_host.clone(),
            port: self.params.coturn_port,
            username: turn.username.clone(),
            password: turn.password.clone(),
        };
        let table = ReplacementTable::for_deployment(&self.params, Some(relay));
        let rewriter = MarkerRewriter::new(&table);
        rewriter.rewrite_file(self.layout.frontend_bundle_dir().join(CONFIG_JS))
    }

    fn secure_entry_page(&self, access: &ParticipantAccess) -> Result<PathBuf> {
        tracing::info!("Securing conference access");
        EntryPageProvisioner::new(access)
            .secure(self.layout.frontend_bundle_dir(), self.params.secret_length)
    }

    fn stage_certs(&self) -> Result<StagedCerts> {
        certs::stage_certs(&self.layout, &self.params)
    }

    fn write_launcher(
        &self,
        staged_certs: &StagedCerts,
        access: &ParticipantAccess,
    ) -> Result<()> {
        tracing::info!("Writing launcher script");
        let export = access.to_export();
        LaunchScript::new(&self.params, staged_certs, &export).write(&self.layout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FRONTEND, LAUNCHER_NAME};
    use huddle_types::HostName;
    use tempfile::TempDir;

    /// Lay out a minimal project tree the pipeline can run against.
    fn fake_project() -> (TempDir, BundleLayout) {
        let dir = TempDir::new().unwrap();
        let layout = BundleLayout::new(dir.path());

        let frontend = layout.frontend_src();
        std::fs::create_dir_all(&frontend).unwrap();
        std::fs::write(
            frontend.join(CONFIG_JS),
            "//replace_start\n\
             const signalServerEndpoint = \"wss://old:4444\";\n\
             //replace_end\n\
             //replace_start\n\
             const webrtcConfiguration = {};\n\
             //replace_end\n\
             export const CONFIG = { signalServerEndpoint, webrtcConfiguration };\n",
        )
        .unwrap();
        std::fs::write(
            frontend.join("index.html"),
            "<li><a href=\"?key=${secret}\">join</a><span>1<</span></li>\n\
             <li><a href=\"?key=${secret}\">join</a><span>2<</span></li>\n",
        )
        .unwrap();

        std::fs::create_dir_all(layout.docker_dir(APP)).unwrap();
        std::fs::write(layout.docker_dir(APP).join("Dockerfile"), "FROM eclipse-temurin\n")
            .unwrap();

        std::fs::create_dir_all(layout.docker_dir(COTURN)).unwrap();
        std::fs::write(
            layout.docker_dir(COTURN).join(COTURN_CONF),
            "listening-port=3478\nuser=turner:turner123\nrealm=example.org\n",
        )
        .unwrap();

        (dir, layout)
    }

    fn params() -> DeployParams {
        let mut p = DeployParams::new(HostName::new("conference.example.org").unwrap());
        p.participants = 2;
        p.secret_length = 16;
        p
    }

    #[tokio::test]
    async fn test_full_pipeline_without_build() {
        let (_dir, layout) = fake_project();
        let packager = Packager::new(params(), layout.clone()).skip_build(true);

        let summary = packager.run().await.unwrap();
        assert_eq!(summary.participants, 2);

        // Frontend config rewritten in place
        let config =
            std::fs::read_to_string(layout.frontend_bundle_dir().join(CONFIG_JS)).unwrap();
        assert!(config
            .contains("const signalServerEndpoint = 'ws://conference.example.org:8888';"));
        assert!(config.contains("stun:conference.example.org:3478"));
        assert!(!config.contains("replace_start"));
        assert!(config.contains("export const CONFIG"));

        // Entry page renamed and keyed
        assert!(!layout.frontend_bundle_dir().join("index.html").exists());
        assert!(summary.entry_page.exists());
        let page = std::fs::read_to_string(&summary.entry_page).unwrap();
        assert!(!page.contains("${secret}"));

        // coturn credentials rotated
        let conf =
            std::fs::read_to_string(layout.coturn_bundle_dir().join(COTURN_CONF)).unwrap();
        assert!(!conf.contains("turner:turner123"));
        assert!(conf.contains("listening-port=3478"));

        // Launcher exports the provisioned values
        let script =
            std::fs::read_to_string(layout.app_bundle_dir().join(LAUNCHER_NAME)).unwrap();
        assert!(script.contains(&format!("HUDDLE_STATIC_ROOT_DIR=\"${{to_package_dir}}{}\"", FRONTEND)));
        assert!(script.contains("HUDDLE_PARTICIPANTS_ACCESS=\"1="));
    }

    #[tokio::test]
    async fn test_rerun_wipes_previous_bundle() {
        let (_dir, layout) = fake_project();

        let stale = layout.deploy_root().join("stale.txt");
        std::fs::create_dir_all(layout.deploy_root()).unwrap();
        std::fs::write(&stale, "old").unwrap();

        Packager::new(params(), layout.clone())
            .skip_build(true)
            .run()
            .await
            .unwrap();

        assert!(!stale.exists());
    }

    #[tokio::test]
    async fn test_unknown_participant_in_template_aborts() {
        let (_dir, layout) = fake_project();
        std::fs::write(
            layout.frontend_src().join("index.html"),
            "<li><a href=\"?key=${secret}\">join</a><span>9<</span></li>\n",
        )
        .unwrap();

        let result = Packager::new(params(), layout)
            .skip_build(true)
            .run()
            .await;
        assert!(matches!(
            result,
            Err(huddle_types::HuddleError::UnknownParticipant { id: 9, .. })
        ));
    }
}
