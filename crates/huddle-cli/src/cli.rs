//! CLI structure and command definitions.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huddle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deployment packager for the Huddle conferencing PoC", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build, provision, and stage a deployable bundle
    Package(PackageArgs),

    /// Show version information
    Version {
        /// Show detailed version info
        #[arg(short = 'V', long)]
        verbose: bool,
    },
}

#[derive(Args)]
pub struct PackageArgs {
    /// Host or IP address of the server where the bundle will be deployed
    #[arg(long, default_value = "localhost")]
    pub server_host: String,

    /// Signal server port (default: 8888, or 4444 with --use-https)
    #[arg(long)]
    pub http_port: Option<u16>,

    /// Port of the coturn server, which serves as both STUN and TURN server
    #[arg(long, default_value_t = 3478)]
    pub coturn_port: u16,

    /// Use HTTPS. Without --https-cert-path and --https-key-path a
    /// self-signed certificate and key are staged instead
    #[arg(long)]
    pub use_https: bool,

    /// Path to the TLS certificate
    #[arg(long, requires = "https_key_path")]
    pub https_cert_path: Option<PathBuf>,

    /// Path to the TLS key
    #[arg(long, requires = "https_cert_path")]
    pub https_key_path: Option<PathBuf>,

    /// Number of participant slots to provision
    #[arg(long, default_value_t = 10)]
    pub participants: usize,

    /// Length of every generated secret
    #[arg(long, default_value_t = 48)]
    pub secret_length: usize,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Skip the Maven build (reuse an already built backend artifact)
    #[arg(long)]
    pub skip_build: bool,

    /// Skip confirmation before wiping an existing _deploy directory
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Package(args) => package::execute(args).await,
            Commands::Version { verbose } => version::execute(*verbose),
        }
    }
}
