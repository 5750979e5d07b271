//! Build and provision a deployable bundle.

use crate::cli::PackageArgs;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use dialoguer::Confirm;
use huddle_bundle::{BundleLayout, Packager};
use huddle_types::{DeployParams, HostName};

pub async fn execute(args: &PackageArgs) -> Result<()> {
    let host = HostName::new(&args.server_host).context("Invalid server host")?;

    let mut params = DeployParams::new(host);
    params.http_port = args.http_port;
    params.coturn_port = args.coturn_port;
    params.use_https = args.use_https;
    params.https_cert_path = args.https_cert_path.clone();
    params.https_key_path = args.https_key_path.clone();
    params.participants = args.participants;
    params.secret_length = args.secret_length;
    params.validate().context("Invalid deployment parameters")?;

    let layout = BundleLayout::new(&args.root);
    if !layout.frontend_src().exists() {
        bail!(
            "No frontend found at {:?}; is {:?} a project root?",
            layout.frontend_src(),
            args.root
        );
    }

    let deploy_root = layout.deploy_root();
    if deploy_root.exists() && !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Existing bundle at {:?} will be wiped. Continue?",
                deploy_root
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    println!(
        "{} bundle for: {}",
        "Packaging".green().bold(),
        params.server_host.to_string().cyan()
    );
    println!(
        "  Endpoint: {}",
        format!(
            "{}://{}:{}",
            if params.use_https { "wss" } else { "ws" },
            params.server_host,
            params.effective_port()
        )
        .cyan()
    );
    println!(
        "  Participant slots: {}",
        params.participants.to_string().cyan()
    );

    let packager = Packager::new(params, layout).skip_build(args.skip_build);
    let summary = packager.run().await.context("Packaging failed")?;

    println!("{} Bundle ready", "✓".green().bold());
    println!("  Location: {}", summary.deploy_root.display().to_string().cyan());
    if let Some(entry) = summary.entry_page.file_name().and_then(|n| n.to_str()) {
        println!("  Entry page: {}", entry.cyan());
    }
    println!(
        "  Provisioned: {} participant slots",
        summary.participants.to_string().cyan()
    );
    println!(
        "  {} distribute the per-participant links from the entry page; the",
        "Note:".yellow()
    );
    println!("  page's own filename is the access credential.");

    Ok(())
}
