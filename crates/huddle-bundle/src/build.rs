//! Backend build invocation.

use crate::layout::{BundleLayout, JAR_NAME};
use huddle_core::util::process;
use huddle_types::{HuddleError, Result};
use std::collections::HashMap;

/// Build the backend with Maven and copy the fat jar into the bundle.
///
/// # Errors
///
/// [`HuddleError::Build`] on a nonzero Maven exit, carrying the tail of
/// its stderr; I/O errors if the expected artifact is missing afterwards.
pub async fn build_backend(layout: &BundleLayout) -> Result<()> {
    let code_dir = layout.code_dir();

    tracing::info!(dir = %code_dir.display(), "Building backend with Maven");

    let (_, code, stderr) = process::run_async_in(
        &code_dir,
        "mvn",
        &["clean", "install"],
        &HashMap::new(),
    )
    .await?;

    if code != 0 {
        let tail: String = stderr
            .lines()
            .rev()
            .take(20)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect::<Vec<_>>()
            .join("\n");
        return Err(HuddleError::Build(format!(
            "mvn clean install exited with {}:\n{}",
            code, tail
        )));
    }

    let artifact = layout.code_target_dir().join(JAR_NAME);
    let dest = layout.app_bundle_dir().join(JAR_NAME);
    std::fs::copy(&artifact, &dest).map_err(|e| {
        HuddleError::Build(format!(
            "Built artifact not found at {}: {}",
            artifact.display(),
            e
        ))
    })?;

    tracing::info!(artifact = %dest.display(), "Backend artifact staged");

    Ok(())
}
