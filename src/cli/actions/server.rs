use crate::portal::{self, RuntimeConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub runtime: RuntimeConfig,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the dist directory is unusable or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let dist_dir = args
        .dist_dir
        .canonicalize()
        .with_context(|| format!("Frontend dist directory not found: {}", args.dist_dir.display()))?;

    if !dist_dir.join("index.html").is_file() {
        warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            dist_dir.display()
        );
    }

    if args.runtime.recaptcha_site_key.is_empty() {
        warn!("No reCAPTCHA site key configured, CAPTCHA gating is disabled in the frontend");
    }

    debug!("Runtime config: {:?}", args.runtime);

    portal::new(args.port, dist_dir, args.runtime).await
}
