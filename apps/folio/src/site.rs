//! Site builder — host page in, populated page out.
//!
//! Sequence: boot screen → load profile → render every section → clear the
//! boot screen → write the page and copy the assets next to it.
//! A failed load appends one failure notice and renders nothing else.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use crate::boot::{clear_boot_screen, render_boot_screen, run_boot_sequence};
use crate::config::Config;
use crate::loader::{LoadError, Loader};
use crate::render::{markup, HostPage, RenderReport, Renderer, Surface};
use crate::theme::Theme;

/// Result of populating one host page.
pub struct Build {
    pub html: String,
    pub result: Result<RenderReport, LoadError>,
}

pub enum BuildOutcome {
    Built { output: PathBuf, report: RenderReport },
    LoadFailed { output: PathBuf, error: LoadError },
}

/// Loads the profile and renders it into `host_page`. Never touches the filesystem
/// beyond what the loader's source reads.
pub async fn build_page(loader: &Loader, theme: &Theme, host_page: &str) -> Build {
    let mut page = HostPage::parse(host_page);
    render_boot_screen(&mut page, theme);
    run_boot_sequence(theme).await;

    let result = match loader.load().await {
        Ok(profile) => Ok(Renderer::new(profile, theme).render_all(&mut page)),
        Err(e) => {
            page.append_to_body(&markup::failure_notice().into_string());
            Err(e)
        }
    };
    clear_boot_screen(&mut page, theme);

    Build {
        html: page.to_html(),
        result,
    }
}

/// Full build driven by config. Returns the loader so `serve` can reuse the session.
pub async fn build_site(config: &Config) -> Result<(Loader, String, BuildOutcome)> {
    let theme = config.resolve_theme()?;
    let host_page = tokio::fs::read_to_string(&config.host_page)
        .await
        .with_context(|| format!("Failed to read host page {}", config.host_page.display()))?;

    let loader = Loader::for_location(&config.profile_source);
    let build = build_page(&loader, &theme, &host_page).await;

    let output = config.output_page();
    write_page(&output, &build.html).await?;
    copy_assets(&config.assets_dir, &config.output_assets()).await?;

    let outcome = match build.result {
        Ok(report) => {
            info!("Site written to {}", output.display());
            BuildOutcome::Built { output, report }
        }
        Err(error) => {
            error!(
                "Profile load failed; wrote failure notice to {}",
                output.display()
            );
            BuildOutcome::LoadFailed { output, error }
        }
    };

    Ok((loader, build.html, outcome))
}

async fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Copies the asset tree into the output. A missing asset directory is skipped.
async fn copy_assets(from: &Path, to: &Path) -> Result<usize> {
    if !tokio::fs::try_exists(from).await.unwrap_or(false) {
        warn!("Assets directory {} not found; skipping copy", from.display());
        return Ok(0);
    }
    if let (Ok(src), Ok(dst)) = (
        tokio::fs::canonicalize(from).await,
        tokio::fs::canonicalize(to).await,
    ) {
        if src == dst {
            return Ok(0);
        }
    }

    let mut copied = 0;
    let mut pending = vec![(from.to_path_buf(), to.to_path_buf())];
    while let Some((src_dir, dst_dir)) = pending.pop() {
        tokio::fs::create_dir_all(&dst_dir)
            .await
            .with_context(|| format!("Failed to create {}", dst_dir.display()))?;
        let mut entries = tokio::fs::read_dir(&src_dir)
            .await
            .with_context(|| format!("Failed to read {}", src_dir.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            let src = entry.path();
            let dst = dst_dir.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                pending.push((src, dst));
            } else {
                tokio::fs::copy(&src, &dst)
                    .await
                    .with_context(|| format!("Failed to copy {}", src.display()))?;
                copied += 1;
            }
        }
    }

    debug!("Copied {copied} asset files to {}", to.display());
    Ok(copied)
}
