/// Profile loader — fetches and parses the profile document exactly once per session.
///
/// The parsed [`Profile`] lives in a write-once cell: set on the first successful
/// `load()`, read-only afterwards. Section lookups before that return `None`.
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::profile::{Profile, Section};

pub mod source;

pub use source::{source_for, ProfileSource};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("profile fetch failed with status {status}")]
    Fetch { status: u16 },

    #[error("profile transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("profile read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed profile document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Status code for fetch failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Fetch { status } => Some(*status),
            LoadError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, LoadError::Fetch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse(_))
    }
}

pub struct Loader {
    source: Box<dyn ProfileSource>,
    profile: OnceCell<Profile>,
    failures: AtomicUsize,
}

impl Loader {
    pub fn new(source: Box<dyn ProfileSource>) -> Self {
        Self {
            source,
            profile: OnceCell::new(),
            failures: AtomicUsize::new(0),
        }
    }

    /// Loader for a path or `http(s)://` URL.
    pub fn for_location(location: &str) -> Self {
        Self::new(source_for(location))
    }

    /// Fetches and parses the profile. Once loaded, later calls return the
    /// stored document without fetching again.
    pub async fn load(&self) -> Result<&Profile, LoadError> {
        if let Some(profile) = self.profile.get() {
            return Ok(profile);
        }

        match self.fetch_profile().await {
            Ok(profile) => {
                let profile = self.profile.get_or_init(|| profile);
                info!(
                    "Profile loaded from {} ({} projects, {} skill categories)",
                    self.source.describe(),
                    profile.projects.len(),
                    profile.skills.len()
                );
                Ok(profile)
            }
            Err(e) => {
                self.failures.fetch_add(1, Ordering::SeqCst);
                error!("Error loading profile from {}: {e}", self.source.describe());
                Err(e)
            }
        }
    }

    async fn fetch_profile(&self) -> Result<Profile, LoadError> {
        let body = self.source.fetch().await?;
        parse_profile(&body)
    }

    pub fn is_loaded(&self) -> bool {
        self.profile.get().is_some()
    }

    /// The whole document, once loaded.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.get()
    }

    /// Named top-level field. Warns and returns `None` before `load()` succeeds.
    pub fn section(&self, name: &str) -> Option<Section<'_>> {
        let Some(profile) = self.profile.get() else {
            warn!("Section '{name}' requested before profile was loaded");
            return None;
        };
        profile.section(name)
    }

    /// Number of failed load attempts observed.
    pub fn failure_signalled(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }
}

pub fn parse_profile(body: &str) -> Result<Profile, LoadError> {
    Ok(serde_json::from_str(body)?)
}
