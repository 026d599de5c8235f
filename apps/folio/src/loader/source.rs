use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::LoadError;

/// Status reported when a file-backed profile does not exist.
const NOT_FOUND: u16 = 404;

/// Where the profile document comes from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches the raw document body.
    async fn fetch(&self) -> Result<String, LoadError>;

    fn describe(&self) -> String;
}

/// Profile on the local filesystem, addressed by relative or absolute path.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfileSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        debug!("Reading profile from {}", self.path.display());
        match tokio::fs::read_to_string(&self.path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(LoadError::Fetch { status: NOT_FOUND })
            }
            Err(e) => Err(LoadError::Io(e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Profile served over HTTP. No timeout and no retries.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ProfileSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        debug!("Fetching profile from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Fetch {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// `http://` and `https://` locations are fetched over HTTP; anything else is a path.
pub fn source_for(location: &str) -> Box<dyn ProfileSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
