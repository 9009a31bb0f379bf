//! Retrieval of the published sheets.
//!
//! A sheet is either a URL (downloaded with a blocking GET, optionally through
//! a SOCKS5 proxy) or a local TSV file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::LibError;
use crate::tsv::parse_tsv;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to read a sheet from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    Url(String),
    File(PathBuf),
}

impl SheetSource {
    /// `http://` and `https://` locations are URLs; anything else is a path,
    /// with an optional `file://` prefix.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            Self::File(PathBuf::from(path))
        }
    }
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Normalize a proxy setting into a URL reqwest understands.
///
/// A bare `host:port` is taken to be a SOCKS5 proxy.
pub fn proxy_url(proxy: &str) -> String {
    if proxy.contains("://") {
        proxy.to_string()
    } else {
        format!("socks5://{proxy}")
    }
}

/// Read every row (header included) of a sheet.
pub fn fetch_sheet(source: &SheetSource, proxy: Option<&str>) -> Result<Vec<Vec<String>>, LibError> {
    match source {
        SheetSource::File(path) => {
            log::debug!("Reading sheet from {}", path.display());
            let file = std::fs::File::open(path).map_err(|e| LibError::io(path.display(), e))?;
            parse_tsv(std::io::BufReader::new(file))
        }
        SheetSource::Url(url) => {
            log::debug!("Downloading sheet {url}");
            let client = http_client(proxy)?;
            let response = client.get(url).send()?;
            if !response.status().is_success() {
                return Err(LibError::Status {
                    status: response.status(),
                    url: url.clone(),
                });
            }
            let bytes = response.bytes()?;
            log::debug!("Downloaded {} bytes from {url}", bytes.len());
            parse_tsv(&bytes[..])
        }
    }
}

fn http_client(proxy: Option<&str>) -> Result<reqwest::blocking::Client, LibError> {
    let mut builder = reqwest::blocking::Client::builder()
        .user_agent(concat!("hgtea/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT);

    if let Some(proxy) = proxy {
        let url = proxy_url(proxy);
        log::debug!("Using proxy {url}");
        builder = builder.proxy(reqwest::Proxy::all(&url)?);
    }

    Ok(builder.build()?)
}
