use crate::ports::outbound::CveRepository;
use crate::shared::error::LookupError;
use crate::shared::Result;
use crate::vulnerability::domain::CveId;
use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::Url;

/// NVD API client for fetching single CVE records
///
/// Uses the NVD 1.0 single-record endpoint: `<API_ENDPOINT><CVE-ID>`.
///
/// # Behavior
/// - One GET per lookup, no retry
/// - No custom headers and no timeout beyond reqwest's default
/// - The HTTP status is not checked; the body bytes are returned as-is,
///   without charset decoding or BOM stripping
pub struct NvdClient {
    client: Client,
    base_url: Url,
}

impl NvdClient {
    const API_ENDPOINT: &'static str = "https://services.nvd.nist.gov/rest/json/cve/1.0/";

    /// Creates a new NVD client pointing at the public API
    pub fn new() -> Result<Self> {
        Self::with_base_url(Self::API_ENDPOINT)
    }

    /// Creates a client pointing at another deployment of the same API
    ///
    /// The identifier is appended to `base_url` as one extra path segment.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid NVD API URL: {}", base_url))?;

        if base_url.cannot_be_a_base() {
            anyhow::bail!("Invalid NVD API URL: {} cannot carry a path", base_url);
        }

        let client = Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    /// Builds the lookup URL for an identifier
    ///
    /// The identifier is percent-encoded as a single path segment, so it can
    /// never change the path, query or fragment of the request.
    pub fn record_url(&self, id: &CveId) -> Url {
        let mut url = self.base_url.clone();
        // `with_base_url` rejects cannot-be-a-base URLs, so the path is always editable
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }
}

impl CveRepository for NvdClient {
    fn fetch_raw(&self, id: &CveId) -> Result<Vec<u8>> {
        let url = self.record_url(id);
        tracing::debug!(url = %url, "requesting CVE record");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| LookupError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().map_err(|source| LookupError::Transport {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!(status = %status, bytes = body.len(), "received NVD response");
        Ok(body.to_vec())
    }
}
