use crate::shared::Result;
use crate::vulnerability::domain::CveId;

/// CveRepository port for retrieving raw vulnerability records
///
/// Implementations perform exactly one request per call and return the
/// response body byte for byte, whatever the HTTP status or declared
/// charset was. Interpreting the payload is left to the caller.
pub trait CveRepository {
    /// Fetches the raw response body for a single identifier
    ///
    /// # Errors
    /// Returns `LookupError::Transport` if:
    /// - DNS resolution or the connection fails
    /// - The TLS handshake fails
    /// - The response body cannot be read
    fn fetch_raw(&self, id: &CveId) -> Result<Vec<u8>>;
}

impl<T: CveRepository + ?Sized> CveRepository for &T {
    fn fetch_raw(&self, id: &CveId) -> Result<Vec<u8>> {
        (**self).fetch_raw(id)
    }
}
