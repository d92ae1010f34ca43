use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where the rendered
/// table or the raw response is written.
pub trait OutputPresenter {
    /// Presents raw bytes verbatim; no newline is added and nothing is re-encoded
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present_bytes(&self, content: &[u8]) -> Result<()>;

    /// Presents text verbatim; no newline is added
    fn present(&self, content: &str) -> Result<()> {
        self.present_bytes(content.as_bytes())
    }
}

impl<T: OutputPresenter + ?Sized> OutputPresenter for &T {
    fn present_bytes(&self, content: &[u8]) -> Result<()> {
        (**self).present_bytes(content)
    }
}
