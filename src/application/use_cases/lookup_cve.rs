use crate::application::dto::{LookupRequest, NvdResponseEnvelope};
use crate::ports::outbound::{CveRepository, OutputPresenter, RecordFormatter};
use crate::shared::error::LookupError;
use crate::shared::Result;
use crate::vulnerability::domain::{CveId, CveRecord};

/// Label printed in front of the raw response in verbose mode
const RAW_RESPONSE_LABEL: &str = "Raw JSON Response:";

/// LookupCveUseCase - Core use case for a single CVE lookup
///
/// Runs the pipeline normalize -> fetch -> present once per call. Every
/// failure is returned as a `LookupError` inside the result; nothing here
/// terminates the process.
///
/// # Type Parameters
/// * `R` - CveRepository implementation
/// * `F` - RecordFormatter implementation
/// * `P` - OutputPresenter implementation
pub struct LookupCveUseCase<R, F, P> {
    repository: R,
    formatter: F,
    presenter: P,
}

impl<R, F, P> LookupCveUseCase<R, F, P>
where
    R: CveRepository,
    F: RecordFormatter,
    P: OutputPresenter,
{
    /// Creates a new LookupCveUseCase with injected dependencies
    pub fn new(repository: R, formatter: F, presenter: P) -> Self {
        Self {
            repository,
            formatter,
            presenter,
        }
    }

    /// Executes the lookup use case
    ///
    /// # Returns
    /// The record that was rendered
    ///
    /// # Errors
    /// - `LookupError::Transport` when the request could not be completed
    /// - `LookupError::Decode` when the body does not fit the envelope
    /// - `LookupError::NotFound` when the database holds no record for the identifier
    pub fn execute(&self, request: LookupRequest) -> Result<CveRecord> {
        let id = CveId::normalize(&request.identifier);
        tracing::debug!(input = %request.identifier, id = %id, "normalized identifier");

        let body = self.repository.fetch_raw(&id)?;

        self.present(&id, &body, request.verbose)
    }

    /// Decodes a response body and presents the first record
    ///
    /// In verbose mode the raw body is written byte-for-byte before decoding
    /// starts, so it is visible even when decoding fails or the item list is empty.
    pub fn present(&self, id: &CveId, body: &[u8], verbose: bool) -> Result<CveRecord> {
        if verbose {
            let mut echo = Vec::with_capacity(RAW_RESPONSE_LABEL.len() + body.len() + 2);
            echo.extend_from_slice(RAW_RESPONSE_LABEL.as_bytes());
            echo.push(b' ');
            echo.extend_from_slice(body);
            echo.push(b'\n');
            self.presenter.present_bytes(&echo)?;
        }

        let envelope = NvdResponseEnvelope::from_json(body)?;
        let item_count = envelope.item_count();
        tracing::debug!(items = item_count, "decoded NVD response");

        let mut records = envelope.into_records();
        if records.is_empty() {
            return Err(LookupError::NotFound {
                id: id.to_string(),
            }
            .into());
        }
        if records.len() > 1 {
            tracing::warn!(
                items = records.len(),
                "NVD returned more than one record for {}; showing the first",
                id
            );
        }

        let record = records.swap_remove(0);
        self.presenter.present(&self.formatter.format(&record))?;

        Ok(record)
    }
}
