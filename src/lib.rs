//! cve-lookup - look up a single CVE record in the NVD
//!
//! The lookup is one fixed pipeline: normalize the identifier, fetch the
//! record with one HTTP GET, decode the response and render the first
//! record as a two-column table.
//!
//! # Architecture
//!
//! - **Domain Layer** (`vulnerability`): `CveId`, `CveRecord`, `SeverityMetrics`
//! - **Application Layer** (`application`): the lookup use case and its DTOs
//! - **Ports** (`ports`): interfaces for fetching, formatting and presenting
//! - **Adapters** (`adapters`): NVD client, table formatter, stdout presenter
//! - **Shared** (`shared`): error taxonomy, exit codes and `Result`
//!
//! # Example
//!
//! ```no_run
//! use cve_lookup::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = LookupCveUseCase::new(
//!     NvdClient::new()?,
//!     TableFormatter::new(),
//!     StdoutPresenter::new(),
//! );
//!
//! let record = use_case.execute(LookupRequest::new("2021-34527", false))?;
//! assert_eq!(record.id, "CVE-2021-34527");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod vulnerability;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StdoutPresenter;
    pub use crate::adapters::outbound::formatters::TableFormatter;
    pub use crate::adapters::outbound::network::NvdClient;
    pub use crate::application::dto::{LookupRequest, NvdResponseEnvelope};
    pub use crate::application::use_cases::LookupCveUseCase;
    pub use crate::ports::outbound::{CveRepository, OutputPresenter, RecordFormatter};
    pub use crate::shared::error::{ExitCode, LookupError};
    pub use crate::shared::Result;
    pub use crate::vulnerability::domain::{CveId, CveRecord, SeverityMetrics};
}
