pub mod cve_id;
pub mod cve_record;

pub use cve_id::CveId;
pub use cve_record::{CveRecord, SeverityMetrics};
