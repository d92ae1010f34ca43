/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, stdout).
pub mod cve_repository;
pub mod output_presenter;
pub mod record_formatter;

pub use cve_repository::CveRepository;
pub use output_presenter::OutputPresenter;
pub use record_formatter::RecordFormatter;
