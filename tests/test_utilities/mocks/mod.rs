/// Mock implementations for testing
mod mock_cve_repository;
mod mock_output_presenter;

pub use mock_cve_repository::MockCveRepository;
pub use mock_output_presenter::MockOutputPresenter;
