/// Use cases module containing application business logic orchestration
mod lookup_cve;

pub use lookup_cve::LookupCveUseCase;
