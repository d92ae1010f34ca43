/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the wire format and the use case,
/// keeping the domain layer isolated.
mod lookup_request;
mod nvd_envelope;

pub use lookup_request::LookupRequest;
pub use nvd_envelope::NvdResponseEnvelope;
