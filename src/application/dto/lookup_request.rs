/// LookupRequest - Internal request DTO for the CVE lookup use case
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// Identifier as typed by the user; the prefix may be missing
    pub identifier: String,
    /// Echo the raw response body before decoding it
    pub verbose: bool,
}

impl LookupRequest {
    pub fn new(identifier: impl Into<String>, verbose: bool) -> Self {
        Self {
            identifier: identifier.into(),
            verbose,
        }
    }
}
