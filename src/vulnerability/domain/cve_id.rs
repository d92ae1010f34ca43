/// NewType wrapper for a canonical CVE identifier
///
/// A `CveId` always starts with [`CveId::PREFIX`]. The prefix test is
/// case-sensitive, matching the NVD's own spelling of identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CveId(String);

impl CveId {
    pub const PREFIX: &'static str = "CVE-";

    /// Canonicalizes user input, prepending the prefix when it is missing.
    ///
    /// Never fails: `"2021-34527"` and `"CVE-2021-34527"` both yield
    /// `"CVE-2021-34527"`, while `"cve-2021-34527"` becomes `"CVE-cve-2021-34527"`.
    pub fn normalize(input: &str) -> Self {
        if input.starts_with(Self::PREFIX) {
            Self(input.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, input))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
