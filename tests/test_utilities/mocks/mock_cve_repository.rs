use cve_lookup::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock CveRepository for testing
///
/// Unknown identifiers get an empty item list, like the real API.
pub struct MockCveRepository {
    pub bodies: HashMap<String, Vec<u8>>,
    pub should_fail: bool,
    pub requested: RefCell<Vec<String>>,
}

impl MockCveRepository {
    pub fn new() -> Self {
        Self {
            bodies: HashMap::new(),
            should_fail: false,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn with_body(self, id: &str, body: &str) -> Self {
        self.with_raw_body(id, body.as_bytes())
    }

    pub fn with_raw_body(mut self, id: &str, body: &[u8]) -> Self {
        self.bodies.insert(id.to_string(), body.to_vec());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Default for MockCveRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CveRepository for MockCveRepository {
    fn fetch_raw(&self, id: &CveId) -> Result<Vec<u8>> {
        self.requested.borrow_mut().push(id.to_string());

        if self.should_fail {
            anyhow::bail!("Mock CVE repository failure");
        }

        Ok(self
            .bodies
            .get(id.as_str())
            .cloned()
            .unwrap_or_else(|| br#"{"result":{"CVE_Items":[]}}"#.to_vec()))
    }
}
