use cve_lookup::prelude::*;
use std::cell::RefCell;

/// Mock OutputPresenter that records everything written to it
#[derive(Default)]
pub struct MockOutputPresenter {
    pub output: RefCell<Vec<u8>>,
    pub calls: RefCell<usize>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily for text assertions
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output.borrow()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.output.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present_bytes(&self, content: &[u8]) -> Result<()> {
        self.output.borrow_mut().extend_from_slice(content);
        *self.calls.borrow_mut() += 1;
        Ok(())
    }
}
