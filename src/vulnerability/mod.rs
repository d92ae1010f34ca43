/// Vulnerability lookup domain - pure types with no I/O
pub mod domain;
