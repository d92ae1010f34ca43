use crate::vulnerability::domain::CveRecord;

/// RecordFormatter port for rendering a record as text
pub trait RecordFormatter {
    /// Renders the record, including a trailing newline
    fn format(&self, record: &CveRecord) -> String;
}

impl<T: RecordFormatter + ?Sized> RecordFormatter for &T {
    fn format(&self, record: &CveRecord) -> String {
        (**self).format(record)
    }
}
