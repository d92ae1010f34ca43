/// Formatter adapters for rendering CVE records
mod table_formatter;

pub use table_formatter::TableFormatter;
