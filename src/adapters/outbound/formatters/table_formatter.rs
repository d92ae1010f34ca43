use crate::ports::outbound::RecordFormatter;
use crate::vulnerability::domain::CveRecord;

/// Header row of the key/value table
const TABLE_HEADER: (&str, &str) = ("Field", "Value");

/// Separator row of the key/value table
const TABLE_SEPARATOR: (&str, &str) = ("-----", "-----");

/// Spaces between the widest key and the column separator
const CELL_PADDING: usize = 2;

/// Column separator
const COLUMN_SEPARATOR: char = '|';

/// TableFormatter adapter for a two-column, fixed-width terminal table
///
/// The key column is padded to the widest key plus [`CELL_PADDING`] and
/// closed by `|`; values are printed verbatim after it. Widths count
/// characters, not bytes, so non-ASCII keys stay aligned.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// The eight rows shown for a record, in display order
    fn rows(record: &CveRecord) -> Vec<(&'static str, String)> {
        let severity = &record.severity;
        vec![
            ("CVE ID", record.id.clone()),
            ("Description", record.description.clone()),
            ("Published Date", record.published_date.clone()),
            ("Base Score", format_score(severity.base_score)),
            ("Severity", severity.base_severity.clone()),
            ("Attack Vector", severity.attack_vector.clone()),
            ("Attack Complexity", severity.attack_complexity.clone()),
            ("CVSS", severity.vector_string.clone()),
        ]
    }

    fn render_row(output: &mut String, key: &str, value: &str, key_width: usize) {
        let padding = key_width - key.chars().count();
        output.push_str(key);
        output.push_str(&" ".repeat(padding));
        output.push(COLUMN_SEPARATOR);
        output.push_str(value);
        output.push('\n');
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormatter for TableFormatter {
    fn format(&self, record: &CveRecord) -> String {
        let rows = Self::rows(record);

        let key_width = rows
            .iter()
            .map(|(key, _)| *key)
            .chain([TABLE_HEADER.0, TABLE_SEPARATOR.0])
            .map(|key| key.chars().count())
            .max()
            .unwrap_or(0)
            + CELL_PADDING;

        let mut output = String::new();
        Self::render_row(&mut output, TABLE_HEADER.0, TABLE_HEADER.1, key_width);
        Self::render_row(&mut output, TABLE_SEPARATOR.0, TABLE_SEPARATOR.1, key_width);
        for (key, value) in &rows {
            Self::render_row(&mut output, key, value, key_width);
        }
        output
    }
}

/// Fixed six-decimal rendering of a CVSS score: 8.8 -> "8.800000"
fn format_score(score: f64) -> String {
    format!("{:.6}", score)
}
