/// CVSS v3 scoring of a vulnerability
///
/// Every field falls back to its zero value when the record carries no
/// v3 metrics, so a record without scoring still renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeverityMetrics {
    pub base_score: f64,
    pub base_severity: String,
    pub attack_vector: String,
    pub attack_complexity: String,
    pub vector_string: String,
}

/// The normalized view of one NVD vulnerability item
///
/// `published_date` is kept exactly as the database sent it; it is only displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CveRecord {
    pub id: String,
    pub description: String,
    pub published_date: String,
    pub severity: SeverityMetrics,
}

impl CveRecord {
    pub fn new(
        id: String,
        description: String,
        published_date: String,
        severity: SeverityMetrics,
    ) -> Self {
        Self {
            id,
            description,
            published_date,
            severity,
        }
    }
}
