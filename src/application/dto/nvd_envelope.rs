use crate::shared::error::LookupError;
use crate::shared::Result;
use crate::vulnerability::domain::{CveRecord, SeverityMetrics};
use serde::Deserialize;

/// NvdResponseEnvelope - the top-level JSON body of the NVD single-record API
///
/// Shape: `{ "result": { "CVE_Items": [ ... ] } }`.
///
/// Every nested object is optional. A record that lacks a sub-object (for
/// example, no `baseMetricV3` scoring) still decodes; the missing fields are
/// resolved to their zero value in [`NvdResponseEnvelope::into_records`], one
/// explicit presence check per level. A bare `null` body is an empty
/// envelope. Only a body that is not JSON (including one with a leading
/// byte order mark), or whose values have the wrong JSON type, fails to decode.
#[derive(Debug, Default, Deserialize)]
pub struct NvdResponseEnvelope {
    #[serde(default)]
    result: Option<NvdResult>,
}

#[derive(Debug, Deserialize)]
struct NvdResult {
    #[serde(rename = "CVE_Items", default)]
    cve_items: Option<Vec<NvdCveItem>>,
}

#[derive(Debug, Deserialize)]
struct NvdCveItem {
    #[serde(default)]
    cve: Option<NvdCve>,
    #[serde(default)]
    impact: Option<NvdImpact>,
    #[serde(rename = "publishedDate", default)]
    published_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NvdCve {
    #[serde(rename = "CVE_data_meta", default)]
    data_meta: Option<NvdDataMeta>,
    #[serde(default)]
    description: Option<NvdDescription>,
}

#[derive(Debug, Deserialize)]
struct NvdDataMeta {
    #[serde(rename = "ID", default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NvdDescription {
    #[serde(default)]
    description_data: Option<Vec<NvdDescriptionData>>,
}

#[derive(Debug, Deserialize)]
struct NvdDescriptionData {
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NvdImpact {
    #[serde(rename = "baseMetricV3", default)]
    base_metric_v3: Option<NvdBaseMetricV3>,
}

#[derive(Debug, Deserialize)]
struct NvdBaseMetricV3 {
    #[serde(rename = "cvssV3", default)]
    cvss_v3: Option<NvdCvssV3>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NvdCvssV3 {
    #[serde(default)]
    base_score: Option<f64>,
    #[serde(default)]
    base_severity: Option<String>,
    #[serde(default)]
    attack_vector: Option<String>,
    #[serde(default)]
    attack_complexity: Option<String>,
    #[serde(default)]
    vector_string: Option<String>, // e.g. "CVSS:3.1/AV:N/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H"
}

impl NvdResponseEnvelope {
    /// Decodes a raw response body
    ///
    /// # Errors
    /// Returns `LookupError::Decode` if the body is not JSON or does not fit the envelope shape
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let envelope: Option<Self> =
            serde_json::from_slice(body).map_err(|source| LookupError::Decode { source })?;
        Ok(envelope.unwrap_or_default())
    }

    /// Number of items in the envelope; zero when `result` or `CVE_Items` is absent
    pub fn item_count(&self) -> usize {
        self.result
            .as_ref()
            .and_then(|r| r.cve_items.as_ref())
            .map_or(0, Vec::len)
    }

    /// Converts every item into the domain model, in response order
    pub fn into_records(self) -> Vec<CveRecord> {
        let items = match self.result.and_then(|r| r.cve_items) {
            Some(items) => items,
            None => return Vec::new(),
        };

        items.into_iter().map(NvdCveItem::into_record).collect()
    }
}

impl NvdCveItem {
    fn into_record(self) -> CveRecord {
        let (id, description) = match self.cve {
            Some(cve) => {
                let id = cve.data_meta.and_then(|meta| meta.id).unwrap_or_default();
                (id, cve.description.map(first_description).unwrap_or_default())
            }
            None => (String::new(), String::new()),
        };

        let severity = self
            .impact
            .and_then(|impact| impact.base_metric_v3)
            .and_then(|metric| metric.cvss_v3)
            .map(NvdCvssV3::into_metrics)
            .unwrap_or_default();

        CveRecord::new(
            id,
            description,
            self.published_date.unwrap_or_default(),
            severity,
        )
    }
}

impl NvdCvssV3 {
    fn into_metrics(self) -> SeverityMetrics {
        SeverityMetrics {
            base_score: self.base_score.unwrap_or_default(),
            base_severity: self.base_severity.unwrap_or_default(),
            attack_vector: self.attack_vector.unwrap_or_default(),
            attack_complexity: self.attack_complexity.unwrap_or_default(),
            vector_string: self.vector_string.unwrap_or_default(),
        }
    }
}

/// Picks the first localized description; records without one get an empty string
fn first_description(description: NvdDescription) -> String {
    description
        .description_data
        .and_then(|data| data.into_iter().next())
        .and_then(|entry| entry.value)
        .unwrap_or_default()
}
