use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DailyReportRow;

/// Paging metadata of a report response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub page: u32,
    pub total_page: u32,
}

/// Navigation URLs for the current report page and its neighbours
///
/// Missing neighbours are written as empty strings so clients always see
/// the same three keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLinks {
    pub current: String,
    #[serde(
        default,
        serialize_with = "empty_when_none",
        deserialize_with = "none_when_empty"
    )]
    pub next: Option<String>,
    #[serde(
        rename = "prev",
        default,
        serialize_with = "empty_when_none",
        deserialize_with = "none_when_empty"
    )]
    pub previous: Option<String>,
}

/// Response body shared by both report endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub pagination: Pagination,
    #[serde(rename = "link")]
    pub links: NavigationLinks,
    #[serde(rename = "data")]
    pub rows: Vec<DailyReportRow>,
}

impl ReportEnvelope {
    pub fn new(pagination: Pagination, links: NavigationLinks, rows: Vec<DailyReportRow>) -> Self {
        Self {
            pagination,
            links,
            rows,
        }
    }
}

fn empty_when_none<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn none_when_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|link| !link.is_empty()))
}
