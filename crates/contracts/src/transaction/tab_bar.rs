use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query for `GET {service}/tab-bar-data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarQuery {
    /// Chart range start, epoch millis
    pub from: i64,
    /// Chart range end, epoch millis
    pub to: i64,
    pub transaction_type: String,
    /// None means "all transactions of this type"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_name: Option<String>,
}

/// Summary counts for the transaction tab strip at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarData {
    pub trace_count: u64,
    /// Remaining tab-specific counts, kept as sent by the server
    #[serde(flatten)]
    pub other_counts: BTreeMap<String, serde_json::Value>,
}

impl TabBarData {
    pub fn with_trace_count(trace_count: u64) -> Self {
        Self {
            trace_count,
            other_counts: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_bar_data_keeps_extra_counts() {
        let data: TabBarData =
            serde_json::from_str(r#"{"traceCount":42,"profileSampleCount":7}"#).unwrap();
        assert_eq!(data.trace_count, 42);
        assert_eq!(
            data.other_counts.get("profileSampleCount"),
            Some(&serde_json::json!(7))
        );
    }

    #[test]
    fn test_query_omits_missing_transaction_name() {
        let query = TabBarQuery {
            from: 1,
            to: 2,
            transaction_type: "Web".to_string(),
            transaction_name: None,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from": 1, "to": 2, "transactionType": "Web"})
        );
    }
}
