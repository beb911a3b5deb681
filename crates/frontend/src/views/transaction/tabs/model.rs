use crate::shared::api_utils::tab_bar_data_url;
use crate::shared::http::{get_json, HttpError, HttpTransport};
use crate::shared::query_strings;
use contracts::transaction::tab_bar::{TabBarData, TabBarQuery};

/// Where tab bar data comes from and how long changes settle before a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarEndpoint {
    pub base_path: String,
    pub service: String,
    pub debounce_ms: u32,
}

impl TabBarEndpoint {
    pub fn url(&self, query: &TabBarQuery) -> Result<String, HttpError> {
        let query_string =
            query_strings::encode_object(query).map_err(|e| HttpError::Decode(e.to_string()))?;
        Ok(tab_bar_data_url(&self.base_path, &self.service, &query_string))
    }
}

pub async fn fetch_tab_bar_data<H>(
    transport: &H,
    endpoint: &TabBarEndpoint,
    query: &TabBarQuery,
) -> Result<TabBarData, HttpError>
where
    H: HttpTransport + ?Sized,
{
    let url = endpoint.url(query)?;
    get_json(transport, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use crate::views::transaction::tabs::state::{TabBarState, TransactionTab};

    fn endpoint() -> TabBarEndpoint {
        TabBarEndpoint {
            base_path: "backend".to_string(),
            service: "transaction".to_string(),
            debounce_ms: 100,
        }
    }

    fn query(name: Option<&str>) -> TabBarQuery {
        TabBarQuery {
            from: 1,
            to: 2,
            transaction_type: "Web".to_string(),
            transaction_name: name.map(|n| n.to_string()),
        }
    }

    #[tokio::test]
    async fn test_fetch_encodes_filters() {
        let transport = MockTransport::new().respond_get(
            "backend/transaction/tab-bar-data?from=1&to=2&transactionName=x&transactionType=Web",
            200,
            r#"{"traceCount":12}"#,
        );
        let data = fetch_tab_bar_data(&transport, &endpoint(), &query(Some("x")))
            .await
            .unwrap();
        assert_eq!(data.trace_count, 12);
        assert_eq!(
            transport.requested(),
            vec!["GET backend/transaction/tab-bar-data?from=1&to=2&transactionName=x&transactionType=Web"]
        );
    }

    #[tokio::test]
    async fn test_fetch_without_server() {
        let transport = MockTransport::new();
        let result = fetch_tab_bar_data(&transport, &endpoint(), &query(None)).await;
        assert_eq!(result.unwrap_err(), HttpError::NoResponse);
    }

    #[tokio::test]
    async fn test_overlapping_fetches_apply_last_issued_only() {
        let transport = MockTransport::new()
            .respond_get(
                "backend/transaction/tab-bar-data?from=1&to=2&transactionName=a&transactionType=Web",
                200,
                r#"{"traceCount":1}"#,
            )
            .respond_get(
                "backend/transaction/tab-bar-data?from=1&to=2&transactionName=b&transactionType=Web",
                200,
                r#"{"traceCount":2}"#,
            );
        let mut state = TabBarState::new();

        let first = state.issue_ticket();
        let first_query = query(Some("a"));
        let second = state.issue_ticket();
        let second_query = query(Some("b"));

        // the newer request completes first, the older one straggles in afterwards
        let second_data = fetch_tab_bar_data(&transport, &endpoint(), &second_query)
            .await
            .unwrap();
        assert!(state.apply(second, second_data, TransactionTab::Overview));
        let first_data = fetch_tab_bar_data(&transport, &endpoint(), &first_query)
            .await
            .unwrap();
        assert!(!state.apply(first, first_data, TransactionTab::Overview));

        assert_eq!(state.trace_count(), "2");
    }
}
