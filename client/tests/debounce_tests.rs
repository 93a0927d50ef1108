//! Debounced browse fetch tests
//!
//! These run on real time with short delays; the mock server answers on its
//! own runtime.

use std::time::Duration;

use reviewhub_client::debounce::{DebouncedFetch, FilterDebouncer};
use reviewhub_client::{Gateway, Store};
use serde_json::json;
use shared::{view, BusinessFilters};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DELAY: Duration = Duration::from_millis(100);

fn page_with(id: u64, city: &str) -> serde_json::Value {
    json!({
        "Businesses": [{ "id": id, "ownerId": 1, "name": format!("In {}", city), "city": city }],
        "page": 1,
        "size": 20
    })
}

async fn setup() -> (MockServer, Gateway) {
    let server = MockServer::start().await;
    let gateway = assert_ok!(Gateway::new(server.uri(), Store::new()));
    (server, gateway)
}

async fn requests_to(server: &MockServer, city: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| {
            request
                .url
                .query_pairs()
                .any(|(key, value)| key == "city" && value == city)
        })
        .count()
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[tokio::test]
    async fn test_quick_changes_issue_one_request() {
        let (server, gateway) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/businesses"))
            .and(query_param("city", "Boston"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_with(2, "Boston")))
            .expect(1)
            .mount(&server)
            .await;

        let debouncer = FilterDebouncer::new(gateway.clone(), DELAY);
        let first = debouncer.schedule(BusinessFilters::default().with_city("Austin"));
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = debouncer.schedule(BusinessFilters::default().with_city("Boston"));

        let first = assert_ok!(first.await.expect("task joined"));
        let second = assert_ok!(second.await.expect("task joined"));

        assert_eq!(first, DebouncedFetch::Superseded);
        assert!(matches!(second, DebouncedFetch::Applied(_)));
        assert_eq!(requests_to(&server, "Austin").await, 0);

        let state = gateway.store().state();
        let ids: Vec<u64> = view::browse_list(&state).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_superseded_in_flight_result_is_discarded() {
        let (server, gateway) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/businesses"))
            .and(query_param("city", "Austin"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page_with(1, "Austin"))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/businesses"))
            .and(query_param("city", "Boston"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_with(2, "Boston")))
            .expect(1)
            .mount(&server)
            .await;

        let debouncer = FilterDebouncer::new(gateway.clone(), Duration::from_millis(10));
        let slow = debouncer.schedule(BusinessFilters::default().with_city("Austin"));
        // Let the first request go out before changing filters
        tokio::time::sleep(Duration::from_millis(100)).await;
        let fast = debouncer.schedule(BusinessFilters::default().with_city("Boston"));

        let fast = assert_ok!(fast.await.expect("task joined"));
        let slow = assert_ok!(slow.await.expect("task joined"));

        assert!(matches!(fast, DebouncedFetch::Applied(_)));
        assert_eq!(slow, DebouncedFetch::Superseded);

        let state = gateway.store().state();
        let ids: Vec<u64> = view::browse_list(&state).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_cancel_prevents_pending_request() {
        let (server, gateway) = setup().await;

        let debouncer = FilterDebouncer::new(gateway.clone(), DELAY);
        let pending = debouncer.schedule(BusinessFilters::default());
        debouncer.cancel();

        let outcome = assert_ok!(pending.await.expect("task joined"));
        assert_eq!(outcome, DebouncedFetch::Superseded);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
        assert!(gateway.store().state().businesses.browse.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_fetch_reports_errors() {
        let (server, gateway) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/businesses"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": { "minRating": "Minimum rating must be between 1 and 5" }
            })))
            .mount(&server)
            .await;

        let debouncer = FilterDebouncer::new(gateway.clone(), Duration::from_millis(10));
        let outcome = assert_ok!(debouncer
            .schedule(BusinessFilters::default().with_min_rating(9.0))
            .await
            .expect("task joined"));

        match outcome {
            DebouncedFetch::Rejected(errors) => assert!(errors.contains("minRating")),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stale_page_is_not_applied_under_lock() {
        let (_server, gateway) = setup().await;

        let page: shared::BusinessPage = serde_json::from_value(page_with(1, "Austin")).unwrap();
        assert!(!gateway.apply_page_if(&page, || false));
        assert!(gateway.store().state().businesses.browse.is_empty());

        assert!(gateway.apply_page_if(&page, || true));
        assert!(gateway.store().state().businesses.browse.contains_key(&1));
    }
}
