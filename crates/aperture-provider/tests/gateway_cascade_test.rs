//! End-to-end cascade tests: gateway + real HTTP backend against a stub
//! provider. Complements the in-crate gateway unit tests by exercising the
//! cascade over the actual wire protocol, including timeout isolation.

use std::time::{Duration, Instant};

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aperture_core::{AssetQuery, Strategy};
use aperture_provider::{AssetGateway, CloudinaryBackend, ProviderConfig};

fn gateway_for(server: &MockServer, timeout: Duration) -> AssetGateway<CloudinaryBackend> {
    let config = ProviderConfig::new("demo", "key", "secret")
        .with_api_base(server.uri())
        .with_call_timeout(timeout);
    AssetGateway::new(CloudinaryBackend::new(config).expect("backend construction"))
}

fn resources_body(ids: &[&str]) -> serde_json::Value {
    let resources: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "public_id": id,
                "secure_url": format!("https://res.example.com/{}.jpg", id),
                "created_at": "2025-11-02T08:15:00Z"
            })
        })
        .collect();
    serde_json::json!({ "resources": resources })
}

#[tokio::test]
async fn test_primary_variant_served_over_the_wire() {
    let server = MockServer::start().await;

    // Variant A answers; the listing endpoint must never be hit.
    Mock::given(method("POST"))
        .and(path("/demo/resources/search"))
        .and(body_partial_json(serde_json::json!({
            "expression": "resource_type:image AND type:upload AND folder:landscape"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(resources_body(&["landscape/dawn"])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/demo/resources/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resources_body(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Duration::from_secs(10));
    let result = gateway
        .retrieve(&AssetQuery::new(Some("landscape"), None))
        .await
        .unwrap();

    assert_eq!(result.strategy, Strategy::SearchPrimary);
    assert_eq!(result.count, 1);
}

#[tokio::test]
async fn test_search_outage_falls_back_to_listing() {
    let server = MockServer::start().await;

    // Search tier disabled on this account: every expression fails.
    Mock::given(method("POST"))
        .and(path("/demo/resources/search"))
        .respond_with(ResponseTemplate::new(420).set_body_string("search not enabled"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/demo/resources/image/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(resources_body(&["Portraits/a", "Portraits/b"])),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Duration::from_secs(10));
    let result = gateway
        .retrieve(&AssetQuery::new(Some("Portraits"), None))
        .await
        .unwrap();

    assert_eq!(result.strategy, Strategy::ListingFallback);
    assert_eq!(result.count, 2);

    // All three expression variants were attempted before the fallback.
    let searches = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/demo/resources/search")
        .count();
    assert_eq!(searches, 3);
}

#[tokio::test]
async fn test_hanging_search_does_not_block_cascade() {
    let server = MockServer::start().await;

    // Every search call hangs past the configured timeout; the listing
    // responds immediately. The cascade must complete within
    // variants × (timeout + epsilon), not wait out the hang.
    Mock::given(method("POST"))
        .and(path("/demo/resources/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(resources_body(&["landscape/late"]))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/demo/resources/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resources_body(&["landscape/a"])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Duration::from_millis(200));
    let start = Instant::now();
    let result = gateway
        .retrieve(&AssetQuery::new(Some("landscape"), None))
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(result.strategy, Strategy::ListingFallback);
    assert!(
        elapsed < Duration::from_secs(3),
        "cascade took {:?}, timed-out variants should be abandoned",
        elapsed
    );
}
