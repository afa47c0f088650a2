use std::sync::Arc;
use std::time::Duration;

use atlas::data::{GraphQlClient, GraphQlCountryRepository};
use atlas::domain::{CountryRepository, ErrorKind, SearchCountries, UseCases};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> GraphQlClient {
    GraphQlClient::new(
        format!("{}/graphql", server.uri()),
        "CountriesApp/1.0",
        Duration::from_secs(5),
    )
    .unwrap()
}

fn repository_for(server: &MockServer) -> GraphQlCountryRepository {
    GraphQlCountryRepository::new(client_for(server))
}

fn countries_payload() -> Value {
    json!({
        "data": {
            "countries": [
                {
                    "code": "FR",
                    "name": "France",
                    "capital": "Paris",
                    "emoji": "🇫🇷",
                    "continent": { "code": "EU", "name": "Europe" },
                    "languages": [{ "code": "fr", "name": "French" }]
                },
                {
                    "code": "GB",
                    "name": "United Kingdom",
                    "capital": "London",
                    "emoji": "🇬🇧",
                    "continent": { "code": "EU", "name": "Europe" },
                    "languages": [{ "code": "en", "name": "English" }]
                },
                {
                    "code": "US",
                    "name": "United States",
                    "capital": "Washington D.C.",
                    "emoji": "🇺🇸",
                    "continent": { "code": "NA", "name": "North America" },
                    "languages": [{ "code": "en", "name": "English" }]
                },
                {
                    "code": "AQ",
                    "name": "Antarctica",
                    "capital": null,
                    "emoji": "🇦🇶",
                    "continent": { "code": "AN", "name": "Antarctica" },
                    "languages": []
                }
            ]
        }
    })
}

fn france_payload() -> Value {
    json!({
        "data": {
            "country": {
                "code": "FR",
                "name": "France",
                "native": "France",
                "capital": "Paris",
                "emoji": "🇫🇷",
                "emojiU": "U+1F1EB U+1F1F7",
                "currency": "EUR",
                "currencies": ["EUR"],
                "phone": "33",
                "phones": ["33"],
                "awsRegion": "eu-west-3",
                "continent": { "code": "EU", "name": "Europe" },
                "languages": [{ "code": "fr", "name": "French", "native": "Français", "rtl": false }]
            }
        }
    })
}

async fn mount_countries(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("query Countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_payload()))
        .mount(server)
        .await;
}

// ============================================================================
// Transport Tests
// ============================================================================

#[tokio::test]
async fn test_request_carries_json_headers_and_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "CountriesApp/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let countries = repository_for(&mock_server).get_countries().await.unwrap();
    assert_eq!(countries.len(), 4);
}

#[tokio::test]
async fn test_http_error_maps_to_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let err = repository_for(&mock_server).get_countries().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.to_string(), "HTTP error: 503 - upstream down");
}

#[tokio::test]
async fn test_graphql_errors_map_to_protocol() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Syntax error" }, { "message": "Unknown field" }]
        })))
        .mount(&mock_server)
        .await;

    let err = repository_for(&mock_server).get_countries().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
    assert_eq!(err.to_string(), "Syntax error, Unknown field");
}

#[tokio::test]
async fn test_missing_data_maps_to_protocol() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let err = repository_for(&mock_server).get_countries().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
    assert_eq!(err.to_string(), "No data received from server");
}

#[tokio::test]
async fn test_malformed_body_maps_to_protocol() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let err = repository_for(&mock_server).get_countries().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = GraphQlClient::new(
        format!("http://{address}/graphql"),
        "CountriesApp/1.0",
        Duration::from_secs(5),
    )
    .unwrap();
    let repository = GraphQlCountryRepository::new(client);

    let err = repository.get_countries().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().starts_with("Network error"));
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_get_countries_maps_wire_fields() {
    let mock_server = MockServer::start().await;
    mount_countries(&mock_server).await;

    let countries = repository_for(&mock_server).get_countries().await.unwrap();

    let france = &countries[0];
    assert_eq!(france.code, "FR");
    assert_eq!(france.capital.as_deref(), Some("Paris"));
    assert_eq!(france.continent.name, "Europe");
    assert_eq!(france.languages[0].name, "French");
    assert!(!countries[3].has_capital());
}

#[tokio::test]
async fn test_get_country_details_sends_uppercased_code() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query Country("))
        .and(body_string_contains(r#""code":"FR""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(france_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let france = repository_for(&mock_server)
        .get_country_details("fr")
        .await
        .unwrap();

    assert_eq!(france.name, "France");
    assert_eq!(france.primary_currency(), Some("EUR"));
    assert_eq!(france.primary_phone(), Some("33"));
    assert_eq!(france.emoji_u.as_deref(), Some("U+1F1EB U+1F1F7"));
    assert_eq!(france.aws_region.as_deref(), Some("eu-west-3"));
    assert_eq!(france.languages[0].native.as_deref(), Some("Français"));
}

#[tokio::test]
async fn test_null_country_maps_to_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "country": null } })),
        )
        .mount(&mock_server)
        .await;

    let err = repository_for(&mock_server)
        .get_country_details("ZZ")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Country with code 'ZZ' not found");
}

#[tokio::test]
async fn test_search_filters_by_name_code_and_capital() {
    let mock_server = MockServer::start().await;
    mount_countries(&mock_server).await;
    let repository = repository_for(&mock_server);

    let by_name: Vec<String> = repository
        .search_countries("united")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(by_name, vec!["GB", "US"]);

    let by_capital = repository.search_countries("LONDON").await.unwrap();
    assert_eq!(by_capital.len(), 1);
    assert_eq!(by_capital[0].code, "GB");

    let by_code = repository.search_countries("aq").await.unwrap();
    assert_eq!(by_code[0].name, "Antarctica");
}

#[tokio::test]
async fn test_blank_search_skips_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_payload()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let results = repository_for(&mock_server).search_countries("  ").await.unwrap();
    assert!(results.is_empty());
}

// ============================================================================
// Use Case Tests (over the real adapter)
// ============================================================================

#[tokio::test]
async fn test_use_case_wraps_transport_error_with_context() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let use_cases = UseCases::new(Arc::new(repository_for(&mock_server)));
    let err = use_cases
        .get_country_details
        .execute("fr")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(
        err.to_string(),
        "Failed to retrieve country details for 'fr': HTTP error: 500 - boom"
    );
}

#[tokio::test]
async fn test_search_use_case_trims_before_querying() {
    let mock_server = MockServer::start().await;
    mount_countries(&mock_server).await;

    let search = SearchCountries::new(Arc::new(repository_for(&mock_server)));
    let results = search.execute("  paris ").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].code, "FR");
}
