//! Successful fetches and validation failures surfaced through `get_specs`

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use kernelspecs_core::{get_specs, KernelSpecClient, ServerSettings, ValidationError};
use tests::fixtures::{argv_as_string, document, python_with_extras, well_formed};
use tests::{init_test_tracing, MockKernelServer};

#[tokio::test]
async fn test_fetch_valid_document() {
    init_test_tracing();
    let mock = MockKernelServer::start().await;
    mock.respond_json(
        200,
        document(
            Some("python3"),
            vec![("python3", python_with_extras()), ("R", argv_as_string("R"))],
        ),
    )
    .await;

    let specs = get_specs(Some(&mock.settings())).await.unwrap();

    assert_eq!(specs.default_name(), Some("python3"));
    assert_eq!(specs.names().collect::<Vec<_>>(), vec!["python3"]);
    assert_eq!(
        specs.default_spec().unwrap().display_name,
        "Python 3 (ipykernel)"
    );
}

#[tokio::test]
async fn test_fetch_surfaces_missing_kernelspecs() {
    let mock = MockKernelServer::start().await;
    mock.respond_json(200, json!({"default": "python"})).await;

    let err = get_specs(Some(&mock.settings())).await.unwrap_err();

    assert_eq!(err.validation(), Some(ValidationError::MissingKernelspecs));
    assert_eq!(err.to_string(), "No kernelspecs found");
}

#[tokio::test]
async fn test_fetch_surfaces_no_valid_kernelspecs() {
    let mock = MockKernelServer::start().await;
    mock.respond_json(200, document(Some("R"), vec![("R", argv_as_string("R"))]))
        .await;

    let err = get_specs(Some(&mock.settings())).await.unwrap_err();

    assert_eq!(err.validation(), Some(ValidationError::NoValidKernelspecs));
    assert_eq!(err.to_string(), "No valid kernelspecs found");
}

#[tokio::test]
async fn test_token_sent_as_authorization_header() {
    let mock = MockKernelServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/kernelspecs"))
        .and(header("authorization", "token s3cret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(document(None, vec![("python", well_formed("python"))])),
        )
        .expect(1)
        .mount(&mock.server)
        .await;

    let settings = mock.settings().with_token("s3cret");
    let specs = get_specs(Some(&settings)).await.unwrap();

    assert!(specs.contains("python"));
}

#[tokio::test]
async fn test_base_path_preserved() {
    let mock = MockKernelServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/alice/api/kernelspecs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(document(None, vec![("python", well_formed("python"))])),
        )
        .expect(1)
        .mount(&mock.server)
        .await;

    let settings = ServerSettings::new(format!("{}/user/alice", mock.server.uri()));
    let specs = get_specs(Some(&settings)).await.unwrap();

    assert_eq!(specs.len(), 1);
}

#[tokio::test]
async fn test_client_calls_are_independent() {
    let mock = MockKernelServer::start().await;
    mock.respond_json(
        200,
        document(Some("ir"), vec![("ir", well_formed("ir")), ("julia", well_formed("julia"))]),
    )
    .await;

    let client = KernelSpecClient::new(mock.settings()).unwrap();
    let (first, second) = tokio::join!(client.fetch_specs(), client.fetch_specs());

    assert_eq!(first.unwrap(), second.unwrap());
}
