//! End-to-end command tests against a mock directory API
use roster_cli::{commands, CliError, OutputFormat, RenderedList, RosterConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(mock_server: &MockServer) -> RosterConfig {
    let mut config = RosterConfig::default();
    config.api.base_url = mock_server.uri();
    config
}

async fn mock_users(mock_server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_users_list_output() {
    let mock_server = MockServer::start().await;
    mock_users(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Leanne Graham" },
            { "id": 2, "name": "Ervin Howell" }
        ])),
    )
    .await;

    let mut out = Vec::new();
    let count = commands::users(&config_for(&mock_server), OutputFormat::List, &mut out)
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Users:\n  - Leanne Graham\n  - Ervin Howell\n"
    );
}

#[tokio::test]
async fn test_users_json_output() {
    let mock_server = MockServer::start().await;
    mock_users(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!([{ "name": "Alice" }, { "id": 2 }])),
    )
    .await;

    let mut config = config_for(&mock_server);
    config.container.id = "Members".to_string();

    let mut out = Vec::new();
    let count = commands::users(&config, OutputFormat::Json, &mut out)
        .await
        .unwrap();

    assert_eq!(count, 2);

    let list: RenderedList = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        list,
        RenderedList {
            container: "Members".to_string(),
            items: vec!["Alice".to_string(), String::new()],
        }
    );
}

#[tokio::test]
async fn test_users_server_error_writes_nothing() {
    let mock_server = MockServer::start().await;
    mock_users(&mock_server, ResponseTemplate::new(500)).await;

    let mut out = Vec::new();
    let result = commands::users(&config_for(&mock_server), OutputFormat::List, &mut out).await;

    match result.unwrap_err() {
        CliError::Client(e) => assert_eq!(e.status(), Some(500)),
        e => panic!("Expected Client error, got: {:?}", e),
    }
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_users_empty_list_writes_heading() {
    let mock_server = MockServer::start().await;
    mock_users(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([])),
    )
    .await;

    let mut out = Vec::new();
    let count = commands::users(&config_for(&mock_server), OutputFormat::List, &mut out)
        .await
        .unwrap();

    assert_eq!(count, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "Users:\n");
}

#[tokio::test]
async fn test_users_json_error_writes_nothing() {
    let mock_server = MockServer::start().await;
    mock_users(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;

    let mut out = Vec::new();
    let result = commands::users(&config_for(&mock_server), OutputFormat::Json, &mut out).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_todo_output() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "userId": 1,
            "id": 1,
            "title": "delectus aut autem",
            "completed": false
        })))
        .mount(&mock_server)
        .await;

    let mut out = Vec::new();
    let todo = commands::todo(&config_for(&mock_server), 1, &mut out)
        .await
        .unwrap();

    assert_eq!(todo.title, "delectus aut autem");

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed["userId"], 1);
    assert_eq!(printed["title"], "delectus aut autem");
}

#[tokio::test]
async fn test_invalid_base_url_rejected() {
    let mut config = RosterConfig::default();
    config.api.base_url = "ftp://example.com".to_string();

    let mut out = Vec::new();
    let result = commands::users(&config, OutputFormat::List, &mut out).await;

    assert!(matches!(
        result,
        Err(CliError::Client(roster_client::ClientError::InvalidUrl(_)))
    ));
}
