// ABOUTME: Integration tests for NotesClient against a mock NoteHub server
// ABOUTME: Covers auth header, query param shaping, and status-to-error mapping

use notehub_client::{ClientConfig, NoteDraft, NoteError, NoteTag, NotesClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NotesClient {
    NotesClient::new(ClientConfig::new(server.uri(), "test-token")).unwrap()
}

fn note_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": "",
        "tag": "Todo",
        "createdAt": "2024-03-01T10:00:00Z",
        "updatedAt": "2024-03-01T10:00:00Z"
    })
}

#[tokio::test]
async fn list_notes_sends_bearer_and_paging_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("page", "1"))
        .and(query_param("perPage", "12"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notes": [note_json("n1", "First note")],
            "total": 1,
            "page": 1,
            "perPage": 12,
            "totalPages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).list_notes(1, 12, None).await.unwrap();
    assert_eq!(resp.notes.len(), 1);
    assert_eq!(resp.notes[0].title, "First note");
    assert_eq!(resp.total_pages, 1);
}

#[tokio::test]
async fn list_notes_trims_search_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param("search", "groceries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notes": [],
            "total": 0,
            "page": 1,
            "perPage": 12,
            "totalPages": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .list_notes(1, 12, Some("  groceries  "))
        .await
        .unwrap();
    assert!(resp.notes.is_empty());
}

#[tokio::test]
async fn list_notes_omits_blank_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notes": [],
            "total": 0,
            "page": 1,
            "perPage": 12,
            "totalPages": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .list_notes(1, 12, Some("   "))
        .await
        .unwrap();
}

#[tokio::test]
async fn list_notes_maps_server_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_notes(1, 12, None).await.unwrap_err();
    match err {
        NoteError::Transport { status, message } => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "boom");
        }
        other => panic!("expected Transport, got {:?}", other),
    }
}

#[tokio::test]
async fn create_note_posts_draft_and_parses_note() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({"title": "Buy milk", "tag": "Shopping"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(note_json("n9", "Buy milk")))
        .expect(1)
        .mount(&server)
        .await;

    let draft = NoteDraft::new("Buy milk", None, NoteTag::Shopping);
    let note = client_for(&server).create_note(&draft).await.unwrap();
    assert_eq!(note.id, "n9");
}

#[tokio::test]
async fn create_note_invalid_draft_never_hits_network() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and fail the strict check below
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(note_json("n1", "Hi")))
        .expect(0)
        .mount(&server)
        .await;

    let draft = NoteDraft::new("Hi", None, NoteTag::Todo);
    let err = client_for(&server).create_note(&draft).await.unwrap_err();
    assert!(matches!(err, NoteError::Validation(_)));
}

#[tokio::test]
async fn create_note_maps_server_rejection_to_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(400).set_body_string("tag is required"))
        .mount(&server)
        .await;

    let draft = NoteDraft::new("Valid title", None, NoteTag::Work);
    let err = client_for(&server).create_note(&draft).await.unwrap_err();
    assert!(matches!(err, NoteError::Validation(ref msg) if msg.contains("tag is required")));
}

#[tokio::test]
async fn delete_note_echoes_deleted_note() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/n3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json("n3", "Old note")))
        .expect(1)
        .mount(&server)
        .await;

    let note = client_for(&server).delete_note("n3").await.unwrap();
    assert_eq!(note.id, "n3");
}

#[tokio::test]
async fn delete_note_missing_id_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_note("ghost").await.unwrap_err();
    assert!(matches!(err, NoteError::NotFound(ref id) if id == "ghost"));
}

#[tokio::test]
async fn malformed_list_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).list_notes(1, 12, None).await.unwrap_err();
    assert!(matches!(err, NoteError::InvalidResponse(_)));
}
