use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use flock_client::{HubSession, PostsClient};
use flock_core::{
    FetchError, FixedIdentity, HubId, HubSelection, LoadOutcome, LoadState, PostsApi,
    SubmitError, SubmitOutcome, UserId,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

// Backend finto per /api/posts: i post vivono in memoria, per hub.
#[derive(Default)]
struct Backend {
    posts: Mutex<HashMap<i64, Vec<Value>>>,
    reads: Mutex<ReadMode>,
    reject_writes: Mutex<bool>,
    created: Mutex<Vec<CreateBody>>,
}

#[derive(Default, Clone, Copy)]
enum ReadMode {
    #[default]
    List,
    ServerError,
    NotAList,
}

#[derive(Debug, Clone, Deserialize)]
struct CreateBody {
    user_id: String,
    interest_id: i64,
    post_title: String,
    post_text: String,
}

impl Backend {
    fn seed(&self, hub: i64, post: Value) {
        self.posts.lock().unwrap().entry(hub).or_default().push(post);
    }
}

async fn list_posts(
    Extension(backend): Extension<Arc<Backend>>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mode = *backend.reads.lock().unwrap();
    match mode {
        ReadMode::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "db down" })))
        }
        ReadMode::NotAList => (StatusCode::OK, Json(json!({ "posts": [] }))),
        ReadMode::List => {
            let hub: i64 = params.get("interest_id").and_then(|s| s.parse().ok()).unwrap_or(-1);
            let posts = backend.posts.lock().unwrap().get(&hub).cloned().unwrap_or_default();
            // dal più recente, come il backend vero
            (StatusCode::OK, Json(Value::Array(posts.into_iter().rev().collect())))
        }
    }
}

async fn create_post(
    Extension(backend): Extension<Arc<Backend>>,
    Json(body): Json<CreateBody>,
) -> (StatusCode, Json<Value>) {
    if *backend.reject_writes.lock().unwrap() {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "db down" })));
    }
    let post = json!({
        "post_id": Uuid::new_v4().to_string(),
        "post_title": body.post_title,
        "post_text": body.post_text,
        "interest_id": body.interest_id,
    });
    backend.seed(body.interest_id, post.clone());
    backend.created.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({ "post": post })))
}

async fn spawn(backend: Arc<Backend>) -> String {
    let app = Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .layer(Extension(backend));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

fn hub(id: i64) -> HubSelection {
    HubSelection { hub_id: HubId(id), title: Some("Stamps".into()), color: Some("pink".into()) }
}

async fn session_for(
    backend: &Arc<Backend>,
    selection: HubSelection,
) -> HubSession<PostsClient, FixedIdentity> {
    let base = spawn(backend.clone()).await;
    let client = PostsClient::new(&base, None).expect("client");
    HubSession::new(client, FixedIdentity::new(UserId::placeholder()), selection)
}

// Test che verifica la normalizzazione dei commenti mancanti
#[tokio::test]
async fn load_fills_missing_comments() {
    let backend = Arc::new(Backend::default());
    backend.seed(4, json!({ "post_id": 1, "post_title": "Hello", "post_text": "first!" }));
    let mut session = session_for(&backend, hub(4)).await;

    let outcome = session.load().await;

    assert_eq!(outcome, LoadOutcome::Loaded { count: 1 });
    let post = &session.board().posts()[0];
    assert_eq!(post.post_id, "1");
    assert_eq!(post.title, "Hello");
    assert!(post.comments.is_empty());
}

#[tokio::test]
async fn loading_twice_gives_the_same_list() {
    let backend = Arc::new(Backend::default());
    backend.seed(4, json!({ "post_id": "a", "post_title": "A", "post_text": "x", "comments": ["c1"] }));
    backend.seed(4, json!({ "post_id": "b", "post_title": "B", "post_text": "y" }));
    let mut session = session_for(&backend, hub(4)).await;

    session.load().await;
    let first = session.board().posts().to_vec();
    session.load().await;

    assert_eq!(session.board().posts(), first.as_slice());
    assert_eq!(first[0].post_id, "b");
}

// Test che verifica che una risposta non-array svuoti la lista senza propagare errori
#[tokio::test]
async fn non_array_response_empties_the_board() {
    let backend = Arc::new(Backend::default());
    backend.seed(4, json!({ "post_id": "a", "post_title": "A", "post_text": "x" }));
    let mut session = session_for(&backend, hub(4)).await;
    session.load().await;
    assert_eq!(session.board().posts().len(), 1);

    *backend.reads.lock().unwrap() = ReadMode::NotAList;
    let outcome = session.load().await;

    assert_eq!(outcome, LoadOutcome::Failed(FetchError::NotAList));
    assert!(session.board().posts().is_empty());
}

#[tokio::test]
async fn server_error_on_read_is_reported_as_failed() {
    let backend = Arc::new(Backend::default());
    *backend.reads.lock().unwrap() = ReadMode::ServerError;
    let mut session = session_for(&backend, hub(4)).await;

    session.load().await;

    assert_eq!(
        session.board().state(),
        &LoadState::Failed(FetchError::Server { status: 500, message: "db down".into() })
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    // porta libera: il listener viene chiuso subito
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = PostsClient::new(&format!("http://{addr}"), None).expect("client");
    let result = client.fetch_posts(flock_core::ListPostsQuery { interest_id: HubId(4) }).await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn submit_prepends_the_echoed_post_and_clears_drafts() {
    let backend = Arc::new(Backend::default());
    backend.seed(4, json!({ "post_id": "old", "post_title": "Old", "post_text": "..." }));
    let mut session = session_for(&backend, hub(4)).await;
    session.load().await;

    session.board_mut().set_draft_title("T");
    session.board_mut().set_draft_body("B");
    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Created { shown: true, .. }));
    let board = session.board();
    assert_eq!(board.posts().len(), 2);
    assert_eq!(board.posts()[0].title, "T");
    assert_eq!(board.posts()[0].text, "B");
    assert_eq!(board.draft_title(), "");
    assert_eq!(board.draft_body(), "");

    let created = backend.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].user_id, UserId::placeholder().as_str());
    assert_eq!(created[0].interest_id, 4);
    assert_eq!((created[0].post_title.as_str(), created[0].post_text.as_str()), ("T", "B"));
}

// Test che verifica che un rifiuto del backend lasci lista e bozze invariate
#[tokio::test]
async fn rejected_submit_keeps_posts_and_drafts() {
    let backend = Arc::new(Backend::default());
    backend.seed(4, json!({ "post_id": "old", "post_title": "Old", "post_text": "..." }));
    *backend.reject_writes.lock().unwrap() = true;
    let mut session = session_for(&backend, hub(4)).await;
    session.load().await;

    session.board_mut().set_draft_title("T");
    session.board_mut().set_draft_body("B");
    let outcome = session.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            error: SubmitError::Rejected { status: 500, message: "db down".into() },
            alert: "Failed to create post",
        }
    );
    assert_eq!(session.board().posts().len(), 1);
    assert_eq!(session.board().draft_title(), "T");
    assert_eq!(session.board().draft_body(), "B");
}

#[tokio::test]
async fn anonymous_sessions_cannot_post() {
    let backend = Arc::new(Backend::default());
    let base = spawn(backend.clone()).await;
    let client = PostsClient::new(&base, None).expect("client");
    let mut session = HubSession::new(client, FixedIdentity::anonymous(), hub(4));

    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed { error: SubmitError::Unauthenticated, .. }));
    assert!(backend.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn navigate_switches_hub_posts() {
    let backend = Arc::new(Backend::default());
    backend.seed(4, json!({ "post_id": "four", "post_title": "4", "post_text": "" }));
    backend.seed(7, json!({ "post_id": "seven", "post_title": "7", "post_text": "" }));
    let mut session = session_for(&backend, hub(4)).await;
    session.load().await;

    assert!(session.navigate(hub(4)).await.is_none());
    let outcome = session.navigate(hub(7)).await;

    assert_eq!(outcome, Some(LoadOutcome::Loaded { count: 1 }));
    assert_eq!(session.board().posts()[0].post_id, "seven");
}
