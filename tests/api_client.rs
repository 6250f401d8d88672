#![cfg(feature = "ssr")]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use comment_board::api::{ApiClient, CommentRepository};
use comment_board::error::ApiError;
use comment_board::models::{
    Comment, CommentId, CommentPage, CommentPatch, NewComment, Reaction, ReactionOutcome,
    ToggleReactionRequest,
};
use comment_board::view_model::{CommentList, ReactionButton, ReactionMachine};

#[derive(Default)]
struct Board {
    comments: Vec<Comment>,
    next_id: CommentId,
    toggles: Vec<(CommentId, ToggleReactionRequest)>,
}

type Shared = Arc<Mutex<Board>>;

impl Board {
    fn with_comments(likes: &[i64]) -> Shared {
        let mut board = Board::default();
        for likes in likes {
            board.insert(NewComment {
                likes: *likes,
                ..NewComment::new("Seed", "seeded")
            });
        }
        Arc::new(Mutex::new(board))
    }

    fn insert(&mut self, new: NewComment) -> Comment {
        self.next_id += 1;
        let comment = Comment {
            id: self.next_id,
            author: new.author,
            text: new.text,
            date: "2024-01-05T15:04:00Z".to_string(),
            likes: new.likes,
            image: new.image,
        };
        self.comments.push(comment.clone());
        comment
    }

    fn find(&mut self, id: CommentId) -> Result<&mut Comment, StatusCode> {
        self.comments
            .iter_mut()
            .find(|x| x.id == id)
            .ok_or(StatusCode::NOT_FOUND)
    }
}

async fn list(State(board): State<Shared>) -> Json<CommentPage> {
    let board = board.lock().unwrap();
    Json(CommentPage {
        count: board.comments.len() as u64,
        next: None,
        previous: None,
        results: board.comments.clone(),
    })
}

async fn create(
    State(board): State<Shared>,
    Json(new): Json<NewComment>,
) -> (StatusCode, Json<Comment>) {
    let comment = board.lock().unwrap().insert(new);
    (StatusCode::CREATED, Json(comment))
}

async fn fetch(
    State(board): State<Shared>,
    Path(id): Path<CommentId>,
) -> Result<Json<Comment>, StatusCode> {
    let mut board = board.lock().unwrap();
    let comment = board.find(id)?;
    Ok(Json(comment.clone()))
}

async fn update(
    State(board): State<Shared>,
    Path(id): Path<CommentId>,
    Json(patch): Json<CommentPatch>,
) -> Result<Json<Comment>, StatusCode> {
    let mut board = board.lock().unwrap();
    let comment = board.find(id)?;
    if let Some(text) = patch.text {
        comment.text = text;
    }
    Ok(Json(comment.clone()))
}

async fn remove(State(board): State<Shared>, Path(id): Path<CommentId>) -> StatusCode {
    let mut board = board.lock().unwrap();
    let before = board.comments.len();
    board.comments.retain(|x| x.id != id);
    if board.comments.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

fn delta(action: Reaction, previous: Reaction) -> i64 {
    use Reaction::*;
    match (action, previous) {
        (Like, Dislike) => 2,
        (Like, Neutral) => 1,
        (Dislike, Like) => -2,
        (Dislike, Neutral) => -1,
        (Neutral, Like) => -1,
        (Neutral, Dislike) => 1,
        _ => 0,
    }
}

async fn toggle(
    State(board): State<Shared>,
    Path(id): Path<CommentId>,
    Json(request): Json<ToggleReactionRequest>,
) -> Result<Json<ReactionOutcome>, StatusCode> {
    let mut board = board.lock().unwrap();
    board.toggles.push((id, request));
    let comment = board.find(id)?;
    comment.likes += delta(request.action, request.previous_action);
    Ok(Json(ReactionOutcome {
        comment: comment.clone(),
        applied: request.action,
        likes: comment.likes,
    }))
}

fn serve(app: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });
    ApiClient::new(&format!("http://{addr}/api/"))
}

fn spawn_board(board: Shared) -> ApiClient {
    serve(
        Router::new()
            .route("/api/comments/", get(list).post(create))
            .route(
                "/api/comments/:id/",
                get(fetch).patch(update).delete(remove),
            )
            .route("/api/comments/:id/toggle-like/", post(toggle))
            .with_state(board),
    )
}

#[tokio::test]
async fn lists_and_fetches_comments() {
    let api = spawn_board(Board::with_comments(&[2, 5, 0, 1]));

    let page = api.list_comments().await.unwrap();
    assert_eq!(page.count, 4);
    assert_eq!(
        page.results.iter().map(|x| x.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );

    let comment = api.get_comment(2).await.unwrap();
    assert_eq!(comment.likes, 5);
}

#[tokio::test]
async fn missing_comment_is_not_found() {
    let api = spawn_board(Board::with_comments(&[]));

    assert_eq!(api.get_comment(7).await, Err(ApiError::NotFound(7)));
    assert_eq!(api.delete_comment(7).await, Err(ApiError::NotFound(7)));
    assert_eq!(
        api.update_comment(7, &CommentPatch::text("x")).await,
        Err(ApiError::NotFound(7))
    );
}

#[tokio::test]
async fn create_update_delete() {
    let board = Board::with_comments(&[]);
    let api = spawn_board(board.clone());

    let created = api
        .create_comment(&NewComment::new("Admin", "first"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.author, "Admin");
    assert_eq!(created.likes, 0);
    assert!(!created.date.is_empty());

    let updated = api
        .update_comment(created.id, &CommentPatch::text("edited"))
        .await
        .unwrap();
    assert_eq!(updated.text, "edited");
    assert_eq!(updated.author, "Admin");

    api.delete_comment(created.id).await.unwrap();
    assert!(board.lock().unwrap().comments.is_empty());
}

#[tokio::test]
async fn toggle_sends_previous_action() {
    let board = Board::with_comments(&[2]);
    let api = spawn_board(board.clone());
    let mut list = CommentList::new();
    let ticket = list.begin_refresh();
    list.finish_refresh(ticket, api.list_comments().await);

    let mut machine = ReactionMachine::default();
    for button in [ReactionButton::Like, ReactionButton::Dislike, ReactionButton::Dislike] {
        let toggle = machine.press(button).unwrap();
        let outcome = api
            .toggle_reaction(1, toggle.target, toggle.previous)
            .await
            .unwrap();
        assert_eq!(outcome.applied, toggle.target);
        machine.complete();
        list.set_likes(1, outcome.likes);
    }

    assert_eq!(machine.state(), Reaction::Neutral);
    // +1, -2, +1
    assert_eq!(list.get(1).map(|x| x.likes), Some(2));

    let sent: Vec<_> = board
        .lock()
        .unwrap()
        .toggles
        .iter()
        .map(|(id, x)| (*id, x.action, x.previous_action))
        .collect();
    assert_eq!(
        sent,
        vec![
            (1, Reaction::Like, Reaction::Neutral),
            (1, Reaction::Dislike, Reaction::Like),
            (1, Reaction::Neutral, Reaction::Dislike),
        ]
    );
}

#[tokio::test]
async fn failed_toggle_leaves_state_and_likes() {
    let api = spawn_board(Board::with_comments(&[3]));
    let mut list = CommentList::new();
    let ticket = list.begin_refresh();
    list.finish_refresh(ticket, api.list_comments().await);

    let mut machine = ReactionMachine::default();
    let toggle = machine.press(ReactionButton::Like).unwrap();
    let result = api.toggle_reaction(99, toggle.target, toggle.previous).await;
    assert_eq!(result, Err(ApiError::NotFound(99)));
    machine.abandon();

    assert_eq!(machine.state(), Reaction::Neutral);
    assert_eq!(list.get(1).map(|x| x.likes), Some(3));
}

#[tokio::test]
async fn server_errors_surface_as_network_errors() {
    let api = serve(Router::new().route(
        "/api/comments/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ));

    let err = api.list_comments().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "boom".to_string()
        }
    );
    assert!(err.is_network());

    let mut list = CommentList::new();
    let ticket = list.begin_refresh();
    list.finish_refresh(ticket, Err(err));
    assert_eq!(list.error(), Some("Failed to load comments"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let api = serve(Router::new().route("/api/comments/", get(|| async { "not json" })));

    let err = api.list_comments().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = ApiClient::new(&format!("http://127.0.0.1:{port}/api"));

    let err = api.list_comments().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "{err:?}");
}
