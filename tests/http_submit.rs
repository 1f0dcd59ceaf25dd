//! End-to-end submit flow over real HTTP against a local stand-in auth service.

use std::cell::RefCell;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use auth_portal::config::ApiConfig;
use auth_portal::error::SubmitError;
use auth_portal::flow::{Navigator, submit_login, submit_registration};
use auth_portal::forms::login::{LoginDraft, LoginInput};
use auth_portal::forms::register::{RegisterDraft, RegistrationInput};
use auth_portal::net::api::HttpAuthApi;
use auth_portal::routes::AppRoute;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

type Seen = Arc<Mutex<Vec<(String, Value)>>>;

#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}

async fn accept_register(State(seen): State<Seen>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    seen.lock().unwrap().push(("/auth/register".to_owned(), body));
    (StatusCode::CREATED, Json(json!({ "id": 1 })))
}

async fn accept_login(State(seen): State<Seen>, Json(body): Json<Value>) -> &'static str {
    seen.lock().unwrap().push(("/auth/login".to_owned(), body));
    "welcome"
}

async fn reject_login(State(seen): State<Seen>, Json(body): Json<Value>) -> StatusCode {
    seen.lock().unwrap().push(("/auth/login".to_owned(), body));
    StatusCode::UNAUTHORIZED
}

async fn spawn_service(reject_logins: bool) -> (SocketAddr, Seen) {
    let seen: Seen = Arc::default();
    let login_route = if reject_logins { post(reject_login) } else { post(accept_login) };
    let app = Router::new()
        .route("/auth/register", post(accept_register))
        .route("/auth/login", login_route)
        .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, seen)
}

fn api_for(addr: SocketAddr) -> HttpAuthApi {
    HttpAuthApi::new(ApiConfig::new(&format!("http://{addr}/")))
}

fn registration() -> RegistrationInput {
    RegisterDraft {
        username: "elevenchars".to_owned(),
        age: "25".to_owned(),
        email: "a@b.co".to_owned(),
        phone: "0123456789".to_owned(),
        password: "abcdefg".to_owned(),
        confirm_password: "abcdefg".to_owned(),
        terms: true,
    }
    .validate()
    .into_result()
    .unwrap()
}

fn login() -> LoginInput {
    LoginDraft { phone: "0123456789".to_owned(), password: "abcdefg".to_owned() }
        .validate()
        .into_result()
        .unwrap()
}

#[tokio::test]
async fn registration_posts_wire_payload_and_navigates_to_login() {
    let (addr, seen) = spawn_service(false).await;
    let nav = RecordingNavigator::default();

    let route = submit_registration(&api_for(addr), &nav, &registration()).await.unwrap();

    assert_eq!(route, AppRoute::Login);
    assert_eq!(*nav.visited.borrow(), vec!["/login".to_owned()]);
    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![(
            "/auth/register".to_owned(),
            json!({
                "username": "elevenchars",
                "password": "abcdefg",
                "numberOfPhone": "0123456789",
                "age": 25,
                "email": "a@b.co",
            })
        )]
    );
}

#[tokio::test]
async fn login_accepts_plain_text_response() {
    let (addr, seen) = spawn_service(false).await;
    let nav = RecordingNavigator::default();

    let route = submit_login(&api_for(addr), &nav, &login()).await.unwrap();

    assert_eq!(route, AppRoute::Dashboard);
    assert_eq!(*nav.visited.borrow(), vec!["/dashboard".to_owned()]);
    assert_eq!(
        seen.lock().unwrap()[0],
        ("/auth/login".to_owned(), json!({ "password": "abcdefg", "numberOfPhone": "0123456789" }))
    );
}

#[tokio::test]
async fn rejected_login_reports_status_and_stays_put() {
    let (addr, seen) = spawn_service(true).await;
    let nav = RecordingNavigator::default();

    let err = submit_login(&api_for(addr), &nav, &login()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Status { status: 401 }), "got {err:?}");
    assert!(nav.visited.borrow().is_empty());
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let nav = RecordingNavigator::default();

    let err = submit_registration(&api_for(addr), &nav, &registration()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)), "got {err:?}");
    assert!(err.alert_message().starts_with("Під час надсилання даних сталася помилка: "));
    assert!(nav.visited.borrow().is_empty());
}
