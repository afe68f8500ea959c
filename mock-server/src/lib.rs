//! In-process user-directory API used by the core integration tests.
//!
//! Mirrors the surface of a typical paged REST user service: list users with
//! a `page` query parameter, fetch a user by id (404 when unknown), create a
//! user with a JSON body (201 echoing the payload), plus an `/api/echo` route
//! that reports exactly what the server received so tests can observe the
//! wire format of a request body.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub data: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub job: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedUser {
    pub name: String,
    pub job: String,
    pub id: Uuid,
    pub created_at: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Echo {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

const PER_PAGE: u32 = 2;

fn directory() -> Vec<User> {
    let names = [
        ("George", "Bluth", "george.bluth@example.com"),
        ("Janet", "Weaver", "janet.weaver@example.com"),
        ("Emma", "Wong", "emma.wong@example.com"),
        ("Eve", "Holt", "eve.holt@example.com"),
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, (first, last, email))| User {
            id: i as u32 + 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        })
        .collect()
}

pub fn app() -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
        .route("/api/echo", post(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(Query(pagination): Query<Pagination>) -> Json<UserPage> {
    let all = directory();
    let total = all.len() as u32;
    let start = (pagination.page.saturating_sub(1) * PER_PAGE) as usize;
    let data = all.into_iter().skip(start).take(PER_PAGE as usize).collect();
    Json(UserPage {
        page: pagination.page,
        per_page: PER_PAGE,
        total,
        data,
    })
}

async fn get_user(Path(id): Path<u32>) -> Result<Json<User>, StatusCode> {
    directory()
        .into_iter()
        .find(|user| user.id == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_user(Json(input): Json<CreateUser>) -> (StatusCode, Json<CreatedUser>) {
    let created = CreatedUser {
        name: input.name,
        job: input.job,
        id: Uuid::new_v4(),
        created_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
    };
    (StatusCode::CREATED, Json(created))
}

async fn echo(headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let content_type = headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    Json(Echo {
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
