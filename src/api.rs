//! Backend API Client
//!
//! gloo-net wrappers over the four task endpoints. Every call carries a
//! bearer token; non-2xx responses and transport failures surface as
//! `ApiError` for the caller to translate into a user-visible message.

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{CreateResponse, NewTask, Task, TaskUpdate, UpdateResponse};

/// Fixed backend endpoint. Override at compile time with TODO_API_BASE.
pub const API_BASE: &str = match option_env!("TODO_API_BASE") {
    Some(url) => url,
    None => "https://dl5xikhk88.execute-api.ca-central-1.amazonaws.com/production",
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn list_tasks(token: &str) -> Result<Vec<Task>, ApiError> {
    let resp = Request::get(&format!("{API_BASE}/tasks"))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn create_task(token: &str, task: &NewTask<'_>) -> Result<CreateResponse, ApiError> {
    let resp = Request::post(&format!("{API_BASE}/tasks"))
        .header("Authorization", &bearer(token))
        .json(task)?
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn update_task(token: &str, id: &str, update: &TaskUpdate) -> Result<UpdateResponse, ApiError> {
    let resp = Request::put(&format!("{API_BASE}/tasks/{id}"))
        .header("Authorization", &bearer(token))
        .json(update)?
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn delete_task(token: &str, id: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("{API_BASE}/tasks/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    // Response body unused.
    Ok(())
}
