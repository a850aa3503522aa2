//! In-memory rendition of the kanban todo service, for integration tests
//! and manual poking.
//!
//! Mirrors the remote service's observable contract: routes, status codes,
//! and the empty-list 404. The DELETE route is registered without a
//! separator (`/api/todo{id}`) because that is the form the client
//! actually sends.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TodoStatus {
    Todo,
    Doing,
    Done,
}

impl TodoStatus {
    fn advanced(self) -> Self {
        match self {
            Self::Todo => Self::Doing,
            _ => Self::Done,
        }
    }

    fn reversed(self) -> Self {
        match self {
            Self::Done => Self::Doing,
            _ => Self::Todo,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
}

/// Payload for POST /api/todo. The server assigns id and status, so any
/// extra fields the client sends are ignored.
#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
}

/// Payload for both PUT routes: only the id (status advance) or the id
/// plus new content (content update) are read.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Default)]
pub struct Store {
    todos: HashMap<u32, Todo>,
    next_id: u32,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(
            "/api/todo",
            get(list_todos).post(create_todo).put(update_content),
        )
        // The PUT variant reads the path segment as the advance flag (0/1),
        // not as a todo id.
        .route("/api/todo/{id}", get(get_todo).put(update_status))
        .route("/api/todo/query/{query}", get(search_todos))
        // Unseparated form, matching what the client sends.
        .route("/api/todo{id}", delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Result<Json<Vec<Todo>>, (StatusCode, String)> {
    let store = db.read().await;
    if store.todos.is_empty() {
        // The real service throws on an empty table.
        return Err((StatusCode::NOT_FOUND, "No Todos in Database yet".to_string()));
    }
    let mut todos: Vec<Todo> = store.todos.values().cloned().collect();
    todos.sort_by_key(|t| t.id);
    Ok(Json(todos))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Todo>, (StatusCode, String)> {
    let store = db.read().await;
    store
        .todos
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("No Todo with id {id} found")))
}

async fn search_todos(State(db): State<Db>, Path(query): Path<String>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let mut hits: Vec<Todo> = store
        .todos
        .values()
        .filter(|t| t.title.contains(&query) || t.description.contains(&query))
        .cloned()
        .collect();
    hits.sort_by_key(|t| t.id);
    Json(hits)
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), (StatusCode, String)> {
    if input.title.is_empty() || input.description.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "No title or description defined".to_string(),
        ));
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        title: input.title,
        description: input.description,
        status: TodoStatus::Todo,
    };
    store.todos.insert(todo.id, todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_status(
    State(db): State<Db>,
    Path(advance): Path<u8>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, (StatusCode, String)> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&input.id).ok_or((
        StatusCode::NOT_FOUND,
        format!("No Todo with id {} found", input.id),
    ))?;
    todo.status = if advance != 0 {
        todo.status.advanced()
    } else {
        todo.status.reversed()
    };
    Ok(Json(todo.clone()))
}

async fn update_content(
    State(db): State<Db>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, (StatusCode, String)> {
    if input.title.is_empty() || input.description.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "No title or description defined".to_string(),
        ));
    }
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&input.id).ok_or((
        StatusCode::NOT_FOUND,
        format!("No Todo with id {} found", input.id),
    ))?;
    todo.title = input.title;
    todo.description = input.description;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut store = db.write().await;
    store
        .todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or((StatusCode::NOT_FOUND, format!("No Todo with id {id} found")))
}
