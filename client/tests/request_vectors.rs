//! Verify the client's route table against JSON vectors in `test-vectors/`.
//!
//! Each vector names an operation and the exact method/path it must issue.
//! The vectors double as documentation of the two wire quirks (advance flag
//! in the update path, unseparated delete path) that must not be "fixed"
//! unilaterally.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_api_client::{
    HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, Todo, TodoApiClient,
    TodoStatus,
};

/// Transport double that records requests and always answers 200.
struct RecordingTransport {
    seen: Arc<Mutex<Vec<HttpRequest>>>,
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.seen.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        })
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn vector_todo() -> Todo {
    Todo {
        id: 7,
        title: "Vector".to_string(),
        description: "Fixture".to_string(),
        status: TodoStatus::Todo,
    }
}

#[tokio::test]
async fn route_table_matches_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let client = TodoApiClient::new(RecordingTransport {
            seen: Arc::clone(&seen),
        });

        let todo = vector_todo();
        match case["operation"].as_str().unwrap() {
            "list_all" => drop(client.list_all().await.unwrap()),
            "get_by_id" => {
                drop(client.get_by_id(case["id"].as_u64().unwrap() as u32).await.unwrap())
            }
            "search" => drop(client.search(case["query"].as_str().unwrap()).await.unwrap()),
            "create" => drop(client.create(&todo).await.unwrap()),
            "update" => {
                drop(client.update(&todo, case["advance"].as_bool().unwrap()).await.unwrap())
            }
            "update_content" => drop(client.update_content(&todo).await.unwrap()),
            "delete_by_id" => {
                drop(client.delete_by_id(case["id"].as_u64().unwrap() as u32).await.unwrap())
            }
            other => panic!("{name}: unknown operation: {other}"),
        }

        let requests = seen.lock().unwrap();
        assert_eq!(requests.len(), 1, "{name}: exactly one request");

        let expected = &case["expected_request"];
        assert_eq!(
            requests[0].method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            requests[0].path,
            expected["path"].as_str().unwrap(),
            "{name}: path"
        );
        assert_eq!(
            requests[0].body.is_some(),
            expected["has_body"].as_bool().unwrap(),
            "{name}: body presence"
        );
    }
}
