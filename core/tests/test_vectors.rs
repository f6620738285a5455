//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use pretty_assertions::assert_eq;
use serde_json::Value;
use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Todo, TodoClient, TodoDto};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:5200";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Compare method, path, and (when the vector lists them) headers and body.
fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

/// Check either `expected_error` or `expected_result` against the parse outcome.
fn check_outcome<T, F>(name: &str, case: &Value, result: Result<T, ApiError>, expected: F)
where
    T: std::fmt::Debug + PartialEq,
    F: FnOnce(&Value) -> T,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error.as_str().unwrap() {
            "NotFound" => assert!(matches!(err, ApiError::NotFound(_)), "{name}: expected NotFound"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
    } else {
        assert_eq!(result.unwrap(), expected(&case["expected_result"]), "{name}: parsed result");
    }
}

fn input_id(case: &Value) -> Uuid {
    case["input_id"].as_str().unwrap().parse().unwrap()
}

fn as_text(v: &Value) -> String {
    v.as_str().unwrap().to_string()
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        let completed_only = case["endpoint"] == "completed";

        let req = if completed_only {
            c.build_list_completed()
        } else {
            c.build_list_todos()
        };
        check_request(name, &req, &case["expected_request"]);

        let result = if completed_only {
            c.parse_list_completed(simulated(&case))
        } else {
            c.parse_list_todos(simulated(&case))
        };
        check_outcome(name, &case, result, |v| {
            serde_json::from_value::<Vec<Todo>>(v.clone()).unwrap()
        });
    }
}

#[test]
fn get_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_get_todo(input_id(&case)), &case["expected_request"]);
        let result = c.parse_get_todo(simulated(&case));
        check_outcome(name, &case, result, |v| serde_json::from_value::<Todo>(v.clone()).unwrap());
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: TodoDto = serde_json::from_value(case["input"].clone()).unwrap();
        check_request(name, &c.build_create_todo(&input).unwrap(), &case["expected_request"]);
        let result = c.parse_create_todo(simulated(&case));
        check_outcome(name, &case, result, |v| serde_json::from_value::<Todo>(v.clone()).unwrap());
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: TodoDto = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_todo(input_id(&case), &input).unwrap();
        check_request(name, &req, &case["expected_request"]);
        let result = c.parse_update_todo(simulated(&case));
        check_outcome(name, &case, result, as_text);
    }
}

#[test]
fn complete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/complete.json")) {
        let name = case["name"].as_str().unwrap();
        let title = case["input_title"].as_str().unwrap();
        check_request(name, &c.build_complete_todo(title), &case["expected_request"]);
        let result = c.parse_complete_todo(simulated(&case));
        check_outcome(name, &case, result, as_text);
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_delete_todo(input_id(&case)), &case["expected_request"]);
        let result = c.parse_delete_todo(simulated(&case));
        check_outcome(name, &case, result, as_text);
    }
}
