//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or error kinds. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use serde_json::Value;
use todo_core::{
    ClientError, CreateTodo, DeleteConfirmation, HttpRequest, HttpResponse, Todo, TodoClient,
    UpdateTodo,
};

const BASE_URL: &str = "http://localhost:3002/api";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn input_id(case: &Value) -> i64 {
    case["input_id"].as_i64().unwrap()
}

/// Compare a built request against `expected_request`.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method.as_str(), expected["method"].as_str().unwrap(), "{name}: method");
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_headers: Vec<(String, String)> = expected
        .get("headers")
        .and_then(Value::as_array)
        .map(|headers| {
            headers
                .iter()
                .map(|h| {
                    let pair = h.as_array().unwrap();
                    (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(body) => {
            let actual: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&actual, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check a parse result against `expected_result` or `expected_error`.
fn assert_outcome<T>(name: &str, case: &Value, result: Result<T, ClientError>)
where
    T: serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        let matched = match expected_error.as_str().unwrap() {
            "NotFound" => matches!(err, ClientError::NotFound),
            "BadRequest" => matches!(err, ClientError::BadRequest(_)),
            "Http" => matches!(err, ClientError::Http { .. }),
            other => panic!("{name}: unknown expected_error: {other}"),
        };
        assert!(matched, "{name}: expected {expected_error}, got {err:?}");
    } else {
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result.unwrap(), expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_create_todo(simulated_response(&case));
        assert_outcome::<Todo>(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_todos();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_list_todos(simulated_response(&case));
        assert_outcome::<Vec<Todo>>(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_get_todo(input_id(&case));
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_todo(simulated_response(&case));
        assert_outcome::<Todo>(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_todo(input_id(&case), &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_todo(simulated_response(&case));
        assert_outcome::<Todo>(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_delete_todo(input_id(&case));
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_todo(simulated_response(&case));
        assert_outcome::<DeleteConfirmation>(name, &case, result);
    }
}
