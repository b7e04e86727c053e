//! Todo resource handlers
//!
//! One store statement per request; validation failures answer locally
//! before any store access. Field values are bound textually and cast by
//! the store, so a value the store cannot cast surfaces as a handler
//! error, not a 400.

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use serde_json::Value;

use super::HandlerResult;
use crate::config::AppState;
use crate::db;
use crate::http::{body, response};

/// `/todos` collection endpoint
pub async fn handle_collection(req: Request<Incoming>, state: &AppState) -> HandlerResult {
    let method = req.method().clone();
    match method {
        Method::GET => {
            let todos = db::todos::list_with_owner(&state.db).await?;
            Ok(Some(response::build_json_response(StatusCode::OK, &todos)))
        }
        Method::POST => {
            let body = body::read_json(req.into_body()).await;

            let (Some(name), Some(user_id)) =
                (present_field(&body, "name"), present_field(&body, "user_id"))
            else {
                return Ok(Some(response::build_error_response(
                    StatusCode::BAD_REQUEST,
                    "name and user_id required",
                )));
            };

            let todo = db::todos::insert(&state.db, &text_param(name), &text_param(user_id)).await?;
            Ok(Some(response::build_json_response(StatusCode::CREATED, &todo)))
        }
        _ => Ok(None),
    }
}

/// `/todos/{id}` item endpoint; `id` arrives as the raw path segment
pub async fn handle_item(req: Request<Incoming>, state: &AppState, id: &str) -> HandlerResult {
    let method = req.method().clone();
    match method {
        Method::GET => match db::todos::fetch(&state.db, id).await? {
            Some(todo) => Ok(Some(response::build_json_response(StatusCode::OK, &todo))),
            None => Ok(Some(todo_not_found())),
        },
        Method::PUT => {
            let body = body::read_json(req.into_body()).await;

            let updated = match UpdatePlan::from_body(&body) {
                UpdatePlan::Both { name, completed } => {
                    db::todos::update_both(&state.db, id, name.as_deref(), completed.as_deref())
                        .await?
                }
                UpdatePlan::NameOnly { name } => {
                    db::todos::update_name(&state.db, id, name.as_deref()).await?
                }
                UpdatePlan::CompletedOnly { completed } => {
                    db::todos::update_completed(&state.db, id, completed.as_deref()).await?
                }
                UpdatePlan::Empty => {
                    return Ok(Some(response::build_error_response(
                        StatusCode::BAD_REQUEST,
                        "No fields to update",
                    )));
                }
            };

            match updated {
                Some(todo) => Ok(Some(response::build_json_response(StatusCode::OK, &todo))),
                None => Ok(Some(todo_not_found())),
            }
        }
        Method::DELETE => match db::todos::delete(&state.db, id).await? {
            Some(todo) => Ok(Some(response::build_json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Deleted", "todo": todo }),
            ))),
            None => Ok(Some(todo_not_found())),
        },
        _ => Ok(None),
    }
}

fn todo_not_found() -> Response<Full<Bytes>> {
    response::build_error_response(StatusCode::NOT_FOUND, "Todo not found")
}

/// Which update statements a PUT body selects.
///
/// A key counts as supplied whenever it exists in the body, even carrying
/// null, false or an empty string; absent keys leave their column alone.
#[derive(Debug, PartialEq, Eq)]
enum UpdatePlan {
    Both {
        name: Option<String>,
        completed: Option<String>,
    },
    NameOnly {
        name: Option<String>,
    },
    CompletedOnly {
        completed: Option<String>,
    },
    Empty,
}

impl UpdatePlan {
    fn from_body(body: &Value) -> Self {
        let name = body.get("name").map(nullable_text_param);
        let completed = body.get("completed").map(nullable_text_param);

        match (name, completed) {
            (Some(name), Some(completed)) => Self::Both { name, completed },
            (Some(name), None) => Self::NameOnly { name },
            (None, Some(completed)) => Self::CompletedOnly { completed },
            (None, None) => Self::Empty,
        }
    }
}

/// A required create field: present and truthy, where null, false, 0 and
/// "" all count as missing
fn present_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    let value = body.get(key)?;
    let truthy = match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    truthy.then_some(value)
}

/// Textual form of a field, bound as-is; the store applies its casts
fn text_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Like `text_param` but a JSON null becomes a SQL NULL
fn nullable_text_param(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_present_field_truthiness() {
        let body = json!({
            "name": "buy milk",
            "empty": "",
            "zero": 0,
            "off": false,
            "none": null,
            "user_id": 7
        });

        assert!(present_field(&body, "name").is_some());
        assert!(present_field(&body, "user_id").is_some());
        assert!(present_field(&body, "empty").is_none());
        assert!(present_field(&body, "zero").is_none());
        assert!(present_field(&body, "off").is_none());
        assert!(present_field(&body, "none").is_none());
        assert!(present_field(&body, "missing").is_none());
    }

    #[test]
    fn test_text_param_forms() {
        assert_eq!(text_param(&json!("7")), "7");
        assert_eq!(text_param(&json!(7)), "7");
        assert_eq!(text_param(&json!(true)), "true");
    }

    #[test]
    fn test_update_plan_both() {
        let plan = UpdatePlan::from_body(&json!({"name": "a", "completed": true}));
        assert_eq!(
            plan,
            UpdatePlan::Both {
                name: Some("a".to_string()),
                completed: Some("true".to_string()),
            }
        );
    }

    #[test]
    fn test_update_plan_single_fields() {
        assert_eq!(
            UpdatePlan::from_body(&json!({"name": "a"})),
            UpdatePlan::NameOnly {
                name: Some("a".to_string())
            }
        );
        assert_eq!(
            UpdatePlan::from_body(&json!({"completed": false})),
            UpdatePlan::CompletedOnly {
                completed: Some("false".to_string())
            }
        );
    }

    #[test]
    fn test_update_plan_empty() {
        assert_eq!(UpdatePlan::from_body(&json!({})), UpdatePlan::Empty);
        // Unknown keys do not count as update fields
        assert_eq!(
            UpdatePlan::from_body(&json!({"user_id": 3})),
            UpdatePlan::Empty
        );
    }

    #[test]
    fn test_update_plan_null_is_present() {
        // A supplied null selects the field and writes NULL; only an
        // absent key skips it
        assert_eq!(
            UpdatePlan::from_body(&json!({"completed": null})),
            UpdatePlan::CompletedOnly { completed: None }
        );
    }
}
