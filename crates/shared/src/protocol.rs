use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// Body of the single outbound call: the user's input text, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessTaskRequest {
    pub name: String,
}

/// One item as described by the server. `quantity` and `units` are optional on
/// the wire; display defaults are substituted at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// Raw response envelope. The server discriminates on the `status` string and
/// fills in only the fields of the matching variant, so everything beyond
/// `status` is optional here and checked in [`ProcessResponse::into_outcome`].
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResponse {
    pub status: String,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ItemSpec>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Validated result of one request-response exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    Success {
        task_name: String,
        items: Vec<ItemSpec>,
    },
    Failure {
        message: String,
    },
}

impl ProcessResponse {
    /// Any `status` other than `"success"` takes the failure variant.
    pub fn into_outcome(self) -> Result<ProcessOutcome, EnvelopeError> {
        if self.status == "success" {
            let task_name = self
                .task_name
                .ok_or(EnvelopeError::MissingField("task_name"))?;
            let items = self.items.ok_or(EnvelopeError::MissingField("items"))?;
            Ok(ProcessOutcome::Success { task_name, items })
        } else {
            let message = self.message.ok_or(EnvelopeError::MissingField("message"))?;
            Ok(ProcessOutcome::Failure { message })
        }
    }
}

pub fn parse_outcome(body: &str) -> Result<ProcessOutcome, EnvelopeError> {
    let envelope: ProcessResponse = serde_json::from_str(body)?;
    envelope.into_outcome()
}

#[cfg(test)]
mod tests {
    use super::{parse_outcome, ProcessOutcome, ProcessTaskRequest};
    use crate::error::EnvelopeError;

    #[test]
    fn request_serializes_to_single_name_field() {
        let body = serde_json::to_string(&ProcessTaskRequest {
            name: "host a pizza night".to_string(),
        })
        .expect("serialize request");
        assert_eq!(body, r#"{"name":"host a pizza night"}"#);
    }

    #[test]
    fn parses_success_envelope_with_items() {
        let outcome = parse_outcome(
            r#"{"status":"success","task_name":"Shopping List","items":[{"name":"Apples","quantity":2,"units":"kg"}]}"#,
        )
        .expect("success envelope");

        match outcome {
            ProcessOutcome::Success { task_name, items } => {
                assert_eq!(task_name, "Shopping List");
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Apples");
                assert_eq!(items[0].quantity, Some(2.0));
                assert_eq!(items[0].units.as_deref(), Some("kg"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn absent_quantity_and_units_deserialize_as_none() {
        let outcome = parse_outcome(
            r#"{"status":"success","task_name":"Camping","items":[{"name":"Tent"}]}"#,
        )
        .expect("success envelope");

        match outcome {
            ProcessOutcome::Success { items, .. } => {
                assert_eq!(items[0].quantity, None);
                assert_eq!(items[0].units, None);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn error_status_takes_failure_variant() {
        let outcome = parse_outcome(r#"{"status":"error","message":"not found"}"#)
            .expect("failure envelope");
        assert_eq!(
            outcome,
            ProcessOutcome::Failure {
                message: "not found".to_string()
            }
        );
    }

    #[test]
    fn any_non_success_status_takes_failure_variant() {
        let outcome = parse_outcome(r#"{"status":"rate_limited","message":"slow down"}"#)
            .expect("failure envelope");
        assert_eq!(
            outcome,
            ProcessOutcome::Failure {
                message: "slow down".to_string()
            }
        );
    }

    #[test]
    fn failure_without_message_is_malformed() {
        let err = parse_outcome(r#"{"status":"error"}"#).expect_err("missing message");
        assert!(matches!(err, EnvelopeError::MissingField("message")));
    }

    #[test]
    fn success_without_items_is_malformed() {
        let err = parse_outcome(r#"{"status":"success","task_name":"X"}"#)
            .expect_err("missing items");
        assert!(matches!(err, EnvelopeError::MissingField("items")));
    }

    #[test]
    fn non_json_body_is_rejected() {
        let err = parse_outcome("<html>502 Bad Gateway</html>").expect_err("non-json body");
        assert!(matches!(err, EnvelopeError::Json(_)));
    }
}
