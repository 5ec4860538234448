//! The response normalizer: every HTTP outcome maps into one envelope shape.

use crate::error::ErrorKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field-level validation error as returned by the backend on 400.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub property: String,
    pub constraints: BTreeMap<String, String>,
}

/// Decoded payload of a list endpoint: the rows plus the total row count.
#[derive(Clone, Debug, PartialEq)]
pub struct ListData<T> {
    pub items: Vec<T>,
    pub count: u64,
}

/// Uniform result of any request. Callers branch on `data` vs `error`; request
/// methods never return a `Result`.
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: bool,
    /// Toast-worthy message for domain errors. Validation errors carry none;
    /// they bind to form fields instead.
    pub message: Option<String>,
    pub validation_errors: Option<Vec<FieldError>>,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    /// Network failure, unreadable body, non-JSON body, or decode failure.
    pub fn transport_error() -> Self {
        ApiResponse {
            data: None,
            error: true,
            message: Some("error".into()),
            validation_errors: None,
            status_code: 500,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.error
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        if !self.error {
            return None;
        }
        if self.validation_errors.is_some() {
            return Some(ErrorKind::Validation);
        }
        if self.status_code == 500 && self.message.as_deref() == Some("error") {
            return Some(ErrorKind::Transport);
        }
        Some(ErrorKind::Domain)
    }

    /// Re-shape an error envelope for a different payload type.
    fn carry<U>(self) -> ApiResponse<U> {
        ApiResponse {
            data: None,
            error: self.error,
            message: self.message,
            validation_errors: self.validation_errors,
            status_code: self.status_code,
        }
    }
}

impl ApiResponse<Value> {
    /// Decode `data.<plural>` and `data.count` into a typed list payload.
    pub fn decode_list<T: DeserializeOwned>(self, plural: &str) -> ApiResponse<ListData<T>> {
        if self.error {
            return self.carry();
        }
        let status_code = self.status_code;
        let message = self.message.clone();
        let Some(data) = self.data else {
            return ApiResponse::transport_error();
        };
        let Some(rows) = data.get(plural) else {
            return ApiResponse::transport_error();
        };
        let Ok(items) = serde_json::from_value::<Vec<T>>(rows.clone()) else {
            return ApiResponse::transport_error();
        };
        let count = data
            .get("count")
            .and_then(Value::as_u64)
            .unwrap_or(items.len() as u64);
        ApiResponse {
            data: Some(ListData { items, count }),
            error: false,
            message,
            validation_errors: None,
            status_code,
        }
    }

    /// Decode `data.<singular>` into a typed record.
    pub fn decode_one<T: DeserializeOwned>(self, singular: &str) -> ApiResponse<T> {
        if self.error {
            return self.carry();
        }
        let status_code = self.status_code;
        let message = self.message.clone();
        let decoded = self
            .data
            .as_ref()
            .and_then(|data| data.get(singular))
            .and_then(|v| serde_json::from_value::<T>(v.clone()).ok());
        match decoded {
            Some(record) => ApiResponse {
                data: Some(record),
                error: false,
                message,
                validation_errors: None,
                status_code,
            },
            None => ApiResponse::transport_error(),
        }
    }

    /// Keep only the envelope; used for delete, whose success body is `{message}`.
    pub fn into_unit(self) -> ApiResponse<()> {
        let data = if self.error { None } else { Some(()) };
        ApiResponse {
            data,
            error: self.error,
            message: self.message,
            validation_errors: self.validation_errors,
            status_code: self.status_code,
        }
    }
}

/// Normalize a raw HTTP outcome into the envelope. A 400 whose `message` is an
/// array is reinterpreted as field-level validation errors.
pub fn normalize(status: u16, body: &str) -> ApiResponse<Value> {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return ApiResponse::transport_error();
    };
    if (200..300).contains(&status) {
        return ApiResponse {
            data: json.get("data").cloned(),
            error: false,
            message: json
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            validation_errors: None,
            status_code: status,
        };
    }
    if status == 400 {
        if let Some(raw) = json.get("message").filter(|m| m.is_array()) {
            if let Ok(errors) = serde_json::from_value::<Vec<FieldError>>(raw.clone()) {
                return ApiResponse {
                    data: None,
                    error: true,
                    message: None,
                    validation_errors: Some(errors),
                    status_code: status,
                };
            }
        }
    }
    ApiResponse {
        data: None,
        error: true,
        message: Some(
            json.get("message")
                .and_then(Value::as_str)
                .unwrap_or("error")
                .to_string(),
        ),
        validation_errors: None,
        status_code: status,
    }
}
