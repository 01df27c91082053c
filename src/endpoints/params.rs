//! Request parameters shared by both transport surfaces.
//!
//! Query strings arrive as text and tool arguments arrive as JSON; both are
//! normalized into one JSON object so validation is written once.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::AppError;

/// Named request parameters for one operation invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationParams {
    values: Map<String, Value>,
}

impl OperationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters from a decoded query string. Every value is kept as a string.
    pub fn from_query(query: HashMap<String, String>) -> Self {
        Self {
            values: query
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect(),
        }
    }

    /// Parameters from tool-call arguments. `null` means no arguments.
    pub fn from_arguments(arguments: Value) -> Result<Self, AppError> {
        match arguments {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            other => Err(AppError::invalid_parameter(
                "arguments",
                format!("expected an object, got {}", json_type(&other)),
            )),
        }
    }

    /// Adds or replaces one parameter.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    /// A positive integer identifier, given as a JSON integer or decimal text.
    pub fn required_id(&self, name: &str) -> Result<u64, AppError> {
        let value = self
            .get(name)
            .ok_or_else(|| AppError::invalid_parameter(name, "is required"))?;

        let id = match value {
            Value::Number(number) => number.as_u64().ok_or_else(|| {
                AppError::invalid_parameter(name, format!("must be a positive integer, got {number}"))
            })?,
            Value::String(text) => text.trim().parse::<u64>().map_err(|_| {
                AppError::invalid_parameter(name, format!("must be a positive integer, got '{text}'"))
            })?,
            other => {
                return Err(AppError::invalid_parameter(
                    name,
                    format!("must be a positive integer, got {}", json_type(other)),
                ));
            }
        };

        if id == 0 {
            return Err(AppError::invalid_parameter(
                name,
                "must be a positive integer, got 0",
            ));
        }
        Ok(id)
    }

    /// An optional season year. Absent, `null` and blank text mean "not given".
    pub fn optional_season(&self, name: &str) -> Result<Option<i32>, AppError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };

        match value {
            Value::Number(number) => number
                .as_i64()
                .and_then(|season| i32::try_from(season).ok())
                .map(Some)
                .ok_or_else(|| {
                    AppError::invalid_parameter(name, format!("must be a year, got {number}"))
                }),
            Value::String(text) if text.trim().is_empty() => Ok(None),
            Value::String(text) => text.trim().parse::<i32>().map(Some).map_err(|_| {
                AppError::invalid_parameter(name, format!("must be a year, got '{text}'"))
            }),
            other => Err(AppError::invalid_parameter(
                name,
                format!("must be a year, got {}", json_type(other)),
            )),
        }
    }

    /// A non-blank name, trimmed.
    pub fn required_name(&self, name: &str) -> Result<String, AppError> {
        match self.get(name) {
            Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Some(Value::String(_)) => Err(AppError::invalid_parameter(name, "must not be blank")),
            Some(other) => Err(AppError::invalid_parameter(
                name,
                format!("must be a string, got {}", json_type(other)),
            )),
            None => Err(AppError::invalid_parameter(name, "is required")),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
