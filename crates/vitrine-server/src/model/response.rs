//! HTTP response types for the Vitrine server
//!
//! This module provides common response structures for API responses.

use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Generic result wrapper for API responses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Result<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T> Result<T> {
    pub fn new(code: i32, message: String, data: T) -> Self {
        Result::<T> {
            code,
            message,
            data,
        }
    }

    pub fn success(data: T) -> Result<T> {
        Result::<T> {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }

    pub fn http_success(data: impl Serialize) -> HttpResponse {
        HttpResponse::Ok().json(Result::success(data))
    }

    pub fn http_response(
        status: u16,
        code: i32,
        message: String,
        data: impl Serialize,
    ) -> HttpResponse {
        HttpResponseBuilder::new(StatusCode::from_u16(status).unwrap_or_default())
            .json(Result::new(code, message, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_wrapper() {
        let result = Result::success("ok");
        assert_eq!(result.code, 0);
        assert_eq!(result.message, "success");
        assert_eq!(result.data, "ok");
    }

    #[test]
    fn test_new_wrapper() {
        let result = Result::new(500, "write failed".to_string(), ());
        assert_eq!(result.code, 500);
        assert_eq!(result.message, "write failed");
    }
}
