// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::store::StoreError;

/// Fault-to-response mapping for the profile handlers. Malformed
/// identifiers and backend failures both surface as a plain 500; no
/// structured error body is emitted.
#[derive(Debug)]
pub enum ApiError {
    MalformedId(String),
    Store(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedId(value) => {
                write!(f, "Malformed profile identifier: {}", value)
            }
            ApiError::Store(msg) => write!(f, "Profile store failure: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(value) => ApiError::MalformedId(value),
            StoreError::Backend(msg) => ApiError::Store(msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("profile request failed: {}", self);
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body("500 - Internal Server Error")
    }
}
