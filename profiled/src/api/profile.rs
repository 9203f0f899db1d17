// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use super::ApiError;
use crate::store::{ProfileDocument, ProfileId, ProfileStore};

/// Envelope for the write operations. Reads return the raw documents.
#[derive(Serialize)]
struct WriteResponse<T: Serialize> {
    error: bool,
    profile: T,
}

fn write_response<T: Serialize>(profile: T) -> WriteResponse<T> {
    WriteResponse {
        error: false,
        profile,
    }
}

pub async fn list_profiles(
    store: web::Data<dyn ProfileStore>,
) -> Result<HttpResponse, ApiError> {
    let profiles = store.find_all().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

pub async fn create_profile(
    store: web::Data<dyn ProfileStore>,
    body: web::Json<ProfileDocument>,
) -> Result<HttpResponse, ApiError> {
    let outcome = store.insert_one(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(write_response(outcome)))
}

pub async fn replace_profile(
    store: web::Data<dyn ProfileStore>,
    path: web::Path<String>,
    body: web::Json<ProfileDocument>,
) -> Result<HttpResponse, ApiError> {
    let id = ProfileId::parse(&path)?;
    let outcome = store.replace_one(&id, body.into_inner()).await?;
    Ok(HttpResponse::Accepted().json(write_response(outcome)))
}

pub async fn delete_profile(
    store: web::Data<dyn ProfileStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = ProfileId::parse(&path)?;
    let outcome = store.delete_one(&id).await?;
    Ok(HttpResponse::Accepted().json(write_response(outcome)))
}
