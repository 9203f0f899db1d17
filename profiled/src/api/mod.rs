// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

mod error;
mod profile;

pub use error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/profile", web::get().to(profile::list_profiles))
            .route("/profile", web::post().to(profile::create_profile))
            .route("/profile/{id}", web::put().to(profile::replace_profile))
            .route("/profile/{id}", web::delete().to(profile::delete_profile)),
    );
}
