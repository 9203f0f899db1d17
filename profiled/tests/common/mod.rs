// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use profiled::api;
use profiled::bootstrap::bootstrap_runtime;
use profiled::config::ValidatedConfig;
use profiled::store::{InMemoryProfileStore, ProfileStore};
use profiled::util::test_fixtures::TestFixtureRoot;
use std::sync::Arc;

/// Boots a default runtime root and an in-memory profile store.
/// Handlers only see the `ProfileStore` trait, so the harness swaps the
/// MongoDB backend for the in-memory one.
pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub config: Arc<ValidatedConfig>,
    pub store: Arc<InMemoryProfileStore>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub store: Arc<dyn ProfileStore>,
}

impl TestHarness {
    pub fn new() -> Self {
        let fixture = TestFixtureRoot::new_unique("api-test-suite").expect("fixture root");
        let bootstrap = bootstrap_runtime(fixture.path()).expect("bootstrap");
        assert!(bootstrap.created_config, "fixture root must start empty");

        Self {
            fixture,
            config: Arc::new(bootstrap.validated_config),
            store: Arc::new(InMemoryProfileStore::new()),
        }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            store: self.store.clone(),
        }
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(bundle.store))
        .configure(api::configure)
}
