// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{
    DeleteOutcome, InsertOutcome, ProfileDocument, ProfileId, ProfileStore, ReplaceOutcome,
    StoreError,
};

/// In-process backend behind the same trait as the MongoDB store.
/// Used by the test harness and for development without a database.
/// Assigns real ObjectIds so identifier handling matches production.
#[derive(Default)]
pub struct InMemoryProfileStore {
    records: RwLock<Vec<(ObjectId, ProfileDocument)>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_all(&self) -> Result<Vec<ProfileDocument>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .map(|(oid, fields)| {
                let mut doc = ProfileDocument::new();
                doc.insert("_id".to_string(), Value::String(oid.to_hex()));
                doc.extend(fields.clone());
                doc
            })
            .collect())
    }

    async fn insert_one(&self, doc: ProfileDocument) -> Result<InsertOutcome, StoreError> {
        let oid = ObjectId::new();
        let mut records = self.records.write().await;
        records.push((oid, doc));
        Ok(InsertOutcome {
            inserted_id: oid.to_hex(),
            acknowledged: true,
        })
    }

    async fn replace_one(
        &self,
        id: &ProfileId,
        doc: ProfileDocument,
    ) -> Result<ReplaceOutcome, StoreError> {
        let target = id.as_object_id();
        let mut records = self.records.write().await;
        match records.iter_mut().find(|(oid, _)| *oid == target) {
            Some((_, fields)) => {
                let modified = if *fields == doc { 0 } else { 1 };
                *fields = doc;
                Ok(ReplaceOutcome {
                    matched_count: 1,
                    modified_count: modified,
                    acknowledged: true,
                })
            }
            None => Ok(ReplaceOutcome {
                matched_count: 0,
                modified_count: 0,
                acknowledged: true,
            }),
        }
    }

    async fn delete_one(&self, id: &ProfileId) -> Result<DeleteOutcome, StoreError> {
        let target = id.as_object_id();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|(oid, _)| *oid != target);
        Ok(DeleteOutcome {
            deleted_count: (before - records.len()) as u64,
            acknowledged: true,
        })
    }
}
