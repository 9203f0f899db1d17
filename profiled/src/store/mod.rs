// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use std::error::Error;
use std::fmt;

pub mod memory;
pub mod mongo;

pub use memory::InMemoryProfileStore;
pub use mongo::MongoProfileStore;

/// Profiles are schema-less: an open-ended mapping from field names to
/// arbitrary JSON values. The store never inspects or constrains fields.
pub type ProfileDocument = serde_json::Map<String, serde_json::Value>;

/// Database-assigned profile identifier. Hex string in transit, native
/// ObjectId in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileId(ObjectId);

impl ProfileId {
    pub fn parse(value: &str) -> Result<Self, StoreError> {
        ObjectId::parse_str(value)
            .map(ProfileId)
            .map_err(|_| StoreError::MalformedId(value.to_string()))
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for ProfileId {
    fn from(oid: ObjectId) -> Self {
        ProfileId(oid)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub inserted_id: String,
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
    pub acknowledged: bool,
}

#[derive(Debug)]
pub enum StoreError {
    /// The identifier string could not be converted to the native type.
    MalformedId(String),
    /// Connection or query-execution failure in the backend.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MalformedId(value) => {
                write!(f, "Malformed profile identifier: {}", value)
            }
            StoreError::Backend(msg) => write!(f, "Profile store backend error: {}", msg),
        }
    }
}

impl Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Seam between the request handlers and the document database. One
/// database call per operation, no retries, no local recovery.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Every document in the collection, in natural backend order.
    async fn find_all(&self) -> Result<Vec<ProfileDocument>, StoreError>;

    /// Inserts the document as-is; the backend assigns the identifier.
    async fn insert_one(&self, doc: ProfileDocument) -> Result<InsertOutcome, StoreError>;

    /// Overwrites the entire matched document. Zero matches is a
    /// successful no-op reported through the counts.
    async fn replace_one(
        &self,
        id: &ProfileId,
        doc: ProfileDocument,
    ) -> Result<ReplaceOutcome, StoreError>;

    /// Removes at most one document. Zero matches is a successful no-op.
    async fn delete_one(&self, id: &ProfileId) -> Result<DeleteOutcome, StoreError>;
}
