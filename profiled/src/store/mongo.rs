// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Collection};
use serde_json::Value;

use super::{
    DeleteOutcome, InsertOutcome, ProfileDocument, ProfileId, ProfileStore, ReplaceOutcome,
    StoreError,
};
use crate::config::DatabaseConfig;

/// Production backend over a MongoDB collection. The driver owns the
/// connection pool; this type holds only the collection handle.
#[derive(Clone)]
pub struct MongoProfileStore {
    collection: Collection<Document>,
}

impl MongoProfileStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let collection = client
            .database(&config.name)
            .collection::<Document>(&config.collection);
        Ok(Self { collection })
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn find_all(&self) -> Result<Vec<ProfileDocument>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(document_to_json).collect())
    }

    async fn insert_one(&self, doc: ProfileDocument) -> Result<InsertOutcome, StoreError> {
        let document = to_bson_document(doc)?;
        let result = self.collection.insert_one(document).await?;
        Ok(InsertOutcome {
            inserted_id: render_id(result.inserted_id),
            acknowledged: true,
        })
    }

    async fn replace_one(
        &self,
        id: &ProfileId,
        doc: ProfileDocument,
    ) -> Result<ReplaceOutcome, StoreError> {
        let replacement = to_bson_document(doc)?;
        let filter = doc! { "_id": id.as_object_id() };
        let result = self.collection.replace_one(filter, replacement).await?;
        Ok(ReplaceOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            acknowledged: true,
        })
    }

    async fn delete_one(&self, id: &ProfileId) -> Result<DeleteOutcome, StoreError> {
        let filter = doc! { "_id": id.as_object_id() };
        let result = self.collection.delete_one(filter).await?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
            acknowledged: true,
        })
    }
}

fn to_bson_document(doc: ProfileDocument) -> Result<Document, StoreError> {
    mongodb::bson::to_document(&doc).map_err(|err| StoreError::Backend(err.to_string()))
}

/// Renders a stored document for the wire: identifiers become plain hex
/// strings instead of extended-JSON `$oid` objects.
fn document_to_json(document: Document) -> ProfileDocument {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => Value::Object(document_to_json(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

fn render_id(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn document_rendering_flattens_object_ids() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let document = doc! { "_id": oid, "name": "Ada" };

        let json = document_to_json(document);
        assert_eq!(
            json.get("_id"),
            Some(&Value::String("507f1f77bcf86cd799439011".to_string()))
        );
        assert_eq!(json.get("name"), Some(&Value::String("Ada".to_string())));
    }

    #[test]
    fn document_rendering_recurses_into_nested_values() {
        let oid = ObjectId::new();
        let document = doc! {
            "tags": ["a", "b"],
            "nested": { "ref": oid },
            "count": 3_i64,
        };

        let json = document_to_json(document);
        assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(json["nested"]["ref"], Value::String(oid.to_hex()));
        assert_eq!(json["count"], serde_json::json!(3));
    }

    #[test]
    fn insert_id_renders_as_hex() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(render_id(Bson::ObjectId(oid)), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn json_body_converts_to_bson_document() {
        let mut doc = ProfileDocument::new();
        doc.insert("name".to_string(), Value::String("Ada".to_string()));
        doc.insert("age".to_string(), serde_json::json!(36));

        let bson = to_bson_document(doc).expect("convert");
        assert_eq!(bson.get_str("name").unwrap(), "Ada");
        assert_eq!(bson.get_i64("age").unwrap(), 36);
    }
}
