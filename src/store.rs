// src/store.rs

//! Document-store plumbing: connection bootstrap, the opaque document
//! identifier, and the shared insert-then-read-back helper.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson};
use mongodb::{Client, Database};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Collection holding product documents.
pub const PRODUCTS: &str = "product";
/// Collection holding order documents.
pub const ORDERS: &str = "order";

/// Builds the database handle from configuration. Returns `None` instead of
/// failing so the server can still start and report the condition through the
/// diagnostics endpoint.
pub async fn connect(config: &AppConfig) -> Option<Database> {
  let url = config.database_url.as_deref()?;

  match Client::with_uri_str(url).await {
    Ok(client) => {
      let name = config.effective_database_name();
      tracing::info!(database = name, "Store client initialized.");
      Some(client.database(name))
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialize store client; continuing without a store.");
      None
    }
  }
}

/// Store-assigned identifier of a persisted document.
///
/// The native representation never crosses the HTTP boundary: it serializes
/// as its hex string, and the only way in from the outside is the fallible
/// [`DocumentId::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
  pub fn parse(s: &str) -> Result<Self, mongodb::bson::oid::Error> {
    ObjectId::parse_str(s).map(DocumentId)
  }

  pub fn to_hex(self) -> String {
    self.0.to_hex()
  }
}

impl fmt::Display for DocumentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.to_hex())
  }
}

impl FromStr for DocumentId {
  type Err = mongodb::bson::oid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

// Lets `doc! { "_id": id }` work in query filters.
impl From<DocumentId> for Bson {
  fn from(id: DocumentId) -> Bson {
    Bson::ObjectId(id.0)
  }
}

impl Serialize for DocumentId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.0.to_hex())
  }
}

impl<'de> Deserialize<'de> for DocumentId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    ObjectId::deserialize(deserializer).map(DocumentId)
  }
}

/// Inserts one document and reads it back by the identifier the store
/// assigned. The read-back (rather than echoing the payload) confirms the
/// write and picks up any store-assigned defaults.
pub async fn insert_and_fetch<P, R>(db: &Database, collection: &str, payload: &P) -> Result<R, AppError>
where
  P: Serialize + Send + Sync,
  R: DeserializeOwned + Send + Sync,
{
  let inserted = db.collection::<P>(collection).insert_one(payload).await?;
  let id = inserted
    .inserted_id
    .as_object_id()
    .ok_or_else(|| AppError::Internal("store assigned a non-ObjectId identifier".to_string()))?;

  db.collection::<R>(collection)
    .find_one(doc! { "_id": id })
    .await?
    .ok_or_else(|| AppError::Internal(format!("document {} missing on read-back after insert", id.to_hex())))
}
