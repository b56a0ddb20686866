//! Lecturer documents.

use serde::{Deserialize, Serialize};

/// A document of the lecturer collection.
///
/// Only the fields shown on the lecturer page are mapped; anything else in
/// the document is ignored on read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lecturer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Department id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did: Option<String>,
}
