//! Entity capability and the concrete records stored by the demos.

use common::types::{Product, User};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier field in serialized records.
pub const ID_FIELD: &str = "id";

/// A record with a unique string identifier that can absorb a partial update.
///
/// `merge` is a shallow overlay: fields present in the patch replace the
/// record's fields, everything else is kept. It must leave `id()` unchanged;
/// stores reject a merge that does not.
pub trait Entity: Clone {
    type Patch;

    fn id(&self) -> &str;

    fn merge(self, patch: Self::Patch) -> Self;
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for User {
    type Patch = UserPatch;

    fn id(&self) -> &str { &self.id }

    fn merge(mut self, patch: UserPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

impl Entity for Product {
    type Patch = ProductPatch;

    fn id(&self) -> &str { &self.id }

    fn merge(mut self, patch: ProductPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        self
    }
}

/// Schemaless record: an identifier plus arbitrary JSON fields.
///
/// Serializes flat, e.g. `{"id":"1","name":"Soto","price":1000}`. The field
/// map never holds an `id` key, so the identifier cannot be shadowed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), fields: Map::new() }
    }

    /// Set a field; an `id` key is ignored.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn set(&mut self, key: String, value: Value) {
        if key != ID_FIELD {
            self.fields.insert(key, value);
        }
    }
}

impl Entity for Record {
    type Patch = Map<String, Value>;

    fn id(&self) -> &str { &self.id }

    /// Keys in the patch overwrite fields of the same name; an `id` key is ignored.
    fn merge(mut self, patch: Map<String, Value>) -> Self {
        for (key, value) in patch {
            self.set(key, value);
        }
        self
    }
}
