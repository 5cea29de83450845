//! The shipping record collected from a buyer and carried as the sealed plaintext.
//!
//! Optional fields are omitted from the JSON when absent, so a record holding only a name
//! serializes to `{"recipient":{"name":"John Doe"}}`. No schema validation is performed beyond
//! what deserialization itself requires.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use serde::{Deserialize, Serialize};

use crate::ies::IesError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRecord {
    pub recipient: Recipient,
    /// Free-form delivery preferences such as carrier or delivery window
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub preferences: BTreeMap<String, String>,
    /// Order references and other data the shipper should see alongside the address
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

impl ShippingRecord {
    /// Creates a record holding only the recipient's name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            recipient: Recipient { name: name.into(), ..Default::default() },
            ..Default::default()
        }
    }

    pub fn to_json(&self) -> Result<String, IesError> {
        serde_json::to_string(self).map_err(|err| IesError::InvalidRecord(err.to_string()))
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, IesError> {
        self.to_json().map(String::into_bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, IesError> {
        serde_json::from_slice(bytes).map_err(|err| IesError::InvalidRecord(err.to_string()))
    }
}
