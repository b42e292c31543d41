//! Product detail data types returned by the catalog detail endpoint.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Opaque product identifier as exposed by card `data-id` attributes and the detail endpoint.
///
/// The endpoint emits numeric ids while the DOM carries strings; both decode to the same value.
pub struct ProductId(String);

impl ProductId {
    /// Builds an identifier from its textual form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Ok(Self(text)),
            RawId::Number(number) => Ok(Self(number.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Listing lifecycle status carried by a product detail record.
///
/// Only `sold` changes rendering; unknown values are preserved verbatim.
pub enum ListingStatus {
    /// Listing can still be contacted.
    #[default]
    Available,
    /// Listing has been sold.
    Sold,
    /// Any status string not known to this client (for example `reserved`).
    Other(String),
}

impl ListingStatus {
    /// Returns the wire string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `true` when the listing is sold.
    pub fn is_sold(&self) -> bool {
        matches!(self, Self::Sold)
    }
}

impl From<String> for ListingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => Self::Available,
            "sold" => Self::Sold,
            _ => Self::Other(value),
        }
    }
}

impl From<ListingStatus> for String {
    fn from(value: ListingStatus) -> Self {
        match value {
            ListingStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Read-only detail record for a single catalog listing.
pub struct ProductDetail {
    /// Listing identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    /// Category label.
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
    /// Asking price in the catalog currency.
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
    /// Free-text description.
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    /// Address of the listing image.
    #[serde(default, deserialize_with = "string_or_null")]
    pub image_url: String,
    /// Seller contact address.
    #[serde(default, deserialize_with = "string_or_null")]
    pub seller_email: String,
    /// Listing lifecycle status.
    #[serde(default)]
    pub status: ListingStatus,
    /// ISO-8601 creation timestamp, when the endpoint provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => Ok(value),
        RawPrice::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid price `{text}`"))),
    }
}
