use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::location::Coordinates;

pub const COLLECTION: &str = "agencies";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgencyStatus {
    Pending,
    Approved,
    Suspended,
    Rejected,
}

impl AgencyStatus {
    pub const VALUES: [&'static str; 4] = ["pending", "approved", "suspended", "rejected"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub address: Address,
    /// Must reference an existing user. Not enforced by the storage layer;
    /// callers own this invariant.
    pub owner_id: ObjectId,
    pub status: AgencyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
