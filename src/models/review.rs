use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "reviews";

/// Polymorphic review subject. Serializes adjacently as the stored
/// `targetType` / `targetId` field pair, so consuming queries resolve the
/// reference by the tag instead of inspecting untyped fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "targetType", content = "targetId", rename_all = "lowercase")]
pub enum ReviewTarget {
    Vehicle(ObjectId),
    Agency(ObjectId),
}

impl ReviewTarget {
    pub const TYPES: [&'static str; 2] = ["vehicle", "agency"];

    pub fn target_id(self) -> ObjectId {
        match self {
            ReviewTarget::Vehicle(id) | ReviewTarget::Agency(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub const VALUES: [&'static str; 3] = ["pending", "approved", "rejected"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    #[serde(flatten)]
    pub target: ReviewTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<ObjectId>,
    /// Whole stars, 1 through 5.
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub status: ReviewStatus,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub helpful_votes: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
