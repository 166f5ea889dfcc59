use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use super::location::GeoLocation;

pub const COLLECTION: &str = "reservations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub const VALUES: [&'static str; 6] = [
        "pending",
        "confirmed",
        "active",
        "completed",
        "cancelled",
        "no_show",
    ];
}

/// Settlement state of the reservation itself, distinct from the lifecycle
/// of individual payment records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub const VALUES: [&'static str; 4] = ["pending", "paid", "refunded", "failed"];
}

/// A booking of one vehicle over [startDate, endDate). The schema does not
/// enforce date ordering or overlap exclusion; booking logic must check
/// availability through the (vehicleId, startDate, endDate) index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub vehicle_id: ObjectId,
    pub agency_id: ObjectId,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub status: ReservationStatus,
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_location: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_drivers: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<ObjectId>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
