use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::location::GeoLocation;

pub const COLLECTION: &str = "vehicles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Economy,
    Compact,
    Midsize,
    Fullsize,
    Luxury,
    Suv,
    Van,
    Truck,
}

impl VehicleCategory {
    pub const VALUES: [&'static str; 8] = [
        "economy", "compact", "midsize", "fullsize", "luxury", "suv", "van", "truck",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
    Retired,
}

impl VehicleStatus {
    pub const VALUES: [&'static str; 4] = ["available", "rented", "maintenance", "retired"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const VALUES: [&'static str; 4] = ["gasoline", "diesel", "electric", "hybrid"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub const VALUES: [&'static str; 2] = ["manual", "automatic"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub agency_id: ObjectId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub category: VehicleCategory,
    pub price_per_day: f64,
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<Transmission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
