//! Minimal consistent seed dataset: one super_admin user, one agency owned
//! by that user, two vehicles owned by that agency. Inserts run strictly in
//! that order because each later document references the generated id of an
//! earlier one.

use bcrypt::DEFAULT_COST;
use mongodb::bson::{oid::ObjectId, DateTime};
use mongodb::{Collection, Database};
use std::env;

use super::{classify, BootstrapError};
use crate::models::{
    agency,
    agency::{Address, Agency, AgencyStatus},
    location::{Coordinates, GeoLocation},
    user,
    user::{User, UserRole},
    vehicle,
    vehicle::{FuelType, Transmission, Vehicle, VehicleCategory, VehicleStatus},
};
use crate::schema::validators;

pub const ADMIN_EMAIL: &str = "admin@carrentalplatform.com";
pub const AGENCY_NAME: &str = "Premium Car Rentals";

/// Override with SEED_ADMIN_PASSWORD; only the bcrypt hash is stored.
const DEFAULT_ADMIN_PASSWORD: &str = "ChangeMe123!";

#[derive(Debug)]
pub struct SeededIds {
    pub admin_user_id: ObjectId,
    pub agency_id: ObjectId,
    pub vehicle_ids: Vec<ObjectId>,
}

pub fn admin_user(password_hash: String) -> User {
    let now = DateTime::now();
    User {
        id: None,
        email: ADMIN_EMAIL.to_string(),
        password: password_hash,
        first_name: "System".to_string(),
        last_name: "Administrator".to_string(),
        role: UserRole::SuperAdmin,
        phone_number: None,
        date_of_birth: None,
        driving_license: None,
        is_active: true,
        email_verified: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_agency(owner_id: ObjectId) -> Agency {
    let now = DateTime::now();
    Agency {
        id: None,
        name: AGENCY_NAME.to_string(),
        email: "info@premiumcars.com".to_string(),
        phone_number: Some("+1-555-0123".to_string()),
        address: Address {
            street: "123 Main Street".to_string(),
            city: "New York".to_string(),
            state: Some("NY".to_string()),
            country: "USA".to_string(),
            zip_code: Some("10001".to_string()),
            coordinates: Some(Coordinates {
                latitude: 40.7128,
                longitude: -74.0060,
            }),
        },
        owner_id,
        status: AgencyStatus::Approved,
        business_license: Some("BL123456789".to_string()),
        description: Some("Premium car rental service with luxury vehicles".to_string()),
        website: Some("https://premiumcars.com".to_string()),
        rating: 4.5,
        total_reviews: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_vehicles(agency_id: ObjectId) -> Vec<Vehicle> {
    let now = DateTime::now();
    let depot = GeoLocation {
        coordinates: Some(vec![-74.0060, 40.7128]),
        address: Some("123 Main Street, New York, NY".to_string()),
    };
    vec![
        Vehicle {
            id: None,
            agency_id,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2023,
            category: VehicleCategory::Midsize,
            price_per_day: 45.00,
            status: VehicleStatus::Available,
            license_plate: Some("ABC-123".to_string()),
            vin: Some("1HGBH41JXMN109186".to_string()),
            color: Some("Silver".to_string()),
            fuel_type: Some(FuelType::Gasoline),
            transmission: Some(Transmission::Automatic),
            seats: Some(5),
            mileage: Some(15000),
            features: vec![
                "Air Conditioning".to_string(),
                "Bluetooth".to_string(),
                "Backup Camera".to_string(),
            ],
            images: vec![],
            location: Some(depot.clone()),
            rating: 4.2,
            total_reviews: 0,
            created_at: now,
            updated_at: now,
        },
        Vehicle {
            id: None,
            agency_id,
            make: "BMW".to_string(),
            model: "X5".to_string(),
            year: 2023,
            category: VehicleCategory::Luxury,
            price_per_day: 95.00,
            status: VehicleStatus::Available,
            license_plate: Some("XYZ-789".to_string()),
            vin: Some("5UXCR6C0XL9B12345".to_string()),
            color: Some("Black".to_string()),
            fuel_type: Some(FuelType::Gasoline),
            transmission: Some(Transmission::Automatic),
            seats: Some(7),
            mileage: Some(8000),
            features: vec![
                "Leather Seats".to_string(),
                "Sunroof".to_string(),
                "Navigation".to_string(),
                "Premium Sound".to_string(),
            ],
            images: vec![],
            location: Some(depot),
            rating: 4.8,
            total_reviews: 0,
            created_at: now,
            updated_at: now,
        },
    ]
}

/// Inserts the seed documents in dependency order, capturing each generated
/// id for the next step. Fails fast; no partial-success recovery.
pub async fn run(db: &Database) -> Result<SeededIds, BootstrapError> {
    let password = env::var("SEED_ADMIN_PASSWORD")
        .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
    let password_hash = bcrypt::hash(&password, DEFAULT_COST)
        .map_err(|e| BootstrapError::Seed(format!("failed to hash admin password: {}", e)))?;

    let admin = admin_user(password_hash);
    if !validators::email_regex().is_match(&admin.email) {
        return Err(BootstrapError::Seed(format!(
            "admin email {} does not match the declared pattern",
            admin.email
        )));
    }

    let users: Collection<User> = db.collection(user::COLLECTION);
    let result = users
        .insert_one(&admin)
        .await
        .map_err(|e| classify(e, user::COLLECTION))?;
    let admin_user_id = result.inserted_id.as_object_id().ok_or_else(|| {
        BootstrapError::Seed("admin user insert returned a non-ObjectId id".to_string())
    })?;
    log::info!("Created admin user with id {}", admin_user_id);

    let agencies: Collection<Agency> = db.collection(agency::COLLECTION);
    let result = agencies
        .insert_one(&sample_agency(admin_user_id))
        .await
        .map_err(|e| classify(e, agency::COLLECTION))?;
    let agency_id = result.inserted_id.as_object_id().ok_or_else(|| {
        BootstrapError::Seed("agency insert returned a non-ObjectId id".to_string())
    })?;
    log::info!("Created sample agency with id {}", agency_id);

    let vehicles: Collection<Vehicle> = db.collection(vehicle::COLLECTION);
    let mut vehicle_ids = Vec::new();
    for v in sample_vehicles(agency_id) {
        let result = vehicles
            .insert_one(&v)
            .await
            .map_err(|e| classify(e, vehicle::COLLECTION))?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            BootstrapError::Seed("vehicle insert returned a non-ObjectId id".to_string())
        })?;
        vehicle_ids.push(id);
    }
    log::info!("Created {} sample vehicles", vehicle_ids.len());

    Ok(SeededIds {
        admin_user_id,
        agency_id,
        vehicle_ids,
    })
}
