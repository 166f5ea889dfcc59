//! Structural validation contracts, one `$jsonSchema` per collection.
//!
//! These are attached at collection creation time so the storage layer
//! rejects malformed writes independently of any application-side checks.
//! Optional fields are unchecked when absent; required fields, types, enum
//! sets and numeric ranges are enforced on every write.

use mongodb::bson::{doc, Document};
use regex::Regex;
use std::sync::OnceLock;

use crate::models::{
    agency::{self, AgencyStatus},
    payment::{self, Currency, PaymentMethod},
    reservation::{self, ReservationStatus},
    review::{self, ReviewStatus, ReviewTarget},
    support_ticket::{self, TicketCategory, TicketPriority, TicketStatus},
    user::{self, UserRole},
    vehicle::{self, FuelType, Transmission, VehicleCategory, VehicleStatus},
};

/// RFC-shaped email pattern, shared between the `users`/`agencies`
/// validators and application-side checks.
pub const EMAIL_PATTERN: &str = "^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}$";

pub fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"))
}

/// (collection name, validator) pairs in creation order.
pub fn all() -> Vec<(&'static str, Document)> {
    vec![
        (user::COLLECTION, users()),
        (agency::COLLECTION, agencies()),
        (vehicle::COLLECTION, vehicles()),
        (reservation::COLLECTION, reservations()),
        (payment::COLLECTION, payments()),
        (review::COLLECTION, reviews()),
        (support_ticket::COLLECTION, support_tickets()),
    ]
}

fn geo_location() -> Document {
    doc! {
        "bsonType": "object",
        "properties": {
            "coordinates": { "bsonType": "array", "items": { "bsonType": "double" } },
            "address": { "bsonType": "string" },
        },
    }
}

pub fn users() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["email", "password", "firstName", "lastName", "role"],
            "properties": {
                "email": { "bsonType": "string", "pattern": EMAIL_PATTERN },
                "password": { "bsonType": "string", "minLength": 6 },
                "firstName": { "bsonType": "string", "minLength": 1 },
                "lastName": { "bsonType": "string", "minLength": 1 },
                "role": { "bsonType": "string", "enum": Vec::from(UserRole::VALUES) },
                "phoneNumber": { "bsonType": "string" },
                "dateOfBirth": { "bsonType": "date" },
                "drivingLicense": {
                    "bsonType": "object",
                    "properties": {
                        "number": { "bsonType": "string" },
                        "expiryDate": { "bsonType": "date" },
                        "country": { "bsonType": "string" },
                    },
                },
                "isActive": { "bsonType": "bool" },
                "emailVerified": { "bsonType": "bool" },
                "createdAt": { "bsonType": "date" },
                "updatedAt": { "bsonType": "date" },
            },
        },
    }
}

pub fn agencies() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["name", "email", "address", "ownerId", "status"],
            "properties": {
                "name": { "bsonType": "string", "minLength": 1 },
                "email": { "bsonType": "string", "pattern": EMAIL_PATTERN },
                "phoneNumber": { "bsonType": "string" },
                "address": {
                    "bsonType": "object",
                    "required": ["street", "city", "country"],
                    "properties": {
                        "street": { "bsonType": "string" },
                        "city": { "bsonType": "string" },
                        "state": { "bsonType": "string" },
                        "country": { "bsonType": "string" },
                        "zipCode": { "bsonType": "string" },
                        "coordinates": {
                            "bsonType": "object",
                            "properties": {
                                "latitude": { "bsonType": "double" },
                                "longitude": { "bsonType": "double" },
                            },
                        },
                    },
                },
                "ownerId": { "bsonType": "objectId" },
                "status": { "bsonType": "string", "enum": Vec::from(AgencyStatus::VALUES) },
                "businessLicense": { "bsonType": "string" },
                "description": { "bsonType": "string" },
                "website": { "bsonType": "string" },
                "rating": { "bsonType": "double", "minimum": 0.0, "maximum": 5.0 },
                "totalReviews": { "bsonType": "int", "minimum": 0 },
                "createdAt": { "bsonType": "date" },
                "updatedAt": { "bsonType": "date" },
            },
        },
    }
}

pub fn vehicles() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["agencyId", "make", "model", "year", "category", "pricePerDay", "status"],
            "properties": {
                "agencyId": { "bsonType": "objectId" },
                "make": { "bsonType": "string", "minLength": 1 },
                "model": { "bsonType": "string", "minLength": 1 },
                "year": { "bsonType": "int", "minimum": 1990, "maximum": 2030 },
                "category": { "bsonType": "string", "enum": Vec::from(VehicleCategory::VALUES) },
                "pricePerDay": { "bsonType": "double", "minimum": 0.0 },
                "status": { "bsonType": "string", "enum": Vec::from(VehicleStatus::VALUES) },
                "licensePlate": { "bsonType": "string" },
                "vin": { "bsonType": "string" },
                "color": { "bsonType": "string" },
                "fuelType": { "bsonType": "string", "enum": Vec::from(FuelType::VALUES) },
                "transmission": { "bsonType": "string", "enum": Vec::from(Transmission::VALUES) },
                "seats": { "bsonType": "int", "minimum": 1, "maximum": 20 },
                "mileage": { "bsonType": "int", "minimum": 0 },
                "features": { "bsonType": "array", "items": { "bsonType": "string" } },
                "images": { "bsonType": "array", "items": { "bsonType": "string" } },
                "location": geo_location(),
                "rating": { "bsonType": "double", "minimum": 0.0, "maximum": 5.0 },
                "totalReviews": { "bsonType": "int", "minimum": 0 },
                "createdAt": { "bsonType": "date" },
                "updatedAt": { "bsonType": "date" },
            },
        },
    }
}

pub fn reservations() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["userId", "vehicleId", "agencyId", "startDate", "endDate", "status", "totalAmount"],
            "properties": {
                "userId": { "bsonType": "objectId" },
                "vehicleId": { "bsonType": "objectId" },
                "agencyId": { "bsonType": "objectId" },
                "startDate": { "bsonType": "date" },
                "endDate": { "bsonType": "date" },
                "status": { "bsonType": "string", "enum": Vec::from(ReservationStatus::VALUES) },
                "totalAmount": { "bsonType": "double", "minimum": 0.0 },
                "pickupLocation": geo_location(),
                "dropoffLocation": geo_location(),
                "additionalDrivers": { "bsonType": "array" },
                "specialRequests": { "bsonType": "string" },
                "paymentStatus": {
                    "bsonType": "string",
                    "enum": Vec::from(reservation::PaymentStatus::VALUES),
                },
                "contractId": { "bsonType": "objectId" },
                "createdAt": { "bsonType": "date" },
                "updatedAt": { "bsonType": "date" },
            },
        },
    }
}

pub fn payments() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["reservationId", "userId", "amount", "currency", "status", "paymentMethod"],
            "properties": {
                "reservationId": { "bsonType": "objectId" },
                "userId": { "bsonType": "objectId" },
                "amount": { "bsonType": "double", "minimum": 0.0 },
                "currency": { "bsonType": "string", "enum": Vec::from(Currency::VALUES) },
                "status": { "bsonType": "string", "enum": Vec::from(payment::PaymentStatus::VALUES) },
                "paymentMethod": { "bsonType": "string", "enum": Vec::from(PaymentMethod::VALUES) },
                "transactionId": { "bsonType": "string" },
                "gatewayResponse": { "bsonType": "object" },
                "refundAmount": { "bsonType": "double", "minimum": 0.0 },
                "refundReason": { "bsonType": "string" },
                "createdAt": { "bsonType": "date" },
                "updatedAt": { "bsonType": "date" },
            },
        },
    }
}

pub fn reviews() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["userId", "targetType", "targetId", "rating", "status"],
            "properties": {
                "userId": { "bsonType": "objectId" },
                "targetType": { "bsonType": "string", "enum": Vec::from(ReviewTarget::TYPES) },
                "targetId": { "bsonType": "objectId" },
                "reservationId": { "bsonType": "objectId" },
                "rating": { "bsonType": "int", "minimum": 1, "maximum": 5 },
                "title": { "bsonType": "string" },
                "comment": { "bsonType": "string" },
                "status": { "bsonType": "string", "enum": Vec::from(ReviewStatus::VALUES) },
                "images": { "bsonType": "array", "items": { "bsonType": "string" } },
                "helpfulVotes": { "bsonType": "int", "minimum": 0 },
                "createdAt": { "bsonType": "date" },
                "updatedAt": { "bsonType": "date" },
            },
        },
    }
}

pub fn support_tickets() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["userId", "subject", "status", "priority"],
            "properties": {
                "userId": { "bsonType": "objectId" },
                "subject": { "bsonType": "string", "minLength": 1 },
                "description": { "bsonType": "string" },
                "status": { "bsonType": "string", "enum": Vec::from(TicketStatus::VALUES) },
                "priority": { "bsonType": "string", "enum": Vec::from(TicketPriority::VALUES) },
                "category": { "bsonType": "string", "enum": Vec::from(TicketCategory::VALUES) },
                "assignedTo": { "bsonType": "objectId" },
                "reservationId": { "bsonType": "objectId" },
                "messages": {
                    "bsonType": "array",
                    "items": {
                        "bsonType": "object",
                        "properties": {
                            "fromUserId": { "bsonType": "objectId" },
                            "message": { "bsonType": "string" },
                            "timestamp": { "bsonType": "date" },
                            "attachments": { "bsonType": "array" },
                        },
                    },
                },
                "createdAt": { "bsonType": "date" },
                "updatedAt": { "bsonType": "date" },
            },
        },
    }
}
