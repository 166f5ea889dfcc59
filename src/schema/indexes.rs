//! Index plans expressing the platform's access patterns.
//!
//! Single-field indexes cover point lookups and filters, compound indexes
//! cover the hot multi-field queries (vehicle availability by date range,
//! fleet filtering by agency/status/category), 2dsphere indexes cover
//! proximity search and text indexes cover name/description search.
//!
//! The unique index on `users.email` is the durable guarantee against
//! duplicate accounts under concurrent signups; it must exist before any
//! user document is inserted.

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use crate::models::{agency, payment, reservation, review, support_ticket, user, vehicle};

/// (collection name, index models) pairs in creation order.
pub fn all() -> Vec<(&'static str, Vec<IndexModel>)> {
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

fn index(keys: mongodb::bson::Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

pub fn users() -> Vec<IndexModel> {
    vec![
        IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build(),
        index(doc! { "role": 1 }),
        index(doc! { "isActive": 1 }),
        index(doc! { "createdAt": 1 }),
    ]
}

pub fn agencies() -> Vec<IndexModel> {
    vec![
        index(doc! { "ownerId": 1 }),
        index(doc! { "status": 1 }),
        index(doc! { "address.coordinates": "2dsphere" }),
        index(doc! { "name": "text", "description": "text" }),
        index(doc! { "rating": -1 }),
    ]
}

pub fn vehicles() -> Vec<IndexModel> {
    vec![
        index(doc! { "agencyId": 1 }),
        index(doc! { "category": 1 }),
        index(doc! { "status": 1 }),
        index(doc! { "pricePerDay": 1 }),
        index(doc! { "location.coordinates": "2dsphere" }),
        index(doc! { "make": 1, "model": 1 }),
        index(doc! { "rating": -1 }),
        // Fleet listing: equality filters on all three fields.
        index(doc! { "agencyId": 1, "status": 1, "category": 1 }),
    ]
}

pub fn reservations() -> Vec<IndexModel> {
    vec![
        index(doc! { "userId": 1 }),
        index(doc! { "vehicleId": 1 }),
        index(doc! { "agencyId": 1 }),
        index(doc! { "status": 1 }),
        index(doc! { "startDate": 1, "endDate": 1 }),
        index(doc! { "paymentStatus": 1 }),
        // Availability checks: date-range overlap scans per vehicle.
        index(doc! { "vehicleId": 1, "startDate": 1, "endDate": 1 }),
    ]
}

pub fn payments() -> Vec<IndexModel> {
    vec![
        index(doc! { "reservationId": 1 }),
        index(doc! { "userId": 1 }),
        index(doc! { "status": 1 }),
        index(doc! { "transactionId": 1 }),
        index(doc! { "createdAt": 1 }),
    ]
}

pub fn reviews() -> Vec<IndexModel> {
    vec![
        index(doc! { "targetType": 1, "targetId": 1 }),
        index(doc! { "userId": 1 }),
        index(doc! { "status": 1 }),
        index(doc! { "rating": 1 }),
        index(doc! { "createdAt": -1 }),
    ]
}

pub fn support_tickets() -> Vec<IndexModel> {
    vec![
        index(doc! { "userId": 1 }),
        index(doc! { "status": 1 }),
        index(doc! { "priority": 1 }),
        index(doc! { "assignedTo": 1 }),
        index(doc! { "category": 1 }),
        index(doc! { "createdAt": -1 }),
    ]
}
