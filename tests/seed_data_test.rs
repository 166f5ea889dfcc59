use mongodb::bson::{self, oid::ObjectId, Bson, DateTime};

use car_rental_db::bootstrap::seed;
use car_rental_db::models::payment::{Currency, PaymentMethod};
use car_rental_db::models::reservation::ReservationStatus;
use car_rental_db::models::review::{Review, ReviewStatus, ReviewTarget};
use car_rental_db::models::support_ticket::TicketStatus;
use car_rental_db::models::user::UserRole;
use car_rental_db::models::vehicle::VehicleCategory;
use car_rental_db::schema::validators;

// Low cost keeps the test fast; production seeding uses DEFAULT_COST.
fn test_hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

#[test]
fn admin_user_is_an_active_verified_super_admin() {
    let admin = seed::admin_user(test_hash("ChangeMe123!"));
    assert_eq!(admin.role, UserRole::SuperAdmin);
    assert_eq!(admin.email, "admin@carrentalplatform.com");
    assert!(admin.is_active);
    assert!(admin.email_verified);
    assert!(validators::email_regex().is_match(&admin.email));
    assert!(bcrypt::verify("ChangeMe123!", &admin.password).unwrap());
}

#[test]
fn admin_user_serializes_to_the_stored_field_names() {
    let admin = seed::admin_user(test_hash("secret-password"));
    let doc = bson::to_document(&admin).unwrap();

    assert!(!doc.contains_key("_id"), "unset id must not be stored");
    assert_eq!(doc.get_str("firstName").unwrap(), "System");
    assert_eq!(doc.get_str("lastName").unwrap(), "Administrator");
    assert_eq!(doc.get_str("role").unwrap(), "super_admin");
    assert!(matches!(doc.get("createdAt"), Some(Bson::DateTime(_))));
    assert!(matches!(doc.get("updatedAt"), Some(Bson::DateTime(_))));
    assert!(
        !doc.contains_key("phoneNumber"),
        "absent optional fields must be omitted, not stored as null"
    );
}

#[test]
fn agency_references_its_owner_and_starts_approved() {
    let owner_id = ObjectId::new();
    let agency = seed::sample_agency(owner_id);
    assert_eq!(agency.owner_id, owner_id);
    assert_eq!(agency.name, "Premium Car Rentals");
    assert_eq!(agency.total_reviews, 0);

    let doc = bson::to_document(&agency).unwrap();
    assert_eq!(doc.get_str("status").unwrap(), "approved");
    assert_eq!(doc.get_object_id("ownerId").unwrap(), owner_id);

    let address = doc.get_document("address").unwrap();
    assert_eq!(address.get_str("zipCode").unwrap(), "10001");
    let coordinates = address.get_document("coordinates").unwrap();
    assert!(coordinates.get_f64("latitude").is_ok());
    assert!(coordinates.get_f64("longitude").is_ok());
}

#[test]
fn fleet_seed_builds_two_vehicles_owned_by_the_agency() {
    let agency_id = ObjectId::new();
    let vehicles = seed::sample_vehicles(agency_id);
    assert_eq!(vehicles.len(), 2);
    for v in &vehicles {
        assert_eq!(v.agency_id, agency_id);
        assert!((1990..=2030).contains(&v.year));
        assert!(v.price_per_day >= 0.0);
    }

    let camry = &vehicles[0];
    assert_eq!(camry.make, "Toyota");
    assert_eq!(camry.category, VehicleCategory::Midsize);
    assert_eq!(camry.price_per_day, 45.00);

    let x5 = &vehicles[1];
    assert_eq!(x5.make, "BMW");
    assert_eq!(x5.category, VehicleCategory::Luxury);
    assert_eq!(x5.price_per_day, 95.00);
}

#[test]
fn vehicle_serializes_with_bson_types_the_validator_expects() {
    let vehicles = seed::sample_vehicles(ObjectId::new());
    let doc = bson::to_document(&vehicles[0]).unwrap();

    assert!(matches!(doc.get("year"), Some(Bson::Int32(2023))));
    assert!(matches!(doc.get("pricePerDay"), Some(Bson::Double(_))));
    assert!(matches!(doc.get("seats"), Some(Bson::Int32(5))));
    assert_eq!(doc.get_str("category").unwrap(), "midsize");
    assert_eq!(doc.get_str("fuelType").unwrap(), "gasoline");
    assert_eq!(doc.get_str("transmission").unwrap(), "automatic");

    // [longitude, latitude], the order 2dsphere indexes expect.
    let location = doc.get_document("location").unwrap();
    let coordinates = location.get_array("coordinates").unwrap();
    assert_eq!(coordinates[0], Bson::Double(-74.0060));
    assert_eq!(coordinates[1], Bson::Double(40.7128));
}

#[test]
fn review_target_serializes_as_tagged_type_and_id_pair() {
    let vehicle_id = ObjectId::new();
    let now = DateTime::now();
    let review = Review {
        id: None,
        user_id: ObjectId::new(),
        target: ReviewTarget::Vehicle(vehicle_id),
        reservation_id: None,
        rating: 5,
        title: Some("Great car".to_string()),
        comment: None,
        status: ReviewStatus::Approved,
        images: vec![],
        helpful_votes: 0,
        created_at: now,
        updated_at: now,
    };

    let doc = bson::to_document(&review).unwrap();
    assert_eq!(doc.get_str("targetType").unwrap(), "vehicle");
    assert_eq!(doc.get_object_id("targetId").unwrap(), vehicle_id);
    assert!(matches!(doc.get("rating"), Some(Bson::Int32(5))));

    let round_trip: Review = bson::from_document(doc).unwrap();
    assert_eq!(round_trip.target, ReviewTarget::Vehicle(vehicle_id));
    assert_eq!(round_trip.target.target_id(), vehicle_id);
}

#[test]
fn review_target_resolves_agencies_too() {
    let agency_id = ObjectId::new();
    let target = ReviewTarget::Agency(agency_id);
    let bson_value = bson::to_bson(&target).unwrap();
    let doc = bson_value.as_document().unwrap();
    assert_eq!(doc.get_str("targetType").unwrap(), "agency");
    assert_eq!(doc.get_object_id("targetId").unwrap(), agency_id);
}

#[test]
fn enum_values_match_their_stored_strings() {
    assert_eq!(
        bson::to_bson(&UserRole::AgencyAdmin).unwrap(),
        Bson::String("agency_admin".to_string())
    );
    assert_eq!(
        bson::to_bson(&ReservationStatus::NoShow).unwrap(),
        Bson::String("no_show".to_string())
    );
    assert_eq!(
        bson::to_bson(&PaymentMethod::CreditCard).unwrap(),
        Bson::String("credit_card".to_string())
    );
    assert_eq!(
        bson::to_bson(&Currency::Usd).unwrap(),
        Bson::String("USD".to_string())
    );
    assert_eq!(
        bson::to_bson(&TicketStatus::InProgress).unwrap(),
        Bson::String("in_progress".to_string())
    );
}
