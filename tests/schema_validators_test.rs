use mongodb::bson::{Bson, Document};

use car_rental_db::schema::validators;

fn json_schema(validator: &Document) -> &Document {
    validator
        .get_document("$jsonSchema")
        .expect("validator must wrap a $jsonSchema document")
}

fn required_fields(validator: &Document) -> Vec<&str> {
    json_schema(validator)
        .get_array("required")
        .expect("schema must list required fields")
        .iter()
        .filter_map(Bson::as_str)
        .collect()
}

fn properties(validator: &Document) -> &Document {
    json_schema(validator).get_document("properties").unwrap()
}

fn enum_values(field: &Document) -> Vec<&str> {
    field
        .get_array("enum")
        .unwrap()
        .iter()
        .filter_map(Bson::as_str)
        .collect()
}

#[test]
fn registry_covers_all_seven_collections() {
    let names: Vec<&str> = validators::all().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "users",
            "agencies",
            "vehicles",
            "reservations",
            "payments",
            "reviews",
            "supportTickets"
        ]
    );
    for (name, validator) in validators::all() {
        assert_eq!(
            json_schema(&validator).get_str("bsonType").unwrap(),
            "object",
            "{} validator must constrain an object",
            name
        );
    }
}

#[test]
fn users_schema_requires_identity_fields_and_shapes_email() {
    let validator = validators::users();
    assert_eq!(
        required_fields(&validator),
        vec!["email", "password", "firstName", "lastName", "role"]
    );

    let props = properties(&validator);
    let email = props.get_document("email").unwrap();
    assert_eq!(email.get_str("pattern").unwrap(), validators::EMAIL_PATTERN);

    let password = props.get_document("password").unwrap();
    assert_eq!(password.get_i32("minLength").unwrap(), 6);

    let role = props.get_document("role").unwrap();
    assert_eq!(
        enum_values(role),
        vec!["customer", "agency_admin", "super_admin"]
    );
}

#[test]
fn email_pattern_accepts_and_rejects_as_declared() {
    let re = validators::email_regex();
    assert!(re.is_match("admin@carrentalplatform.com"));
    assert!(re.is_match("info@premiumcars.com"));
    assert!(!re.is_match("not-an-email"));
    assert!(!re.is_match("missing@tld"));
    assert!(!re.is_match("@nouser.com"));
}

#[test]
fn vehicles_schema_bounds_year_and_price() {
    let validator = validators::vehicles();
    let required = required_fields(&validator);
    assert!(required.contains(&"pricePerDay"));
    assert!(required.contains(&"year"));
    assert!(required.contains(&"agencyId"));

    let props = properties(&validator);
    let year = props.get_document("year").unwrap();
    assert_eq!(year.get_str("bsonType").unwrap(), "int");
    assert_eq!(year.get_i32("minimum").unwrap(), 1990);
    assert_eq!(year.get_i32("maximum").unwrap(), 2030);

    let price = props.get_document("pricePerDay").unwrap();
    assert_eq!(price.get_str("bsonType").unwrap(), "double");
    assert_eq!(price.get_f64("minimum").unwrap(), 0.0);

    let category = props.get_document("category").unwrap();
    assert_eq!(enum_values(category).len(), 8);
    assert!(enum_values(category).contains(&"midsize"));
    assert!(enum_values(category).contains(&"luxury"));
}

#[test]
fn reviews_schema_bounds_rating_to_whole_stars() {
    let validator = validators::reviews();
    let props = properties(&validator);
    let rating = props.get_document("rating").unwrap();
    assert_eq!(rating.get_str("bsonType").unwrap(), "int");
    assert_eq!(rating.get_i32("minimum").unwrap(), 1);
    assert_eq!(rating.get_i32("maximum").unwrap(), 5);

    let target_type = props.get_document("targetType").unwrap();
    assert_eq!(enum_values(target_type), vec!["vehicle", "agency"]);
}

#[test]
fn agencies_schema_requires_address_core_fields() {
    let validator = validators::agencies();
    assert!(required_fields(&validator).contains(&"ownerId"));

    let props = properties(&validator);
    let address = props.get_document("address").unwrap();
    let address_required: Vec<&str> = address
        .get_array("required")
        .unwrap()
        .iter()
        .filter_map(Bson::as_str)
        .collect();
    assert_eq!(address_required, vec!["street", "city", "country"]);

    let rating = props.get_document("rating").unwrap();
    assert_eq!(rating.get_f64("minimum").unwrap(), 0.0);
    assert_eq!(rating.get_f64("maximum").unwrap(), 5.0);
}

#[test]
fn reservations_schema_distinguishes_booking_and_payment_status() {
    let validator = validators::reservations();
    let props = properties(&validator);

    let status = props.get_document("status").unwrap();
    assert_eq!(
        enum_values(status),
        vec![
            "pending",
            "confirmed",
            "active",
            "completed",
            "cancelled",
            "no_show"
        ]
    );

    let payment_status = props.get_document("paymentStatus").unwrap();
    assert_eq!(
        enum_values(payment_status),
        vec!["pending", "paid", "refunded", "failed"]
    );
}

#[test]
fn support_tickets_schema_validates_messages_element_wise() {
    let validator = validators::support_tickets();
    let props = properties(&validator);

    let messages = props.get_document("messages").unwrap();
    assert_eq!(messages.get_str("bsonType").unwrap(), "array");
    let items = messages.get_document("items").unwrap();
    let item_props = items.get_document("properties").unwrap();
    assert!(item_props.contains_key("fromUserId"));
    assert!(item_props.contains_key("message"));
    assert!(item_props.contains_key("timestamp"));
    assert!(item_props.contains_key("attachments"));
}
