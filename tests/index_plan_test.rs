use mongodb::bson::Bson;
use mongodb::IndexModel;

use car_rental_db::schema::indexes;

fn key_names(model: &IndexModel) -> Vec<&str> {
    model.keys.keys().map(String::as_str).collect()
}

fn has_keys(models: &[IndexModel], expected: &[&str]) -> bool {
    models.iter().any(|m| key_names(m) == expected)
}

#[test]
fn plan_covers_all_seven_collections() {
    let names: Vec<&str> = indexes::all().iter().map(|(name, _)| *name).collect();
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
    for (name, models) in indexes::all() {
        assert!(!models.is_empty(), "{} must declare indexes", name);
    }
}

#[test]
fn user_email_index_is_unique() {
    let models = indexes::users();
    let email = models
        .iter()
        .find(|m| key_names(m) == ["email"])
        .expect("users must index email");
    let options = email.options.as_ref().expect("email index carries options");
    assert_eq!(options.unique, Some(true));
}

#[test]
fn vehicle_fleet_filter_uses_compound_index_in_declared_order() {
    // Queries filtering {agencyId, status, category} must be satisfiable
    // without a collection scan, so the key order matters.
    let models = indexes::vehicles();
    assert!(has_keys(&models, &["agencyId", "status", "category"]));
}

#[test]
fn reservation_availability_index_pairs_vehicle_with_date_range() {
    let models = indexes::reservations();
    assert!(has_keys(&models, &["vehicleId", "startDate", "endDate"]));
    assert!(has_keys(&models, &["startDate", "endDate"]));
}

#[test]
fn geo_indexes_are_2dsphere() {
    let agencies = indexes::agencies();
    let geo = agencies
        .iter()
        .find(|m| key_names(m) == ["address.coordinates"])
        .expect("agencies must geo-index address coordinates");
    assert_eq!(
        geo.keys.get("address.coordinates"),
        Some(&Bson::String("2dsphere".to_string()))
    );

    let vehicles = indexes::vehicles();
    let geo = vehicles
        .iter()
        .find(|m| key_names(m) == ["location.coordinates"])
        .expect("vehicles must geo-index location coordinates");
    assert_eq!(
        geo.keys.get("location.coordinates"),
        Some(&Bson::String("2dsphere".to_string()))
    );
}

#[test]
fn agency_search_uses_text_index_on_name_and_description() {
    let models = indexes::agencies();
    let text = models
        .iter()
        .find(|m| key_names(m) == ["name", "description"])
        .expect("agencies must text-index name and description");
    assert_eq!(text.keys.get("name"), Some(&Bson::String("text".to_string())));
    assert_eq!(
        text.keys.get("description"),
        Some(&Bson::String("text".to_string()))
    );
}

#[test]
fn review_lookup_index_leads_with_target_type() {
    let models = indexes::reviews();
    assert!(has_keys(&models, &["targetType", "targetId"]));
}

#[test]
fn recency_indexes_are_descending() {
    let reviews = indexes::reviews();
    let created = reviews
        .iter()
        .find(|m| key_names(m) == ["createdAt"])
        .expect("reviews must index createdAt");
    assert_eq!(created.keys.get("createdAt"), Some(&Bson::Int32(-1)));
}
