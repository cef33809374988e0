#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rea_core::common::error::IngestError;
    use rea_core::common::types::RawRecord;
    use rea_ingest::collect::cutoff_for_months;
    use rea_ingest::normalize::{normalize_permit, normalize_property, normalize_sale, SaleKey};
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().expect("fixture must be an object").clone()
    }

    fn recent_date(days_ago: i64) -> String {
        (Utc::now() - Duration::days(days_ago))
            .naive_utc()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    }

    #[test]
    fn property_with_zero_value_is_excluded() {
        let row = raw(json!({
            "account_number": "123",
            "prevvalmarket": "0",
            "prevvalappraised": "0"
        }));
        assert!(normalize_property(&row).unwrap().is_none());
    }

    #[test]
    fn property_value_falls_back_to_second_column() {
        let row = raw(json!({
            "prevvalmarket": null,
            "prevvalappraised": "450000"
        }));
        let record = normalize_property(&row).unwrap().unwrap();
        assert_eq!(record.appraised_value, 450000.0);
    }

    #[test]
    fn property_address_joins_available_parts() {
        let row = raw(json!({
            "property_address": "123 Congress Ave",
            "postal_code": "78701",
            "prevvalmarket": "500000"
        }));
        let record = normalize_property(&row).unwrap().unwrap();
        assert_eq!(record.address, "123 Congress Ave, Austin, TX, 78701");

        let row = raw(json!({ "prevvalmarket": "500000" }));
        let record = normalize_property(&row).unwrap().unwrap();
        assert_eq!(record.address, "Austin, TX");
    }

    #[test]
    fn property_land_value_defaults_on_missing_but_rejects_empty_string() {
        let row = raw(json!({ "prevvalmarket": "500000" }));
        let record = normalize_property(&row).unwrap().unwrap();
        assert_eq!(record.land_value, 0.0);

        let row = raw(json!({
            "prevvalmarket": "500000",
            "appraised_land_value": ""
        }));
        let err = normalize_property(&row).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { field, .. } if field == "appraised_land_value"));
    }

    #[test]
    fn property_square_feet_is_presence_sensitive() {
        // empty string is treated as absent, not as a parse failure
        let row = raw(json!({
            "prevvalmarket": "500000",
            "building_square_feet": "",
            "land_area_square_feet": "8000"
        }));
        let record = normalize_property(&row).unwrap().unwrap();
        assert_eq!(record.square_feet, 0.0);
        assert_eq!(record.lot_size, 8000.0);
    }

    #[test]
    fn property_passthrough_fields_default_to_sentinels() {
        let row = raw(json!({ "prevvalmarket": "500000" }));
        let record = normalize_property(&row).unwrap().unwrap();
        assert_eq!(record.property_type, "Unknown");
        assert_eq!(record.year_built, "");
        assert_eq!(record.zip_code, "");
        assert_eq!(record.id, "");
    }

    #[test]
    fn permit_fields_default_to_empty() {
        let record = normalize_permit(&raw(json!({}))).unwrap().unwrap();
        assert_eq!(record.permit_id, "");
        assert_eq!(record.address, "");
        assert_eq!(record.issued_date, "");
        assert_eq!(record.estimated_cost, 0.0);
    }

    #[test]
    fn permit_with_malformed_cost_is_rejected() {
        let row = raw(json!({
            "permit_number": "2024-001",
            "estimated_cost": "not a number"
        }));
        let err = normalize_permit(&row).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { field, .. } if field == "estimated_cost"));
    }

    #[test]
    fn permit_keeps_rows_with_all_other_fields_missing() {
        let row = raw(json!({ "estimated_cost": "125000.50" }));
        let record = normalize_permit(&row).unwrap().unwrap();
        assert_eq!(record.estimated_cost, 125000.50);
    }

    #[test]
    fn sale_with_zero_price_string_is_excluded_despite_valid_date() {
        let cutoff = cutoff_for_months(12);
        let row = raw(json!({
            "borough": "3",
            "sale_price": "0",
            "sale_date": recent_date(5)
        }));
        assert!(normalize_sale(&row, cutoff, SaleKey::Borough)
            .unwrap()
            .is_none());
    }

    #[test]
    fn sale_with_missing_price_or_date_is_excluded() {
        let cutoff = cutoff_for_months(12);

        let row = raw(json!({ "borough": "3", "sale_date": recent_date(5) }));
        assert!(normalize_sale(&row, cutoff, SaleKey::Borough)
            .unwrap()
            .is_none());

        let row = raw(json!({ "borough": "3", "sale_price": "750000" }));
        assert!(normalize_sale(&row, cutoff, SaleKey::Borough)
            .unwrap()
            .is_none());
    }

    #[test]
    fn sale_older_than_cutoff_is_excluded() {
        let cutoff = cutoff_for_months(12);
        let row = raw(json!({
            "borough": "3",
            "sale_price": "750000",
            "sale_date": "2015-06-01T00:00:00"
        }));
        assert!(normalize_sale(&row, cutoff, SaleKey::Borough)
            .unwrap()
            .is_none());
    }

    #[test]
    fn sale_with_unparsable_date_is_rejected() {
        let cutoff = cutoff_for_months(12);
        let row = raw(json!({
            "borough": "3",
            "sale_price": "750000",
            "sale_date": "yesterday"
        }));
        let err = normalize_sale(&row, cutoff, SaleKey::Borough).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { field, .. } if field == "sale_date"));
    }

    #[test]
    fn sale_date_with_trailing_z_parses() {
        let cutoff = cutoff_for_months(12);
        let row = raw(json!({
            "borough": "1",
            "sale_price": "1200000",
            "sale_date": format!("{}Z", recent_date(3))
        }));
        let record = normalize_sale(&row, cutoff, SaleKey::Borough)
            .unwrap()
            .unwrap();
        assert_eq!(record.area, "Manhattan");
        assert_eq!(record.sale_price, 1200000.0);
    }

    #[test]
    fn sale_borough_codes_map_to_names_and_unknown_codes_pass_through() {
        let cutoff = cutoff_for_months(12);
        let row = raw(json!({
            "borough": 3,
            "sale_price": "980000",
            "sale_date": recent_date(10)
        }));
        let record = normalize_sale(&row, cutoff, SaleKey::Borough)
            .unwrap()
            .unwrap();
        assert_eq!(record.area, "Brooklyn");

        let row = raw(json!({
            "borough": "9",
            "sale_price": "980000",
            "sale_date": recent_date(10)
        }));
        let record = normalize_sale(&row, cutoff, SaleKey::Borough)
            .unwrap()
            .unwrap();
        assert_eq!(record.area, "9");
    }

    #[test]
    fn sale_neighborhood_defaults_to_unknown_only_when_absent() {
        let cutoff = cutoff_for_months(12);
        let row = raw(json!({
            "sale_price": "350000",
            "sale_date": recent_date(20)
        }));
        let record = normalize_sale(&row, cutoff, SaleKey::Neighborhood)
            .unwrap()
            .unwrap();
        assert_eq!(record.area, "Unknown");

        let row = raw(json!({
            "neighborhood": "ASTORIA",
            "sale_price": "350000",
            "sale_date": recent_date(20)
        }));
        let record = normalize_sale(&row, cutoff, SaleKey::Neighborhood)
            .unwrap()
            .unwrap();
        assert_eq!(record.area, "ASTORIA");
    }
}
