//! Resource name construction
//!
//! The remote API addresses every resource by a canonical string of the form
//! `customers/{customer_id}/{collection}/{id}`. Collections keyed by two ids
//! (ad group ads, ad group criteria, listing group filters) join parent and
//! child with `~`. A negative id is a placeholder valid only as a forward
//! reference within a single batch.

/// Id used for placeholder resource names inside an atomic batch.
pub const TEMP_ID: i64 = -1;

/// Build a canonical resource name.
pub fn resource_name(customer_id: &str, collection: &str, id: &str) -> String {
    format!("customers/{}/{}/{}", customer_id, collection, id)
}

/// Build a placeholder resource name for a resource created earlier in the
/// same batch. Must never be persisted or reused across batches.
pub fn temp_resource_name(customer_id: &str, collection: &str) -> String {
    resource_name(customer_id, collection, &TEMP_ID.to_string())
}

/// Join a parent and child id into the remote API's composite-key form.
pub fn composite_id(parent_id: &str, child_id: &str) -> String {
    format!("{}~{}", parent_id, child_id)
}

/// Geo target constants are global, not customer-scoped.
pub fn geo_target_constant(location_id: i64) -> String {
    format!("geoTargetConstants/{}", location_id)
}

/// Language constants are global, not customer-scoped.
pub fn language_constant(language_id: i64) -> String {
    format!("languageConstants/{}", language_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_format() {
        assert_eq!(
            resource_name("1234567890", "campaigns", "123"),
            "customers/1234567890/campaigns/123"
        );
    }

    #[test]
    fn test_resource_name_round_trip_id() {
        let name = resource_name("1234567890", "campaigns", "123");
        let last = name.split('/').next_back().unwrap();
        assert_eq!(last, "123");
    }

    #[test]
    fn test_temp_resource_name_is_negative() {
        assert_eq!(
            temp_resource_name("1234567890", "campaignBudgets"),
            "customers/1234567890/campaignBudgets/-1"
        );
    }

    #[test]
    fn test_composite_id_tilde_join() {
        assert_eq!(composite_id("555", "777"), "555~777");
        assert_eq!(
            resource_name("1234567890", "adGroupAds", &composite_id("555", "777")),
            "customers/1234567890/adGroupAds/555~777"
        );
    }

    #[test]
    fn test_constant_names_are_global() {
        assert_eq!(geo_target_constant(2840), "geoTargetConstants/2840");
        assert_eq!(language_constant(1000), "languageConstants/1000");
    }
}
