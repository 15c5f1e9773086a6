//! First-match extraction of address fields from result components.

use crate::types::AddressComponent;

pub(crate) const STREET_TYPES: &[&str] = &["route"];
pub(crate) const LOCALITY_TYPES: &[&str] = &["locality"];
pub(crate) const POSTAL_CODE_TYPES: &[&str] = &["postal_code"];
pub(crate) const COUNTRY_TYPES: &[&str] = &["country"];
/// Region falls back through the administrative levels, broadest first
pub(crate) const REGION_TYPES: &[&str] = &[
    "administrative_area_level_1",
    "administrative_area_level_2",
    "administrative_area_level_3",
];

/// Return the long name of the first component carrying an acceptable tag.
///
/// Acceptable tags are tried in priority order against the whole component
/// list, so an `administrative_area_level_1` match anywhere in the list
/// beats an `administrative_area_level_2` match earlier in it. Returns
/// `None` when no component matches.
pub(crate) fn component_value<'a>(
    components: &'a [AddressComponent],
    acceptable: &[&str],
) -> Option<&'a str> {
    acceptable.iter().find_map(|tag| {
        components
            .iter()
            .find(|c| c.types.iter().any(|t| t == tag))
            .map(|c| c.long_name.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(long_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            short_name: long_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_first_matching_component_wins() {
        let components = vec![
            component("Amphitheatre Pkwy", &["route"]),
            component("Charleston Rd", &["route"]),
        ];
        assert_eq!(
            component_value(&components, STREET_TYPES),
            Some("Amphitheatre Pkwy")
        );
    }

    #[test]
    fn test_no_match_is_none() {
        let components = vec![component("Mountain View", &["locality", "political"])];
        assert_eq!(component_value(&components, POSTAL_CODE_TYPES), None);
        assert_eq!(component_value(&[], COUNTRY_TYPES), None);
    }

    #[test]
    fn test_region_falls_back_to_level_2() {
        let components = vec![
            component("Mountain View", &["locality", "political"]),
            component("Santa Clara County", &["administrative_area_level_2", "political"]),
        ];
        assert_eq!(
            component_value(&components, REGION_TYPES),
            Some("Santa Clara County")
        );
    }

    #[test]
    fn test_region_priority_is_independent_of_scan_order() {
        // level_1 listed after level_2 still wins
        let components = vec![
            component("Santa Clara County", &["administrative_area_level_2", "political"]),
            component("California", &["administrative_area_level_1", "political"]),
        ];
        assert_eq!(component_value(&components, REGION_TYPES), Some("California"));
    }

    #[test]
    fn test_component_with_multiple_types_matches_any() {
        let components = vec![component("United States", &["country", "political"])];
        assert_eq!(
            component_value(&components, COUNTRY_TYPES),
            Some("United States")
        );
    }
}
