//! Precision scale for geocoding results and the place-type classifier.

use std::collections::HashMap;

/// How precisely a result pins down a location, from coarsest (`Unknown`)
/// to finest (`Premise`). The derived order runs coarse to fine, so
/// `Precision::Address > Precision::Locality`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Unknown,
    Country,
    Region,
    Locality,
    PostalCode,
    Street,
    Address,
    Premise,
}

impl Precision {
    /// Classify a result by its place-type tags.
    ///
    /// Each tag is looked up in the fixed table; tags not in the table are
    /// skipped. The finest matching level wins, so a result tagged both
    /// `country` and `street_address` classifies as `Address`. Returns
    /// `Unknown` when no tag matches, including for an empty tag list.
    pub fn of_types<S: AsRef<str>>(types: &[S]) -> Self {
        types
            .iter()
            .filter_map(|t| PRECISION_BY_TYPE.get(t.as_ref()).copied())
            .max()
            .unwrap_or(Self::Unknown)
    }
}

lazy_static::lazy_static! {
    /// Google place-type tag to precision level
    static ref PRECISION_BY_TYPE: HashMap<&'static str, Precision> = {
        let mut m = HashMap::new();
        m.insert("political", Precision::Unknown);
        m.insert("colloquial_area", Precision::Unknown);
        m.insert("natural_feature", Precision::Unknown);
        m.insert("country", Precision::Country);
        m.insert("administrative_area_level_1", Precision::Region);
        m.insert("administrative_area_level_2", Precision::Region);
        m.insert("administrative_area_level_3", Precision::Region);
        m.insert("locality", Precision::Locality);
        m.insert("sublocality", Precision::PostalCode);
        m.insert("neighborhood", Precision::PostalCode);
        m.insert("postal_code", Precision::PostalCode);
        m.insert("intersection", Precision::Street);
        m.insert("route", Precision::Street);
        m.insert("street_address", Precision::Address);
        m.insert("premise", Precision::Premise);
        m.insert("subpremise", Precision::Premise);
        m.insert("airport", Precision::Premise);
        m.insert("park", Precision::Premise);
        m.insert("point_of_interest", Precision::Premise);
        m
    };
}
