// src/superclass/registry.rs
//! Pre-curated superclass groupings, addressable by name.

use crate::error::{HypernymError, Result};

const LIVING_9: [&str; 9] = [
    "n02084071", // dog, domestic dog, Canis familiaris
    "n01503061", // bird
    "n01767661", // arthropod
    "n01661091", // reptile, reptilian
    "n02469914", // primate
    "n02512053", // fish
    "n02120997", // feline, felid
    "n02401031", // bovid
    "n01627424", // amphibian
];

const MIXED_10: [&str; 10] = [
    "n02084071", // dog
    "n01503061", // bird
    "n02159955", // insect
    "n02484322", // monkey
    "n02958343", // car
    "n02120997", // feline
    "n04490091", // truck
    "n13134947", // fruit
    "n12992868", // fungus
    "n02858304", // boat
];

const MIXED_13: [&str; 13] = [
    "n02084071", // dog
    "n01503061", // bird
    "n02159955", // insect
    "n03405725", // furniture
    "n02512053", // fish
    "n02484322", // monkey
    "n02958343", // car
    "n02120997", // feline
    "n04490091", // truck
    "n13134947", // fruit
    "n12992868", // fungus
    "n02858304", // boat
    "n03082979", // computer
];

/// Names accepted by [`common_superclasses`].
#[must_use]
pub fn group_names() -> &'static [&'static str] {
    &["living_9", "mixed_10", "mixed_13"]
}

/// Fetches a curated grouping by name.
///
/// # Errors
/// [`HypernymError::Config`] for a name outside [`group_names`].
pub fn common_superclasses(name: &str) -> Result<Vec<String>> {
    let wnids: &[&str] = match name {
        "living_9" => &LIVING_9,
        "mixed_10" => &MIXED_10,
        "mixed_13" => &MIXED_13,
        _ => {
            return Err(HypernymError::Config(format!(
                "unknown superclass group '{name}' (expected one of: {})",
                group_names().join(", ")
            )))
        }
    };
    Ok(wnids.iter().map(ToString::to_string).collect())
}
