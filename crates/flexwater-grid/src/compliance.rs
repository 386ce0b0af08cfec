//! SoilMap contract compliance helpers.
//!
//! These functions verify that a [`SoilMap`] implementation satisfies the
//! invariants the allocator relies on.

use flexwater_core::{SoilMap, SoilType, TilePos};

/// Probe coordinates far away from any reasonable grid.
const FAR_PROBES: [TilePos; 6] = [
    TilePos::new(i32::MAX, 0),
    TilePos::new(i32::MIN, 0),
    TilePos::new(0, i32::MAX),
    TilePos::new(0, i32::MIN),
    TilePos::new(1_000_000, -1_000_000),
    TilePos::new(-77_777, 77_777),
];

/// Assert that far-away queries answer `NonSoil` instead of failing.
pub fn assert_out_of_range_is_non_soil(map: &dyn SoilMap) {
    for probe in FAR_PROBES {
        assert_eq!(
            map.soil(probe),
            SoilType::NonSoil,
            "soil({probe}) should be NonSoil for an out-of-range tile"
        );
    }
}

/// Assert that repeated queries over a window agree.
pub fn assert_classification_stable(map: &dyn SoilMap) {
    for y in -8..8 {
        for x in -8..8 {
            let t = TilePos::new(x, y);
            assert_eq!(map.soil(t), map.soil(t), "soil({t}) is not stable");
        }
    }
}

/// Run every compliance check on a map.
pub fn run_full_compliance(map: &dyn SoilMap) {
    assert_out_of_range_is_non_soil(map);
    assert_classification_stable(map);
}
