//! Fixed world layout: every plant, campfire and Scouter on the map.

use bevy::prelude::*;
use crate::shared::*;

/// (x, kind, mirrored)
pub const PLANT_LAYOUT: [(f32, PlantKind, bool); 56] = [
    (140.0, PlantKind::Pine, false),
    (330.0, PlantKind::Pine, true),
    (600.0, PlantKind::Birch, false),
    (1500.0, PlantKind::Birch, false),
    (1700.0, PlantKind::Pine, true),
    (2000.0, PlantKind::Birch, true),
    (2400.0, PlantKind::Pine, false),
    (2600.0, PlantKind::Pine, false),
    (3000.0, PlantKind::Birch, false),
    (3200.0, PlantKind::Birch, false),
    (3450.0, PlantKind::Birch, true),
    (3100.0, PlantKind::Cotton, true),
    (3300.0, PlantKind::Cotton, false),
    (3600.0, PlantKind::Cotton, false),
    (3700.0, PlantKind::Cotton, true),
    (3750.0, PlantKind::Cotton, true),
    (3810.0, PlantKind::Cotton, false),
    (3880.0, PlantKind::Cotton, false),
    (3930.0, PlantKind::Cotton, true),
    (4000.0, PlantKind::Cotton, false),
    (4090.0, PlantKind::Cotton, true),
    (4150.0, PlantKind::Cotton, true),
    (4220.0, PlantKind::Cotton, false),
    (4300.0, PlantKind::Cotton, false),
    (4350.0, PlantKind::Cotton, true),
    (4850.0, PlantKind::Pine, false),
    (5000.0, PlantKind::Cotton, true),
    (5100.0, PlantKind::Cotton, false),
    (5170.0, PlantKind::Cotton, true),
    (5220.0, PlantKind::Cotton, true),
    (5300.0, PlantKind::Cotton, false),
    (5400.0, PlantKind::Cotton, false),
    (5480.0, PlantKind::Cotton, true),
    (5540.0, PlantKind::Cotton, true),
    (5640.0, PlantKind::Cotton, true),
    (5720.0, PlantKind::Cotton, false),
    (5820.0, PlantKind::Cotton, false),
    (5910.0, PlantKind::Cotton, true),
    (6020.0, PlantKind::Cotton, false),
    (6200.0, PlantKind::Birch, true),
    (6400.0, PlantKind::Birch, false),
    (6300.0, PlantKind::Cotton, false),
    (6500.0, PlantKind::Cotton, true),
    (6650.0, PlantKind::Pine, false),
    (6550.0, PlantKind::Birch, true),
    (6790.0, PlantKind::Pine, true),
    (6900.0, PlantKind::Birch, false),
    (7200.0, PlantKind::Pine, false),
    (7500.0, PlantKind::Pine, true),
    (7740.0, PlantKind::Birch, true),
    (7700.0, PlantKind::Cotton, true),
    (7900.0, PlantKind::Pine, false),
    (8070.0, PlantKind::Pine, true),
    (8300.0, PlantKind::Pine, true),
    (8600.0, PlantKind::Birch, false),
    (8480.0, PlantKind::PortaPotty, false),
];

pub const CAMPFIRE_XS: [f32; 2] = [1200.0, 4550.0];

pub const SCOUTER_LAYOUT: [(f32, ScouterName); 3] = [
    (1000.0, ScouterName::Bryant),
    (1450.0, ScouterName::Hubert),
    (4400.0, ScouterName::Braydon),
];

pub const SCOUTER_SIZE: Vec2 = Vec2::new(60.0, 150.0);

/// Base point of a plant: centre x, bottom y.
pub fn plant_base(x: f32, kind: PlantKind) -> Vec2 {
    Vec2::new(x, GROUND_Y + kind.profile().sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_counts() {
        assert_eq!(PLANT_LAYOUT.len(), 56);
        let potties: Vec<_> = PLANT_LAYOUT
            .iter()
            .filter(|(_, kind, _)| *kind == PlantKind::PortaPotty)
            .collect();
        assert_eq!(potties.len(), 1);
        assert_eq!(potties[0].0, 8480.0);
        assert!(PLANT_LAYOUT.iter().all(|(x, _, _)| *x >= 0.0 && *x <= MAP_END));
    }

    #[test]
    fn test_pines_sink_below_ground() {
        assert_eq!(plant_base(140.0, PlantKind::Pine).y, GROUND_Y + 4.0);
        assert_eq!(plant_base(600.0, PlantKind::Birch).y, GROUND_Y);
    }
}
