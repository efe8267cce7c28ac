//! Weapon shop stock.

use rangers_core::rng::RandomSource;
use rangers_core::weapons::WEAPONS;

/// Chance that a shop restocks with nothing at all.
const EMPTY_SHOP_CHANCE: f64 = 0.05;

/// Roll a fresh weapon selection: 2-3 distinct catalog weapons, or none.
pub fn roll_weapon_selection<R: RandomSource>(rng: &mut R) -> Vec<String> {
    if rng.chance(EMPTY_SHOP_CHANCE) {
        return Vec::new();
    }
    let count = rng.int_range(2, 3) as usize;
    let mut names: Vec<&'static str> = WEAPONS.iter().map(|w| w.name).collect();
    rng.shuffle(&mut names);
    names.into_iter().take(count).map(String::from).collect()
}
