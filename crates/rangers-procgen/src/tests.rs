#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use rangers_core::enums::{Faction, Mode, VesselImage};
    use rangers_core::weapons::WEAPONS;

    use crate::levelgen::new_world;
    use crate::shop::roll_weapon_selection;
    use crate::vesselgen::{battle_challenge, create_vessel_design, pirate_design};

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    // ---- Challenge ladder ----

    #[test]
    fn test_first_battles_are_tier_zero() {
        let mut rng = rng(1);
        for battles in 0..3 {
            for _ in 0..50 {
                assert_eq!(battle_challenge(&mut rng, battles), 0);
            }
        }
    }

    #[test]
    fn test_challenge_tiers_stay_bounded() {
        let mut rng = rng(2);
        let mut seen = [false; 4];
        for _ in 0..2000 {
            let tier = battle_challenge(&mut rng, 40);
            assert!(tier <= 3);
            seen[tier as usize] = true;
        }
        assert!(seen[3], "veterans should meet tier 3 vessels");
        assert!(seen[0], "low tiers keep residual probability");
    }

    #[test]
    fn test_early_ladder_caps_at_tier_one() {
        let mut rng = rng(3);
        for _ in 0..500 {
            assert!(battle_challenge(&mut rng, 4) <= 1);
            assert!(battle_challenge(&mut rng, 8) <= 2);
        }
    }

    // ---- Vessel designs ----

    #[test]
    fn test_beta_design_ranges() {
        let mut rng = rng(4);
        for _ in 0..300 {
            let d = create_vessel_design(&mut rng, 0, Faction::Beta);
            assert_eq!(d.faction, Faction::Beta);
            assert_eq!(d.challenge, 0);
            assert!(!d.elite, "tier 0 vessels are never elite");
            assert_eq!(d.image, VesselImage::BetaSmall);
            assert!((70.0..=110.0).contains(&d.max_hp));
            assert!((180.0..=240.0).contains(&d.max_speed));
            assert!((80.0..=125.0).contains(&d.max_energy));
            assert!(d.main_weapon.is_some() != d.secondary_weapon.is_some());
        }
    }

    #[test]
    fn test_elite_gamma_trades_speed_for_hull() {
        let mut rng = rng(5);
        let elite = (0..2000)
            .map(|_| create_vessel_design(&mut rng, 30, Faction::Gamma))
            .find(|d| d.elite)
            .expect("an elite should show up");
        assert_eq!(elite.image, VesselImage::GammaBig);
        assert!(elite.max_speed <= 100.0);
        assert!(elite.max_hp >= 110.0 + 70.0 + f64::from(elite.challenge) * 35.0);
    }

    #[test]
    fn test_higher_tiers_carry_two_weapons() {
        let mut rng = rng(6);
        for _ in 0..500 {
            let d = create_vessel_design(&mut rng, 40, Faction::Beta);
            if d.challenge == 3 {
                assert!(d.main_weapon.is_some());
                assert!(d.secondary_weapon.is_some());
                assert!(d.main_weapon.unwrap().primary);
                assert!(!d.secondary_weapon.unwrap().primary);
            }
        }
    }

    #[test]
    #[should_panic(expected = "unexpected faction")]
    fn test_unexpected_faction_panics() {
        create_vessel_design(&mut rng(7), 0, Faction::Alpha);
    }

    #[test]
    fn test_pirates_scale_with_raid_sequence() {
        let mut rng = rng(8);
        for _ in 0..100 {
            let first = pirate_design(&mut rng, 0);
            let third = pirate_design(&mut rng, 2);
            assert!(first.max_hp <= 150.0);
            assert!(third.max_hp >= 220.0);
            assert!(first.is_pirate());
            assert_eq!(first.faction, Faction::None);
        }
    }

    #[test]
    fn test_same_seed_same_design() {
        let a = create_vessel_design(&mut rng(99), 12, Faction::Gamma);
        let b = create_vessel_design(&mut rng(99), 12, Faction::Gamma);
        assert_eq!(a, b);
    }

    // ---- Shop ----

    #[test]
    fn test_weapon_selection_is_distinct() {
        let mut rng = rng(10);
        let mut saw_empty = false;
        for _ in 0..400 {
            let stock = roll_weapon_selection(&mut rng);
            if stock.is_empty() {
                saw_empty = true;
                continue;
            }
            assert!((2..=3).contains(&stock.len()));
            let mut dedup = stock.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), stock.len());
            assert!(stock.iter().all(|n| WEAPONS.iter().any(|w| w.name == n.as_str())));
        }
        assert!(saw_empty, "shops are occasionally empty");
    }

    // ---- Level generation ----

    #[test]
    fn test_new_world_layout() {
        let world = new_world(&mut rng(42));
        assert_eq!(world.planets.len(), 8);
        assert_eq!(world.planets[0].faction, Faction::Alpha);
        assert_eq!(world.planets[2].faction, Faction::Beta);
        assert_eq!(world.planets[7].faction, Faction::Gamma);
        for (i, planet) in world.planets.iter().enumerate() {
            assert_eq!(planet.id.0, i);
            assert!(planet.garrison_limit >= 15);
            assert_eq!(planet.vessels(Faction::None), 0);
            assert_eq!(planet.vessels(Faction::Alpha) > 0, i == 0);
        }

        let player = &world.player;
        assert_eq!(player.faction, Faction::Alpha);
        assert_eq!(player.planet.0, 0);
        assert_eq!(player.mode, Mode::Orbiting);
        assert_eq!((player.credits, player.fuel, player.max_fuel), (150, 75, 100));
        assert_eq!((player.cargo, player.max_cargo), (0, 40));
        assert!((200.0..500.0).contains(&world.timers.pirate));
    }

    #[test]
    fn test_new_world_is_deterministic() {
        let a = new_world(&mut rng(77));
        let b = new_world(&mut rng(77));
        assert_eq!(a, b);
    }
}
