#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::constants::MAX_RECENT_EVENTS;
    use crate::enums::*;
    use crate::mailbox::Mailbox;
    use crate::planet::{Planet, PlanetInfo, PLANETS};
    use crate::player::{Player, TravelParams, UpgradeLevels};
    use crate::rank::{rank, salary};
    use crate::rng::{rand_iterate, rand_iterate_index, RandomSource};
    use crate::types::{GameTime, PlanetId};
    use crate::vessel::VesselDesign;
    use crate::weapons::{find_weapon, try_find_weapon, WEAPONS};
    use crate::world::{Squad, World};

    fn test_design() -> VesselDesign {
        VesselDesign {
            faction: Faction::Alpha,
            image: VesselImage::Player,
            max_hp: 100.0,
            max_energy: 100.0,
            energy_regen: 2.0,
            max_speed: 180.0,
            acceleration: 90.0,
            rotation_speed: 2.2,
            main_weapon: Some(find_weapon("Ion Cannon")),
            secondary_weapon: None,
            challenge: 0,
            elite: false,
            last_defender: false,
        }
    }

    fn test_player() -> Player {
        Player {
            planet: PlanetId(0),
            faction: Faction::Alpha,
            mode: Mode::Orbiting,
            design: test_design(),
            improved_hull: false,
            vessel_hp: 1.0,
            upgrades: UpgradeLevels::default(),
            travel: TravelParams {
                jump_speed: 10.0,
                max_jump_dist: 60.0,
                fuel_usage: 1.0,
            },
            credits: 150,
            fuel: 75,
            max_fuel: 100,
            cargo: 0,
            max_cargo: 40,
            experience: 0,
            battles: 0,
            extra_salary: 0,
            battle_rewards: Mailbox::new(),
        }
    }

    fn test_world() -> World {
        let planets = PLANETS
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, info)| Planet::new(PlanetId(i), info.clone()))
            .collect();
        World::new(test_player(), planets)
    }

    // ---- Rank and salary ----

    #[test]
    fn test_salary_ladder() {
        assert_eq!(salary(0), 4);
        assert_eq!(salary(10), 7);
        assert_eq!(salary(4000), 31);
    }

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(rank(0), 0);
        assert_eq!(rank(1), 1);
        assert_eq!(rank(11), 2);
        assert_eq!(rank(150), 4);
        assert_eq!(rank(151), 5);
        assert_eq!(rank(20000), 11);
        assert_eq!(rank(20001), 12);
    }

    #[test]
    fn test_player_salary_includes_bonus() {
        let mut player = test_player();
        player.experience = 10;
        player.extra_salary = 6;
        assert_eq!(player.salary(), 13);
    }

    // ---- Player clamping ----

    #[test]
    fn test_load_cargo_clamps_to_capacity() {
        let mut player = test_player();
        player.cargo = 35;
        let loaded = player.load_cargo(22);
        assert_eq!(loaded, 5);
        assert_eq!(player.cargo, player.max_cargo);
        assert_eq!(player.load_cargo(3), 0);
    }

    #[test]
    fn test_fuel_and_hull_clamp() {
        let mut player = test_player();
        assert_eq!(player.add_fuel(500), 25);
        assert_eq!(player.fuel, 100);
        player.spend_fuel(1000);
        assert_eq!(player.fuel, 0);

        player.damage_hull(3.0);
        assert_eq!(player.vessel_hp, 0.0);
        player.repair_hull(7.5);
        assert_eq!(player.vessel_hp, 1.0);
    }

    #[test]
    fn test_upgrade_cost_escalates() {
        let mut levels = UpgradeLevels::default();
        assert_eq!(levels.cost(VesselSystem::Armor), 30);
        *levels.level_mut(VesselSystem::Armor) = 3;
        assert_eq!(levels.cost(VesselSystem::Armor), 50);
        assert_eq!(levels.cost(VesselSystem::Speed), 15);
    }

    // ---- World ----

    #[test]
    fn test_event_log_is_bounded_fifo() {
        let mut world = test_world();
        for i in 0..10 {
            world.game_time = GameTime(i);
            world.push_event(format!("event {i}"));
        }
        assert_eq!(world.recent_events().len(), MAX_RECENT_EVENTS);
        let first = world.recent_events().next().unwrap();
        assert_eq!(first.text, "event 4");
        assert_eq!(first.time, GameTime(4));
    }

    #[test]
    fn test_fleet_size_counts_squads() {
        let mut world = test_world();
        world.planets[0].garrison[Faction::Beta.index()] = 4;
        world.planets[2].garrison[Faction::Beta.index()] = 3;
        world.squads.push(Squad {
            faction: Faction::Beta,
            vessels: 5,
            speed: 6.0,
            dist: 40.0,
            destination: PlanetId(1),
        });
        assert_eq!(world.fleet_size(Faction::Beta), 12);
        assert_eq!(world.fleet_size(Faction::Gamma), 0);
    }

    #[test]
    fn test_victory_requires_sole_presence() {
        let mut world = test_world();
        world.planets[0].faction = Faction::Alpha;
        world.planets[0].garrison[Faction::Alpha.index()] = 5;
        assert!(world.player_faction_won());

        world.planets[1].garrison[Faction::Gamma.index()] = 1;
        assert!(!world.player_faction_won(), "stray vessels block victory");

        world.planets[1].garrison[Faction::Gamma.index()] = 0;
        world.planets[2].faction = Faction::Beta;
        assert!(!world.player_faction_won(), "foreign control blocks victory");
    }

    #[test]
    fn test_game_time_formatting() {
        let t = GameTime(24 * 3 + 7);
        assert_eq!(t.day(), 4);
        assert_eq!(t.hour(), 7);
        assert_eq!(t.to_string(), "Day 4, 07:00");
        assert!(GameTime(48).is_day_boundary());
    }

    // ---- Planets ----

    #[test]
    fn test_sole_presence() {
        let mut planet = Planet::new(PlanetId(0), PLANETS[0].clone());
        assert_eq!(planet.sole_presence(), None);
        planet.garrison[Faction::Gamma.index()] = 2;
        assert_eq!(planet.sole_presence(), Some(Faction::Gamma));
        planet.garrison[Faction::Beta.index()] = 1;
        assert_eq!(planet.sole_presence(), None);
        assert_eq!(planet.present_factions().count(), 2);
    }

    #[test]
    fn test_planet_relations() {
        let mut planet = Planet::new(PlanetId(0), PlanetInfo::new("X", "Y", false, 0.0, 0.0));
        assert_eq!(planet.relation_to(Faction::Alpha), Relation::Unclaimed);
        planet.faction = Faction::Alpha;
        assert_eq!(planet.relation_to(Faction::Alpha), Relation::Allied);
        assert_eq!(planet.relation_to(Faction::Beta), Relation::Hostile);
    }

    #[test]
    fn test_planet_timers_stop_at_zero() {
        let mut planet = Planet::new(PlanetId(0), PLANETS[1].clone());
        planet.timers.attack = 0.3;
        planet.timers.tick(0.2);
        planet.timers.tick(0.2);
        assert_eq!(planet.timers.attack, 0.0);
        assert_eq!(planet.timers.capture, 0.0);
    }

    // ---- Weapons ----

    #[test]
    fn test_weapon_bursts_are_consistent() {
        for w in &WEAPONS {
            assert_eq!(w.fire_offsets.len(), w.burst, "{} offsets", w.name);
            assert_eq!(w.rotation_deltas.len(), w.burst, "{} deltas", w.name);
            if !w.primary {
                assert!(!w.blockable, "{} secondary must be unblockable", w.name);
                assert_eq!(w.energy_cost, 0.0);
            }
        }
    }

    #[test]
    fn test_weapon_lookup() {
        assert_eq!(find_weapon("Lance").cost, 900);
        assert!(try_find_weapon("Death Ray").is_none());
    }

    #[test]
    fn test_weapon_impact_visuals() {
        assert_eq!(find_weapon("Photon Cannon").explosion, Some("photon_cannon_impact"));
        assert_eq!(find_weapon("Ion Cannon").explosion_sound, Some("ion_cannon_impact"));
        assert_eq!(find_weapon("Pulse Laser").explosion, None);
        let with_impact = WEAPONS.iter().filter(|w| w.explosion.is_some()).count();
        assert_eq!(with_impact, WEAPONS.len() - 1);
    }

    #[test]
    #[should_panic(expected = "not found")]
    fn test_unknown_weapon_panics() {
        find_weapon("Death Ray");
    }

    #[test]
    fn test_vessel_design_serde_by_weapon_name() {
        let mut design = test_design();
        design.secondary_weapon = Some(find_weapon("Firestorm"));
        let json = serde_json::to_string(&design).unwrap();
        assert!(json.contains("\"Firestorm\""));
        let back: VesselDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, design);
    }

    #[test]
    fn test_vessel_design_rejects_unknown_weapon() {
        let json = serde_json::to_string(&test_design())
            .unwrap()
            .replace("Ion Cannon", "Death Ray");
        assert!(serde_json::from_str::<VesselDesign>(&json).is_err());
    }

    #[test]
    fn test_fit_weapon_uses_matching_slot() {
        let mut design = test_design();
        design.fit_weapon(find_weapon("Torpedo Launcher"));
        design.fit_weapon(find_weapon("Trident"));
        assert_eq!(design.main_weapon.map(|w| w.name), Some("Trident"));
        assert_eq!(design.secondary_weapon.map(|w| w.name), Some("Torpedo Launcher"));
        assert!(design.has_weapon(find_weapon("Trident")));
        assert!(!design.has_weapon(find_weapon("Ion Cannon")));
    }

    // ---- Mailbox ----

    #[test]
    fn test_mailbox_take_once() {
        let mut mailbox = Mailbox::new();
        assert!(mailbox.is_empty());
        mailbox.post(7);
        assert_eq!(mailbox.peek(), Some(&7));
        assert_eq!(mailbox.try_take(), Some(7));
        assert_eq!(mailbox.try_take(), None);
    }

    // ---- Random source ----

    #[test]
    fn test_rand_iterate_finds_only_match() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let items = [1, 4, 9, 16, 25];
        for _ in 0..20 {
            assert_eq!(rand_iterate(&mut rng, &items, |_, &x| x == 16), Some(&16));
        }
        assert_eq!(rand_iterate(&mut rng, &items, |_, &x| x > 100), None);
        assert_eq!(rand_iterate(&mut rng, &[] as &[i32], |_, _| true), None);
    }

    #[test]
    fn test_rand_iterate_single_item_draws_nothing() {
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(rand_iterate_index(&mut a, 1, |_, _| true), Some(0));
        assert_eq!(a.float(), b.float());
    }

    #[test]
    fn test_rand_iterate_visits_every_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = Vec::new();
        rand_iterate_index(&mut rng, 6, |_, i| {
            seen.push(i);
            false
        });
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ranges_are_inclusive_and_degenerate_safe() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let v = rng.int_range(2, 4);
            assert!((2..=4).contains(&v));
            let f = rng.float_range(0.8, 1.6);
            assert!((0.8..1.6).contains(&f));
        }
        assert_eq!(rng.int_range(5, 5), 5);
        assert_eq!(rng.float_range(2.0, 2.0), 2.0);
        assert!(rng.chance(1.0));
        assert!(!rng.chance(0.0));
    }

    #[test]
    fn test_pick_weighted_skips_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let options = [("never", 0.0), ("always", 1.0)];
        for _ in 0..50 {
            assert_eq!(rng.pick_weighted(&options), Some(&"always"));
        }
    }

    // ---- Serde ----

    #[test]
    fn test_world_serde_roundtrip() {
        let mut world = test_world();
        world.push_event("Beta established control over Planet VII");
        world.current_quest = None;
        world.artifacts.push(Artifact::LuckyCharm);
        let json = serde_json::to_string(&world).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back, world);
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(Mode::Attack.encounter_chance(), 1.0);
        assert_eq!(Mode::Docked.encounter_chance(), 0.0);
        assert!(Mode::Sneaking.is_passive());
        assert!(!Mode::Docked.is_passive());
        assert_eq!(Faction::from_index(2), Faction::Beta);
        assert_eq!(Faction::None.name(), "Unknown");
    }
}
