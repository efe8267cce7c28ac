use proptest::prelude::*;
use rangers_sim::core::constants::{MAX_CHOICES, MAX_RECENT_EVENTS};
use rangers_sim::core::enums::Faction;
use rangers_sim::core::events::BattleResults;
use rangers_sim::{Runner, SimConfig, SimError};

fn runner(seed: u64) -> Runner {
    Runner::new(SimConfig {
        seed,
        ..Default::default()
    })
}

/// Drive the runner with choices picked from `picks`, reporting battles
/// with the given hull. Returns the number of turns played.
fn play(runner: &mut Runner, picks: &[usize], battle_hp: f64) -> usize {
    let mut turns = 0;
    for (turn, &pick) in picks.iter().enumerate() {
        match runner.generate_choices() {
            Ok(generated) => {
                assert!(generated.choices.len() <= MAX_CHOICES);
                if generated.choices.is_empty() {
                    runner.advance_time(1);
                } else {
                    let index = pick % generated.choices.len();
                    runner.select_choice(index).expect("valid choice");
                }
            }
            Err(SimError::BattleInProgress) => {
                let results = BattleResults {
                    victory: turn % 4 != 0,
                    hp: battle_hp,
                };
                runner.finish_battle(results).expect("battle in progress");
            }
            Err(SimError::GameOver) => break,
            Err(err) => panic!("unexpected error: {err}"),
        }
        turns += 1;
    }
    turns
}

fn fleets(runner: &Runner) -> Vec<u32> {
    Faction::ALL
        .iter()
        .map(|&f| runner.world().fleet_size(f))
        .collect()
}

#[test]
fn property_new_game_seats_every_faction() {
    let runner = runner(5);
    let world = runner.world();
    assert!(world.outcome.is_none());
    assert_eq!(world.game_time.hours(), 0);
    assert!(world.planets.iter().any(|p| p.faction == Faction::Alpha));
    assert!(world.planets.iter().any(|p| p.faction == Faction::Beta));
    assert!(world.planets.iter().any(|p| p.faction == Faction::Gamma));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn property_same_seed_same_session(seed in 1_u64..10_000, picks in prop::collection::vec(0_usize..6, 1..40)) {
        let mut a = runner(seed);
        let mut b = runner(seed);
        play(&mut a, &picks, 0.7);
        play(&mut b, &picks, 0.7);
        prop_assert_eq!(a.save_state().unwrap(), b.save_state().unwrap());
        prop_assert_eq!(a.drain_events(), b.drain_events());
    }

    #[test]
    fn property_fleets_are_conserved(seed in 1_u64..10_000, picks in prop::collection::vec(0_usize..6, 1..40)) {
        let mut runner = runner(seed);
        let initial = fleets(&runner);
        play(&mut runner, &picks, 0.5);

        let world = runner.world();
        for faction in Faction::ALL {
            let i = faction.index();
            prop_assert_eq!(
                world.fleet_size(faction) + world.stats.vessels_lost[i],
                initial[i] + world.stats.vessels_produced[i],
                "fleet of {:?}", faction
            );
        }
    }

    #[test]
    fn property_resources_stay_in_bounds(
        seed in 1_u64..10_000,
        picks in prop::collection::vec(0_usize..6, 1..40),
        battle_hp in -1.0_f64..2.0,
    ) {
        let mut runner = runner(seed);
        play(&mut runner, &picks, battle_hp);

        let world = runner.world();
        let player = &world.player;
        prop_assert!(player.fuel <= player.max_fuel);
        prop_assert!(player.cargo <= player.max_cargo);
        prop_assert!((0.0..=1.0).contains(&player.vessel_hp));
        prop_assert!(world.recent_events().len() <= MAX_RECENT_EVENTS);
        prop_assert!(runner.choices().len() <= MAX_CHOICES);
    }

    #[test]
    fn property_time_never_runs_backwards(seed in 1_u64..10_000, hours in prop::collection::vec(0_u32..30, 1..10)) {
        let mut runner = runner(seed);
        let mut last = runner.world().game_time;
        for h in hours {
            runner.advance_time(h);
            let now = runner.world().game_time;
            prop_assert!(now >= last);
            prop_assert!(now.hours() <= last.hours() + h);
            last = now;
        }
    }
}
