//! Full-game playout tests.
//!
//! These tests drive complete runs through the public API with random
//! legal actions and check that every run ends, that invariants hold at
//! every step, and that runs replay deterministically.

use scoundrel::cards::Card;
use scoundrel::core::{Action, GameRng, MAX_HEALTH};
use scoundrel::rules::{GameEngine, GameResult};

/// Upper bound on actions in one run: 44 plays, one skip and one discard
/// per room at most.
const MAX_ACTIONS: usize = 500;

/// Play random legal actions until the run ends.
fn play_out(engine: &mut GameEngine, rng: &mut GameRng) -> Vec<Action> {
    let mut taken = Vec::new();

    while !engine.is_game_over() && taken.len() < MAX_ACTIONS {
        let actions = engine.legal_actions();
        let action = *rng.choose(&actions).expect("running game has a legal action");

        let outcome = engine.apply(action);
        assert!(outcome.accepted(), "legal action {} was refused: {}", action, outcome.message);
        taken.push(action);
    }

    taken
}

fn sorted_cards(engine: &GameEngine) -> Vec<Card> {
    let mut cards = engine.state().all_cards();
    cards.sort();
    cards
}

/// Random runs always finish with a result.
#[test]
fn test_random_runs_terminate() {
    for seed in 0..50 {
        let mut engine = GameEngine::with_seed(seed);
        let mut rng = GameRng::new(seed + 1000);

        let taken = play_out(&mut engine, &mut rng);

        assert!(taken.len() < MAX_ACTIONS, "seed {} did not finish", seed);
        let result = engine.result().expect("run should be over");
        match result {
            GameResult::Win => {
                assert!(engine.health() > 0);
                assert!(engine.room().is_empty());
                assert_eq!(engine.deck_size(), 0);
            }
            GameResult::Loss => assert_eq!(engine.health(), 0),
        }
    }
}

/// Invariants hold after every action of a random run.
#[test]
fn test_invariants_hold_every_step() {
    let dungeon = Card::dungeon_deck();

    for seed in 0..20 {
        let mut engine = GameEngine::with_seed(seed);
        let mut rng = GameRng::new(seed);

        while !engine.is_game_over() {
            let actions = engine.legal_actions();
            let action = *rng.choose(&actions).unwrap();
            engine.apply(action);

            assert!((0..=MAX_HEALTH).contains(&engine.health()));
            assert!(engine.room().len() <= 4);
            assert!(engine.state().combat.stack_is_ordered());
            assert_eq!(sorted_cards(&engine), dungeon);

            let deck = engine.deck_size();
            assert!(deck == 0 || deck >= 4, "deck left with {} cards", deck);
        }
    }
}

/// The same seed and actions replay the same run.
#[test]
fn test_deterministic_replay() {
    let seed = 12345;

    let mut first = GameEngine::with_seed(seed);
    let taken = play_out(&mut first, &mut GameRng::new(7));

    let mut second = GameEngine::with_seed(seed);
    for action in &taken {
        second.apply(*action);
    }

    assert_eq!(first.health(), second.health());
    assert_eq!(first.result(), second.result());
    assert_eq!(first.history(), second.history());
    assert_eq!(first.discard_pile(), second.discard_pile());
}

/// Skips reshuffle with the run's RNG, so replays that skip stay in sync.
#[test]
fn test_replay_with_skips() {
    let mut first = GameEngine::with_seed(99);
    let mut second = GameEngine::with_seed(99);

    first.skip_room();
    second.skip_room();
    assert_eq!(first.room(), second.room());
    assert_eq!(first.state().deck, second.state().deck);
}

/// A forked run can be played to the end without touching the original.
#[test]
fn test_fork_lookahead() {
    let mut engine = GameEngine::with_seed(8);
    let room = engine.room().to_vec();

    let mut lookahead = engine.fork();
    play_out(&mut lookahead, &mut GameRng::new(3));

    assert!(lookahead.is_game_over());
    assert!(!engine.is_game_over());
    assert_eq!(engine.room(), room.as_slice());
    assert!(engine.history().is_empty());
}
