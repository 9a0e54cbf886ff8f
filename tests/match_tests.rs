//! Match-level scenarios driven through `Game` directly.
//!
//! These cover the phase machine end to end:
//! - Human Play phases that wait for an explicit end of turn
//! - Draws from exhausted piles
//! - Knockout, turn-limit and tie resolution
//! - Card conservation across whole automated matches

use card_duel::cards::{Card, CardCatalog};
use card_duel::core::{Controller, MatchConfig, Phase, PlayerId};
use card_duel::game::{Game, Step};
use card_duel::rules::GameResult;
use proptest::prelude::*;

fn both_human() -> MatchConfig {
    MatchConfig::default()
        .with_seed(42)
        .with_controller(PlayerId::SECOND, Controller::Human)
}

/// Step until a Play phase waits on the active human, then end it.
fn pass_turn(game: &mut Game) {
    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);
    game.end_turn().expect("human turn should end");
}

#[test]
fn test_play_index_zero_then_signal() {
    let mut game = Game::new(MatchConfig::default().with_seed(1)).unwrap();
    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);

    let hand_before = game.player(PlayerId::FIRST).hand().len();
    let outcome = game.play_card(PlayerId::FIRST, 0).unwrap();
    assert_eq!(outcome.player, PlayerId::FIRST);
    assert_eq!(game.phase(), Phase::Play);
    assert_eq!(game.player(PlayerId::FIRST).hand().len(), hand_before - 1);
    assert_eq!(game.discard_len(), 1);

    // Still waiting until the turn is ended
    assert_eq!(game.step(), Step::AwaitingEndTurn);
    game.end_turn().unwrap();
    assert_eq!(game.step(), Step::Advanced(Phase::Draw));
    assert_eq!(game.active_player(), PlayerId::SECOND);
    assert_eq!(game.turn(), 1);
}

#[test]
fn test_draw_from_empty_piles_is_noop() {
    let mut catalog = CardCatalog::new();
    for power in 1..=10 {
        catalog.register(Card::unit(format!("Unit {power}"), power));
    }
    let mut game = Game::with_catalog(MatchConfig::default().with_seed(3), catalog).unwrap();
    assert_eq!(game.deck_len(), 0);
    assert_eq!(game.discard_len(), 0);

    assert_eq!(game.step(), Step::Advanced(Phase::Play));
    assert_eq!(game.player(PlayerId::FIRST).hand().len(), 5);
    assert_eq!(game.total_cards(), 10);
}

#[test]
fn test_draw_reshuffles_discard_pile() {
    let mut catalog = CardCatalog::new();
    for power in 1..=10 {
        catalog.register(Card::unit(format!("Unit {power}"), power));
    }
    let mut game = Game::with_catalog(both_human(), catalog).unwrap();

    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);
    game.play_card(PlayerId::FIRST, 0).unwrap();
    game.end_turn().unwrap();

    // Player 2's draw pulls the only discarded card back
    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);
    assert_eq!(game.discard_len(), 0);
    assert_eq!(game.deck_len(), 0);
    assert_eq!(game.player(PlayerId::SECOND).hand().len(), 6);
    assert_eq!(game.player(PlayerId::SECOND).hand()[5].name(), "Unit 1");
}

#[test]
fn test_knockout_by_damage() {
    let mut game = Game::new(MatchConfig::default().with_seed(5)).unwrap();
    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);

    game.player_mut(PlayerId::FIRST).take_damage(100);
    assert_eq!(game.phase(), Phase::Play);
    game.end_turn().unwrap();

    assert_eq!(game.step(), Step::Advanced(Phase::GameOver));
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::SECOND)));
    assert_eq!(game.turn(), 0);
    assert_eq!(
        game.report().unwrap().summary(),
        "Game Over! Player 2 wins!\nFinal Score: Player 1: 0, Player 2: 0"
    );
}

#[test]
fn test_double_knockout_goes_to_second_seat() {
    let mut game = Game::new(both_human()).unwrap();
    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);

    for seat in PlayerId::all() {
        game.player_mut(seat).take_damage(500);
    }
    game.end_turn().unwrap();
    game.step();
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::SECOND)));
}

#[test]
fn test_empty_hand_knocks_out() {
    let mut game = Game::new(MatchConfig::default().with_seed(9)).unwrap();
    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);

    // Soldier, Knight, Dragon, Commander, Titan and the drawn Fireball
    while !game.player(PlayerId::FIRST).hand().is_empty() {
        game.play_card(PlayerId::FIRST, 0).unwrap();
    }
    let actor = game.player(PlayerId::FIRST);
    assert_eq!(actor.score(), 1 + 3 + 5 + 7 + 9);
    assert_eq!(actor.health(), 97);
    assert!(actor.is_knocked_out());

    game.end_turn().unwrap();
    game.step();
    assert!(game.is_over());
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::SECOND)));
}

#[test]
fn test_turn_limit_tie() {
    let mut game = Game::new(both_human()).unwrap();
    while !game.is_over() {
        pass_turn(&mut game);
        game.step();
    }

    assert_eq!(game.turn(), 20);
    assert_eq!(game.result(), Some(GameResult::Tie));
    assert_eq!(game.report().unwrap().summary().lines().next(), Some("Game Over! It's a tie!"));
}

#[test]
fn test_higher_score_wins_at_limit() {
    let mut game = Game::new(both_human().with_turn_limit(2)).unwrap();

    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);
    game.play_card(PlayerId::FIRST, 0).unwrap(); // Soldier
    game.end_turn().unwrap();

    assert_eq!(game.run_until_blocked(), Step::AwaitingEndTurn);
    game.play_card(PlayerId::SECOND, 4).unwrap(); // Legend
    game.end_turn().unwrap();

    pass_turn(&mut game);
    game.step();

    assert!(game.is_over());
    assert_eq!(game.turn(), 2);
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::SECOND)));
    let report = game.report().unwrap();
    assert_eq!(report.winner_name(), Some("Player 2"));
}

#[test]
fn test_other_seat_cannot_play() {
    let mut game = Game::new(both_human()).unwrap();
    game.run_until_blocked();
    assert!(game.play_card(PlayerId::SECOND, 0).is_err());
    assert_eq!(game.player(PlayerId::SECOND).hand().len(), 5);
}

#[test]
fn test_snapshot_serializes() {
    let mut game = Game::new(MatchConfig::default().with_seed(11)).unwrap();
    game.run_until_blocked();
    game.play_card(PlayerId::FIRST, 0).unwrap();

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: card_duel::game::GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
    assert_eq!(back.active().hand.len(), 5);
    assert_eq!(back.last_play.unwrap().card.name, "Soldier");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_automated_match_conserves_cards(seed in any::<u64>()) {
        let mut game = Game::new(MatchConfig::default().with_seed(seed).all_automated()).unwrap();
        let total = game.total_cards();
        while !game.is_over() {
            game.step();
            prop_assert_eq!(game.total_cards(), total);
            prop_assert!(game.turn() <= game.config().turn_limit);
        }
        prop_assert!(game.result().is_some());
    }

    #[test]
    fn prop_resources_stay_in_range(seed in any::<u64>()) {
        let mut game = Game::new(MatchConfig::default().with_seed(seed).all_automated()).unwrap();
        game.run_until_blocked();
        for (_, player) in game.players().iter() {
            prop_assert!(player.health() <= player.max_health());
            prop_assert!(player.mana() <= player.max_mana());
        }
    }
}
