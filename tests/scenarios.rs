//! End-to-end game scenarios driven through the public engine API.

use farkle_house::config::{LastTurnFarkle, PassedPoints, Rules};
use farkle_house::core::Command;
use farkle_house::{GameError, Mode, TurnEngine};

fn engine_with(rules: Rules, names: &[&str]) -> TurnEngine {
    let mut engine = TurnEngine::new(rules);
    for name in names {
        engine.add_player(name).unwrap();
    }
    engine
}

fn house(names: &[&str]) -> TurnEngine {
    engine_with(Rules::default(), names)
}

fn bank(engine: &mut TurnEngine, points: u32) {
    engine.add_points(points).unwrap();
    engine.bank_turn().unwrap();
}

fn scores(engine: &TurnEngine) -> Vec<u32> {
    engine.state().players().iter().map(|p| p.score).collect()
}

fn queue(engine: &TurnEngine) -> Vec<usize> {
    engine
        .state()
        .final_round()
        .map(|r| r.remaining().iter().copied().collect())
        .unwrap_or_default()
}

/// Three players with opening scores of 600, 500 and 1500; Ada to play.
fn three_openers() -> TurnEngine {
    let mut engine = house(&["Ada", "Bo", "Cy"]);
    bank(&mut engine, 600);
    bank(&mut engine, 500);
    bank(&mut engine, 1_500);
    assert_eq!(engine.state().current_turn(), 0);
    engine
}

/// `three_openers`, then Ada banks up to exactly 10000.
fn three_in_final_round() -> TurnEngine {
    let mut engine = three_openers();
    bank(&mut engine, 9_400);
    assert_eq!(engine.state().players().score(0), 10_000);
    engine
}

#[test]
fn scenario_a_claim_takes_the_pool() {
    let mut engine = house(&["P1", "P2"]);
    bank(&mut engine, 550);
    assert_eq!(scores(&engine), vec![550, 0]);
    assert_eq!(engine.state().current_turn(), 1);

    engine.add_points(300).unwrap();
    let state = engine.declare_farkle().unwrap();
    let chain = state.steal().copied().unwrap();
    assert_eq!(chain.pool(), 300);
    assert_eq!(chain.stealer(), 0);
    assert_eq!(chain.original_farkler(), 1);
    assert_eq!(state.turn_points(), 0);

    let state = engine.claim_steal().unwrap();
    assert_eq!(state.players().score(0), 850);
    assert_eq!(state.players().score(1), 0);
    assert_eq!(state.current_turn(), 0);
    assert_eq!(state.mode(), &Mode::Normal);
}

#[test]
fn scenario_b_pass_forfeits_the_pool() {
    let mut engine = house(&["P1", "P2"]);
    bank(&mut engine, 550);
    engine.add_points(300).unwrap();
    engine.declare_farkle().unwrap();

    let state = engine.pass_farkle().unwrap();
    assert_eq!(state.mode(), &Mode::Normal);
    assert_eq!(state.players().score(0), 550);
    assert_eq!(state.players().score(1), 0);
    assert_eq!(state.current_turn(), 1);
    assert_eq!(state.turn_points(), 0);
}

#[test]
fn scenario_c_final_round_runs_the_queue() {
    let mut engine = three_in_final_round();
    assert!(engine.state().in_final_round());
    assert_eq!(engine.state().final_round().unwrap().starter(), 0);
    assert_eq!(queue(&engine), vec![1, 2]);
    assert_eq!(engine.state().current_turn(), 1);

    bank(&mut engine, 200);
    assert_eq!(queue(&engine), vec![2]);
    assert_eq!(engine.state().current_turn(), 2);
    assert!(!engine.state().is_game_over());

    bank(&mut engine, 9_000);
    let state = engine.state();
    assert_eq!(state.players().score(2), 10_500);
    assert!(queue(&engine).is_empty());
    assert!(state.is_game_over());
    assert_eq!(state.winner_index(), Some(2));
    assert_eq!(engine.winner().map(|p| p.name.as_str()), Some("Cy"));
}

#[test]
fn scenario_d_farkle_without_points_is_rejected() {
    let mut engine = house(&["P1", "P2"]);
    let before = engine.state().clone();

    assert_eq!(engine.declare_farkle(), Err(GameError::NoUnbankedPoints));
    assert_eq!(engine.state(), &before);
}

#[test]
fn opening_bank_needs_minimum() {
    let mut engine = house(&["Ada", "Bo"]);
    engine.add_points(450).unwrap();
    let before = engine.state().clone();

    assert_eq!(
        engine.bank_turn(),
        Err(GameError::BelowMinimumOpeningScore {
            required: 500,
            offered: 450
        })
    );
    assert_eq!(engine.state(), &before);

    engine.add_points(50).unwrap();
    let state = engine.bank_turn().unwrap();
    assert_eq!(state.players().score(0), 500);
}

#[test]
fn minimum_only_applies_to_the_opening_bank() {
    let mut engine = house(&["Ada", "Bo"]);
    bank(&mut engine, 500);
    bank(&mut engine, 500);
    bank(&mut engine, 50);
    assert_eq!(scores(&engine), vec![550, 500]);
}

#[test]
fn minimum_opening_is_configurable() {
    let rules = Rules::builder().minimum_opening(1_000).build().unwrap();
    let mut engine = engine_with(rules, &["Ada", "Bo"]);
    engine.add_points(900).unwrap();
    assert!(matches!(
        engine.bank_turn(),
        Err(GameError::BelowMinimumOpeningScore { required: 1_000, .. })
    ));
}

#[test]
fn farkle_needs_two_players() {
    let mut engine = house(&["Ada"]);
    engine.add_points(300).unwrap();
    assert_eq!(
        engine.declare_farkle(),
        Err(GameError::InsufficientPlayers { count: 1 })
    );
}

#[test]
fn passed_points_join_the_pool() {
    let mut engine = house(&["Ada", "Bo", "Cy"]);
    engine.add_points(300).unwrap();
    engine.declare_farkle().unwrap();

    // Bo tries, adds 200, then busts.
    engine.add_points(200).unwrap();
    let state = engine.pass_farkle().unwrap();
    let chain = state.steal().copied().unwrap();
    assert_eq!(chain.stealer(), 2);
    assert_eq!(chain.pool(), 500);
    assert_eq!(state.turn_points(), 0);

    // Cy adds 100 and claims everything.
    engine.add_points(100).unwrap();
    let state = engine.claim_steal().unwrap();
    assert_eq!(state.players().score(2), 600);
    assert_eq!(state.current_turn(), 2);
    assert_eq!(state.turn_points(), 0);
    assert_eq!(
        state.players().get(2).unwrap().last_action.as_deref(),
        Some("Stole 600")
    );
}

#[test]
fn passed_points_can_be_discarded() {
    let rules = Rules::builder()
        .passed_points(PassedPoints::Discard)
        .build()
        .unwrap();
    let mut engine = engine_with(rules, &["Ada", "Bo", "Cy"]);
    engine.add_points(300).unwrap();
    engine.declare_farkle().unwrap();
    engine.add_points(200).unwrap();

    let state = engine.pass_farkle().unwrap();
    assert_eq!(state.steal().unwrap().pool(), 300);
}

#[test]
fn chain_returns_to_farkler_after_every_other_seat() {
    let mut engine = house(&["Ada", "Bo", "Cy", "Di"]);
    bank(&mut engine, 500);
    engine.add_points(700).unwrap();
    engine.declare_farkle().unwrap();

    let mut offered = vec![engine.state().steal().unwrap().stealer()];
    while engine.state().in_steal_phase() {
        engine.pass_farkle().unwrap();
        if let Some(chain) = engine.state().steal() {
            offered.push(chain.stealer());
        }
    }

    assert_eq!(offered, vec![2, 3, 0]);
    assert_eq!(engine.state().current_turn(), 1);
    assert_eq!(scores(&engine), vec![500, 0, 0, 0]);
}

#[test]
fn decline_starts_a_fresh_turn_for_the_stealer() {
    let mut engine = house(&["Ada", "Bo", "Cy"]);
    engine.add_points(400).unwrap();
    engine.declare_farkle().unwrap();
    engine.add_points(150).unwrap();

    let state = engine.decline_steal().unwrap();
    assert_eq!(state.mode(), &Mode::Normal);
    assert_eq!(state.current_turn(), 1);
    assert_eq!(state.turn_points(), 0);
    assert_eq!(scores(&engine), vec![0, 0, 0]);
}

#[test]
fn decline_can_be_disabled() {
    let rules = Rules::builder().allow_decline(false).build().unwrap();
    let mut engine = engine_with(rules, &["Ada", "Bo"]);
    engine.add_points(400).unwrap();
    engine.declare_farkle().unwrap();
    let before = engine.state().clone();

    assert_eq!(engine.decline_steal(), Err(GameError::DeclineDisabled));
    assert_eq!(engine.state(), &before);
}

#[test]
fn claim_can_trigger_the_final_round() {
    let mut engine = house(&["Ada", "Bo"]);
    bank(&mut engine, 9_800);
    bank(&mut engine, 500);

    engine.add_points(300).unwrap();
    engine.declare_farkle().unwrap();
    engine.add_points(9_200).unwrap();
    let state = engine.claim_steal().unwrap();

    assert_eq!(state.players().score(1), 10_000);
    let round = state.final_round().unwrap();
    assert_eq!(round.starter(), 1);
    assert_eq!(queue(&engine), vec![0]);
    assert_eq!(engine.state().current_turn(), 0);

    bank(&mut engine, 100);
    assert!(engine.state().is_game_over());
    assert_eq!(engine.state().winner_index(), Some(1));
}

#[test]
fn exhausted_chain_in_final_round_ends_the_farklers_turn() {
    let mut engine = three_in_final_round();

    // Bo farkles on his final turn; nobody claims.
    engine.add_points(300).unwrap();
    engine.declare_farkle().unwrap();
    engine.pass_farkle().unwrap();
    assert_eq!(engine.state().steal().unwrap().stealer(), 0);
    let state = engine.pass_farkle().unwrap();

    assert_eq!(state.mode(), &Mode::Normal);
    assert_eq!(state.current_turn(), 2);
    assert_eq!(queue(&engine), vec![2]);
    assert_eq!(scores(&engine), vec![10_000, 500, 1_500]);
}

#[test]
fn farkle_on_last_turn_forfeits_and_ends_the_game() {
    let mut engine = three_in_final_round();
    bank(&mut engine, 200);

    engine.add_points(400).unwrap();
    engine.declare_farkle().unwrap();
    engine.pass_farkle().unwrap();
    let state = engine.pass_farkle().unwrap();

    assert!(state.is_game_over());
    assert_eq!(state.winner_index(), Some(0));
    assert_eq!(scores(&engine), vec![10_000, 700, 1_500]);
}

#[test]
fn claim_on_last_turn_can_change_the_winner() {
    let mut engine = three_in_final_round();
    bank(&mut engine, 200);

    engine.add_points(400).unwrap();
    engine.declare_farkle().unwrap();
    engine.pass_farkle().unwrap();

    // Bo adds 9600 on top of the 400 pool.
    engine.add_points(9_600).unwrap();
    let state = engine.claim_steal().unwrap();

    assert_eq!(state.players().score(1), 10_700);
    assert!(state.is_game_over());
    assert_eq!(state.winner_index(), Some(1));
}

#[test]
fn last_turn_farkle_can_be_rejected() {
    let rules = Rules::builder()
        .last_turn_farkle(LastTurnFarkle::Reject)
        .build()
        .unwrap();
    let mut engine = engine_with(rules, &["Ada", "Bo", "Cy"]);
    bank(&mut engine, 600);
    bank(&mut engine, 500);
    bank(&mut engine, 1_500);
    bank(&mut engine, 9_400);

    // Not the last turn yet: allowed.
    engine.add_points(100).unwrap();
    engine.declare_farkle().unwrap();
    engine.undo().unwrap();
    engine.bank_turn().unwrap();

    engine.add_points(100).unwrap();
    let before = engine.state().clone();
    assert_eq!(engine.declare_farkle(), Err(GameError::NoStealOnLastTurn));
    assert_eq!(engine.state(), &before);
}

#[test]
fn ties_go_to_the_earliest_seat() {
    let mut engine = house(&["Ada", "Bo"]);
    bank(&mut engine, 5_000);
    bank(&mut engine, 5_000);
    bank(&mut engine, 5_000);
    bank(&mut engine, 5_000);

    assert!(engine.state().is_game_over());
    assert_eq!(scores(&engine), vec![10_000, 10_000]);
    assert_eq!(engine.state().winner_index(), Some(0));
}

#[test]
fn commands_after_game_over_are_rejected() {
    let mut engine = house(&["Ada", "Bo"]);
    bank(&mut engine, 10_000);
    bank(&mut engine, 500);
    assert!(engine.state().is_game_over());
    let before = engine.state().clone();

    assert_eq!(engine.add_points(50), Err(GameError::GameOver));
    assert_eq!(engine.add_scoring("1 x (1)"), Err(GameError::GameOver));
    assert_eq!(engine.bank_turn(), Err(GameError::GameOver));
    assert_eq!(engine.declare_farkle(), Err(GameError::GameOver));
    assert_eq!(engine.claim_steal(), Err(GameError::GameOver));
    assert_eq!(engine.pass_farkle(), Err(GameError::GameOver));
    assert_eq!(engine.decline_steal(), Err(GameError::GameOver));
    assert_eq!(engine.add_player("Late"), Err(GameError::GameOver));
    assert_eq!(engine.state(), &before);

    let state = engine.undo().unwrap();
    assert!(!state.is_game_over());
    assert_eq!(queue(&engine), vec![1]);
}

#[test]
fn undo_reverts_steal_and_final_round_sub_state() {
    let mut engine = three_in_final_round();
    engine.add_points(300).unwrap();
    engine.declare_farkle().unwrap();
    let during_steal = engine.state().clone();

    engine.pass_farkle().unwrap();
    engine.pass_farkle().unwrap();
    assert_eq!(queue(&engine), vec![2]);

    engine.undo().unwrap();
    engine.undo().unwrap();
    assert_eq!(engine.state(), &during_steal);
    assert_eq!(engine.history().last_command(), Some(&Command::DeclareFarkle));

    engine.undo().unwrap();
    engine.undo().unwrap();
    engine.undo().unwrap();
    assert!(!engine.state().in_final_round());
    assert_eq!(engine.state().players().score(0), 600);
}

#[test]
fn players_can_be_removed_before_the_game_starts() {
    let mut engine = house(&["Ada", "Bo", "Cy"]);
    engine.add_points(200).unwrap();
    engine.declare_farkle().unwrap();
    engine.decline_steal().unwrap();
    assert_eq!(engine.state().current_turn(), 1);

    let ada = engine.state().players().get(0).unwrap().id;
    let state = engine.remove_player(ada).unwrap();
    assert_eq!(state.players().len(), 2);
    assert_eq!(state.current_turn(), 0);
    assert_eq!(state.active_player().unwrap().name, "Bo");

    let bo = engine.state().players().get(0).unwrap().id;
    engine.add_points(100).unwrap();
    let state = engine.remove_player(bo).unwrap();
    assert_eq!(state.current_turn(), 0);
    assert_eq!(state.turn_points(), 0);
    assert_eq!(state.active_player().unwrap().name, "Cy");
}

#[test]
fn removal_is_blocked_once_points_are_banked() {
    let mut engine = house(&["Ada", "Bo"]);
    bank(&mut engine, 500);
    let bo = engine.state().players().get(1).unwrap().id;
    assert_eq!(engine.remove_player(bo), Err(GameError::GameInProgress));
    assert_eq!(engine.state().players().len(), 2);
}

#[test]
fn removal_is_blocked_during_a_steal() {
    let mut engine = house(&["Ada", "Bo"]);
    engine.add_points(200).unwrap();
    engine.declare_farkle().unwrap();
    let ada = engine.state().players().get(0).unwrap().id;
    assert_eq!(engine.remove_player(ada), Err(GameError::GameInProgress));
}

#[test]
fn removing_an_unknown_player_fails() {
    let mut engine = house(&["Ada"]);
    let mut other = house(&["Stranger"]);
    let stranger = other.state().players().get(0).unwrap().id;
    other.new_game();

    assert!(matches!(
        engine.remove_player(stranger),
        Err(GameError::UnknownPlayer { .. })
    ));
}

#[test]
fn players_cannot_join_during_the_final_round() {
    let mut engine = three_in_final_round();
    assert_eq!(engine.add_player("Late"), Err(GameError::GameInProgress));
    assert_eq!(engine.add_player("  "), Err(GameError::GameInProgress));
}

#[test]
fn blank_names_are_rejected() {
    let mut engine = TurnEngine::default();
    assert_eq!(engine.add_player("   "), Err(GameError::EmptyName));
    assert!(engine.history().is_empty());
}

#[test]
fn decline_in_final_round_concludes_the_queued_turn() {
    let mut engine = three_in_final_round();
    assert_eq!(queue(&engine), vec![1, 2]);

    // Bo farkles on his final turn; Cy lets the pool go.
    engine.add_points(300).unwrap();
    engine.declare_farkle().unwrap();
    assert_eq!(engine.state().steal().unwrap().stealer(), 2);
    let state = engine.decline_steal().unwrap();

    assert_eq!(state.mode(), &Mode::Normal);
    assert_eq!(state.current_turn(), 2);
    assert_eq!(queue(&engine), vec![2]);

    // Cy farkles on the last turn and Ada declines; nothing is left to play.
    engine.add_points(200).unwrap();
    engine.declare_farkle().unwrap();
    assert_eq!(engine.state().steal().unwrap().stealer(), 0);
    let state = engine.decline_steal().unwrap();

    assert!(state.is_game_over());
    assert_eq!(state.winner_index(), Some(0));
    assert_eq!(scores(&engine), vec![10_000, 500, 1_500]);
}

#[test]
fn players_can_join_during_a_steal() {
    let mut engine = house(&["Ada", "Bo", "Cy"]);
    engine.add_points(400).unwrap();
    engine.declare_farkle().unwrap();

    let state = engine.add_player("Dee").unwrap();
    assert_eq!(state.players().len(), 4);
    let chain = state.steal().unwrap();
    assert_eq!(chain.stealer(), 1);
    assert_eq!(chain.pool(), 400);

    // The newcomer's seat is part of the remaining chain.
    engine.pass_farkle().unwrap();
    engine.pass_farkle().unwrap();
    assert_eq!(engine.state().steal().unwrap().stealer(), 3);

    let state = engine.claim_steal().unwrap();
    assert_eq!(state.players().score(3), 400);
    assert_eq!(state.current_turn(), 3);
}
