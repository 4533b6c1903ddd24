//! House Rules Walkthrough
//!
//! This example plays a short scripted game to show the engine's phases.
//!
//! Key concepts:
//! - Opening minimum and banking
//! - Farkle steal chains (claim, pass, forfeit)
//! - The final round and winner selection
//! - Undo
//!
//! Run with: RUST_LOG=farkle_house=debug cargo run --example house_rules

use farkle_house::config::Rules;
use farkle_house::{GameError, GameState, TurnEngine};
use tracing_subscriber::EnvFilter;

fn show(label: &str, state: &GameState) {
    let scores: Vec<String> = state
        .players()
        .iter()
        .map(|p| format!("{}={}", p.name, p.score))
        .collect();
    println!(
        "  {label:<28} mode={:<8} turn={} unbanked={} [{}]",
        state.mode().name(),
        state
            .active_player()
            .map_or("-", |p| p.name.as_str()),
        state.turn_points(),
        scores.join(", ")
    );
}

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Farkle House Rules ===\n");

    let rules = Rules::builder()
        .winning_threshold(3_000)
        .build()
        .expect("demo rules are valid");
    let mut engine = TurnEngine::new(rules);

    for name in ["Ada", "Bo", "Cy"] {
        engine.add_player(name)?;
    }
    show("seated", engine.state());

    println!("\nOpening banks:");
    engine.add_scoring("3 x 4s")?;
    match engine.bank_turn() {
        Err(err) => println!("  rejected: {err}"),
        Ok(state) => show("Ada banks", state),
    }
    engine.add_scoring("1 x (1)")?;
    show("Ada banks", engine.bank_turn()?);

    engine.add_scoring("Three Pairs")?;
    show("Bo banks", engine.bank_turn()?);

    println!("\nSteal chain:");
    engine.add_scoring("3 x 6s")?;
    show("Cy farkles", engine.declare_farkle()?);
    engine.add_scoring("1 x (5)")?;
    show("Ada adds 50 and busts", engine.pass_farkle()?);
    show("Bo claims", engine.claim_steal()?);

    println!("\nUndo:");
    show("undo claim", engine.undo()?);
    show("Bo claims again", engine.claim_steal()?);

    println!("\nFinal round:");
    show("Bo starts a turn", engine.state());
    engine.add_scoring("Two Triplets")?;
    show("Bo banks past 3000", engine.bank_turn()?);
    engine.add_scoring("3 x 5s")?;
    show("Cy banks", engine.bank_turn()?);
    engine.add_scoring("6 of a Kind")?;
    let state = engine.bank_turn()?;
    show("Ada banks", state);

    if let Some(winner) = engine.winner() {
        println!("\nWinner: {} with {}", winner.name, winner.score);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
