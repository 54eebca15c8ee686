use std::process::ExitCode;

use clap::Parser;
use poker_showdown::api::{build_showdown_view, EvalCli};
use poker_showdown::domain::card::{parse_cards, Card};
use poker_showdown::domain::PlayerId;

fn main() -> ExitCode {
    env_logger::init();
    let args = EvalCli::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[CLI] ОШИБКА: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &EvalCli) -> Result<(), Box<dyn std::error::Error>> {
    let board: Vec<Card> = parse_cards(&args.board)?;

    let mut players: Vec<(PlayerId, Vec<Card>)> = Vec::with_capacity(args.holes.len());
    for (idx, hole) in args.holes.iter().enumerate() {
        players.push((idx as PlayerId + 1, parse_cards(hole)?));
    }

    let view = build_showdown_view(&board, &players)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let board_str: Vec<String> = board.iter().map(Card::symbol).collect();
    println!("Board: {}", board_str.join(" "));
    println!();

    for (player, (_, hole)) in view.players.iter().zip(players.iter()) {
        let hole_str: Vec<String> = hole.iter().map(Card::symbol).collect();
        let marker = if player.is_winner { " <- WIN" } else { "" };
        println!(
            "Player {} [{}]: {} (p={} s={} k={:?}){}",
            player.player_id,
            hole_str.join(" "),
            player.hand.description,
            player.hand.primary,
            player.hand.secondary,
            player.hand.kickers,
            marker
        );
    }

    println!();
    if view.split {
        println!("Split pot between players {:?}", view.winners);
    } else {
        println!("Winner: player {:?}", view.winners);
    }
    Ok(())
}
