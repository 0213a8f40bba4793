//! Delve - a text dungeon crawler
//!
//! The interactive shell over delve-core: argument parsing, the per-turn
//! prompt loop, and message formatting. All printing lives here; the core
//! never touches stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use delve_core::combat::{Attacker, CombatOutcome, CombatReport};
use delve_core::dungeon::RoomId;
use delve_core::item::ItemKind;
use delve_core::{EnterOutcome, GameRng, GameState, POTION_RESTORE, SWORD_BOOST};
use delve_save::DEFAULT_SAVE_NAME;

/// In-game move value that saves and quits
const SAVE_SENTINEL: i64 = -1;

/// Exit code when the player dies (distinct from errors and normal exit)
const EXIT_DIED: u8 = 3;

/// Delve - explore the dungeon!
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Delve - explore the dungeon!", long_about = None)]
struct Args {
    /// Number of rooms for a fresh dungeon, or a save file to resume
    target: String,

    /// Seed for a deterministic session
    #[arg(long)]
    seed: Option<u64>,

    /// Print a loaded save as JSON and exit
    #[arg(long)]
    dump: bool,
}

/// How the positional argument was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// Start a fresh dungeon with this many rooms
    NewGame(u32),
    /// Resume from a save file
    Resume(PathBuf),
}

/// An argument that parses as an integer above 1 is a room count; anything
/// else, "1" included, names a save file.
fn dispatch(target: &str) -> Mode {
    match target.parse::<u32>() {
        Ok(n) if n > 1 => Mode::NewGame(n),
        _ => Mode::Resume(PathBuf::from(target)),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let state = match dispatch(&args.target) {
        Mode::NewGame(n) => {
            if args.dump {
                eprintln!("Error: --dump needs a save file, not a room count");
                return ExitCode::from(2);
            }
            match GameState::new_game(n, rng) {
                Ok(state) => state,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::from(2);
                }
            }
        }
        Mode::Resume(path) => match delve_save::load_game(&path, rng) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Error: could not load game from '{}': {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
    };

    if args.dump {
        return dump_state(&state);
    }

    run(state)
}

/// The per-turn prompt loop.
fn run(mut state: GameState) -> ExitCode {
    println!("=== Delve ===");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let room = state.current_room();
        if room.visited {
            println!("\nYou are in room {} (visited)", room.id);
        } else {
            println!("\nYou are in room {}", room.id);
        }

        match state.enter_current_room() {
            EnterOutcome::TreasureFound => {
                println!("You found the treasure! You win!");
                return ExitCode::SUCCESS;
            }
            EnterOutcome::Empty => println!("The room is empty."),
            EnterOutcome::ItemFound {
                kind,
                hp_after,
                damage_after,
            } => print_pickup(kind, hp_after, damage_after),
            EnterOutcome::MonsterEncounter { monster, report } => {
                println!(
                    "You encounter a {}! (hp:{}, dmg:{})",
                    monster.kind, monster.hp, monster.damage
                );
                print_combat(&report);
                match report.outcome {
                    CombatOutcome::MonsterSlain => println!("{} defeated!", monster.kind),
                    CombatOutcome::PlayerDied => {
                        println!("You died... Game Over.");
                        return ExitCode::from(EXIT_DIED);
                    }
                }
            }
        }

        print!("Doors to rooms:");
        for nb in &state.current_room().neighbors {
            print!(" {nb}");
        }
        println!();
        print!("Choose a door ({SAVE_SENTINEL}: save & quit): ");
        let _ = io::stdout().flush();

        // EOF ends the session quietly
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return ExitCode::SUCCESS,
        };
        let choice: i64 = match line.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                println!("Invalid choice, try again.");
                continue;
            }
        };

        if choice == SAVE_SENTINEL {
            return match delve_save::save_game(&state, DEFAULT_SAVE_NAME) {
                Ok(()) => {
                    println!("Game saved. Goodbye!");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error saving game: {e}");
                    ExitCode::FAILURE
                }
            };
        }

        let dest = match u32::try_from(choice) {
            Ok(id) => RoomId(id),
            Err(_) => {
                println!("Invalid choice, try again.");
                continue;
            }
        };
        if state.move_to(dest).is_err() {
            println!("Invalid choice, try again.");
        }
    }
}

/// Print a combat transcript: each round's schedule word as bits, most
/// significant first, then its attacks in order.
fn print_combat(report: &CombatReport) {
    for round in &report.rounds {
        println!("Attack order bits: {:016b}", round.schedule);
        for attack in &round.attacks {
            match attack.attacker {
                Attacker::Monster => println!(
                    "Monster attacks for {} (hp={})",
                    attack.damage, attack.hp_remaining
                ),
                Attacker::Player => println!(
                    "You attack for {} (hp={})",
                    attack.damage, attack.hp_remaining
                ),
            }
        }
    }
}

fn print_pickup(kind: ItemKind, hp_after: i32, damage_after: i32) {
    match kind {
        ItemKind::Potion => {
            println!("You find a Potion! Restored {POTION_RESTORE} hp (now {hp_after})")
        }
        ItemKind::Sword => {
            println!("You find a Sword! Damage +{SWORD_BOOST} (now {damage_after})")
        }
        ItemKind::Elixir => {
            println!("You find an Elixir! HP and damage doubled! (hp={hp_after}, dmg={damage_after})")
        }
    }
}

/// Print a loaded save as JSON for inspection.
fn dump_state(state: &GameState) -> ExitCode {
    match serde_json::to_string_pretty(state) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
