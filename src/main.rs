use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::perft::perft_divide;
use plum_rules::utils::long_algebraic::move_to_long_algebraic;
use plum_rules::utils::render_game_state::{render_game_state, Glyphs};

/// Two-player terminal chess: both sides enter coordinate moves on stdin.
#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// Draw pieces with ASCII letters instead of Unicode glyphs
    #[clap(long)]
    ascii: bool,

    /// Print a perft divide of the starting position to DEPTH and exit
    #[clap(long, value_name = "DEPTH")]
    perft: Option<u8>,
}

const HELP: &str = "commands: <move> (e2e4, e7e8n) | moves | undo | reset | board | help | quit";

fn main() -> ExitCode {
    let cli = Cli::parse();
    let glyphs = if cli.ascii { Glyphs::Ascii } else { Glyphs::Unicode };

    if let Some(depth) = cli.perft {
        let mut game = GameState::new();
        let divided = perft_divide(&mut game, depth);
        let total: usize = divided.iter().map(|(_, nodes)| nodes).sum();
        for (text, nodes) in divided {
            println!("{text}: {nodes}");
        }
        println!("nodes: {total}");
        return ExitCode::SUCCESS;
    }

    match run(glyphs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("io error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(glyphs: Glyphs) -> io::Result<()> {
    let mut game = GameState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_game_state(&game, glyphs));
    println!("{HELP}");

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => println!("{}", render_game_state(&game, glyphs)),
            "reset" => {
                game.reset();
                println!("{}", render_game_state(&game, glyphs));
            }
            "undo" => match game.undo_move() {
                Some(mv) => {
                    println!("undid {mv}");
                    println!("{}", render_game_state(&game, glyphs));
                }
                None => println!("nothing to undo"),
            },
            "moves" => {
                let texts: Vec<String> = game
                    .get_valid_moves()
                    .iter()
                    .map(move_to_long_algebraic)
                    .collect();
                println!("{}", texts.join(" "));
            }
            text => match game.play(text) {
                Ok(mv) => {
                    println!("{mv}");
                    println!("{}", render_game_state(&game, glyphs));

                    let status = game.status();
                    if status.is_over() {
                        println!("{status}");
                        game.reset();
                        println!("{}", render_game_state(&game, glyphs));
                    } else if game.in_check() {
                        println!("{} is in check", game.side_to_move());
                    }
                }
                Err(err) => eprintln!("{err}"),
            },
        }
        stdout.flush()?;
    }

    Ok(())
}
