use std::io::{self, Write};

use crate::BoardDisplay;
use crate::game::Game;
use crate::script::MoveScript;
use crate::visualization::TerminalDisplay;

/// A line of input to the interactive terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `m <square>`
    Move(&'a str),
    /// `s <moves...>`
    Script(&'a str),
    /// `p`
    Redraw,
    /// `r`
    Reset,
    /// `q`
    Quit,
}

impl<'a> Command<'a> {
    /// Parse one input line. Returns the usage hint on failure.
    pub fn parse(input: &'a str) -> Result<Option<Self>, &'static str> {
        let input = input.trim();
        let (name, rest) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(name, rest)| (name, rest.trim()));

        let command = match name {
            "" => return Ok(None),
            "m" if rest.is_empty() => return Err("Usage: m <square>"),
            "m" => Command::Move(rest),
            "s" if rest.is_empty() => return Err("Usage: s <square> <square> ..."),
            "s" => Command::Script(rest),
            "p" => Command::Redraw,
            "r" => Command::Reset,
            "q" => Command::Quit,
            _ => return Err("Unknown command"),
        };
        Ok(Some(command))
    }
}

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal game on stdin/stdout.
pub fn run_interactive_terminal() {
    let mut game = Game::new();
    let mut display = TerminalDisplay::new();

    redraw(&mut display, &game);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            log::error!("Failed to flush stdout: {e}");
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read input: {e}");
                break;
            }
        }

        let command = match Command::parse(&input) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                println!("{usage}");
                continue;
            }
        };

        match command {
            Command::Move(desired) => match game.make_move(desired) {
                Ok(()) => redraw(&mut display, &game),
                Err(e) => println!("❌ {e}"),
            },
            Command::Script(moves) => match MoveScript::parse(moves) {
                Ok(mut script) => {
                    let outcome = script.play(&mut game);
                    redraw(&mut display, &game);
                    match outcome {
                        Ok(played) => println!("\n✅ Played {played} moves"),
                        Err(e) => println!("\n❌ {e} ({} moves not played)", script.len()),
                    }
                }
                Err(e) => println!("❌ {e}"),
            },
            Command::Redraw => redraw(&mut display, &game),
            Command::Reset => {
                game = Game::new();
                redraw(&mut display, &game);
                println!("\n🔄 Reset to initial state");
            }
            Command::Quit => break,
        }
    }
}

/// Draws the complete interface: help text and board.
fn redraw(display: &mut TerminalDisplay, game: &Game) {
    clear_screen();
    println!("♟️  Pawn Board");
    println!();
    println!("Commands: m <square> | s <moves...> | p (refresh) | r (reset) | q (quit)");
    println!();
    if let Err(e) = display.show(game) {
        log::error!("{e}");
    }
}
