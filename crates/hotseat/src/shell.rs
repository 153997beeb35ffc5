//! The terminal presentation shell.
//!
//! A thin consumer of [`GameController`]: square names typed at the prompt
//! stand in for clicks, so two entries make a move exactly the way two
//! clicks would on a pointing device. All game decisions live in the
//! controller; this module only reads snapshots and draws.

use chess_session::{color_name, File, Piece, Rank, Role, Square};
use chess_store::SaveStore;
use chess_ui::{ClickOutcome, GameController};
use std::io::{self, BufRead, Write};

/// Runs the start menu until the player quits.
pub fn run<S: SaveStore>(mut controller: GameController<S>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("hotseat chess");
    loop {
        let saved = controller.has_saved_game();
        println!();
        println!("  [n] new game");
        if saved {
            println!("  [c] continue saved game");
        }
        println!("  [q] quit");

        let Some(choice) = prompt(&mut input, "> ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "n" | "new" => {
                if let Some(color) = pick_color(&mut input)? {
                    controller.on_new_game(color);
                    play(&mut input, &mut controller)?;
                }
            }
            "c" | "continue" if saved => match controller.on_load_requested() {
                Ok(()) => play(&mut input, &mut controller)?,
                Err(e) => {
                    tracing::warn!(error = %e, "could not load saved game");
                    println!("Could not load the saved game: {e}");
                }
            },
            "q" | "quit" => return Ok(()),
            _ => println!("Unknown choice."),
        }
    }
}

/// Color-selection screen. `None` means "back".
fn pick_color(input: &mut impl BufRead) -> anyhow::Result<Option<chess_session::Color>> {
    loop {
        println!();
        println!("  [w] play white");
        println!("  [b] play black");
        println!("  [x] back");
        let Some(choice) = prompt(input, "> ")? else {
            return Ok(None);
        };
        match choice.as_str() {
            "w" | "white" => return Ok(Some(chess_session::Color::White)),
            "b" | "black" => return Ok(Some(chess_session::Color::Black)),
            "x" | "back" => return Ok(None),
            _ => println!("Unknown choice."),
        }
    }
}

/// The in-game loop. Returns when the player goes back to the menu.
fn play<S: SaveStore>(
    input: &mut impl BufRead,
    controller: &mut GameController<S>,
) -> anyhow::Result<()> {
    loop {
        render(controller);

        if controller.is_over() {
            let Some(choice) = prompt(input, "[p]lay again or [m]enu? ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "p" | "play" => controller.on_new_game(controller.player_color()),
                "m" | "menu" => return Ok(()),
                _ => {}
            }
            continue;
        }

        let Some(line) = prompt(input, "square (or resign / new / menu): ")? else {
            return Ok(());
        };
        match line.as_str() {
            "" => {}
            "resign" => controller.on_resign(),
            "new" => controller.on_new_game(controller.player_color()),
            "menu" => {
                if leave_game(input, controller)? {
                    return Ok(());
                }
            }
            square => match square.parse::<Square>() {
                Ok(square) => match controller.on_square_clicked(square) {
                    ClickOutcome::Ignored => println!("Nothing to do there."),
                    ClickOutcome::Rejected => println!("That move was refused."),
                    _ => {}
                },
                Err(_) => println!("Not a square: {square}"),
            },
        }
    }
}

/// The return-to-menu prompt. True means "actually leave".
fn leave_game<S: SaveStore>(
    input: &mut impl BufRead,
    controller: &mut GameController<S>,
) -> anyhow::Result<bool> {
    loop {
        let Some(choice) = prompt(input, "Save the game before leaving? [y]es / [n]o / [c]ancel: ")?
        else {
            return Ok(true);
        };
        match choice.as_str() {
            "y" | "yes" => {
                if let Err(e) = controller.on_save_requested() {
                    tracing::warn!(error = %e, "could not save game");
                    println!("Could not save the game: {e}");
                }
                return Ok(true);
            }
            "n" | "no" => {
                if let Err(e) = controller.discard_save() {
                    tracing::warn!(error = %e, "could not clear save slot");
                }
                return Ok(true);
            }
            "c" | "cancel" => return Ok(false),
            _ => {}
        }
    }
}

/// Draws the board, status, and move history.
fn render<S: SaveStore>(controller: &GameController<S>) {
    let session = controller.session();
    let selection = controller.selection();
    let checked_king = if session.is_check() {
        session.board().king_square(session.turn())
    } else {
        None
    };

    println!();
    for rank in (0..8u32).rev() {
        print!(" {}", rank + 1);
        for file in 0..8u32 {
            let square = Square::from_coords(File::new(file), Rank::new(rank));
            let glyph = session.piece_at(square).map_or('.', piece_char);
            // Selected square in brackets, legal destinations starred,
            // a checked king in parentheses.
            if selection.selected() == Some(square) {
                print!("[{glyph}]");
            } else if selection.is_target(square) {
                print!("*{glyph}*");
            } else if checked_king == Some(square) {
                print!("({glyph})");
            } else {
                print!(" {glyph} ");
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");
    println!();
    println!(
        "{}   (you play {})",
        controller.status_line(),
        color_name(controller.player_color())
    );

    let moves: Vec<&str> = controller
        .history_lines()
        .filter(|line| !line.is_empty())
        .collect();
    if !moves.is_empty() {
        println!("Moves: {}", moves.join("   "));
    }
}

/// FEN-style piece letter: uppercase white, lowercase black.
fn piece_char(piece: Piece) -> char {
    let letter = match piece.role {
        Role::Pawn => 'p',
        Role::Knight => 'n',
        Role::Bishop => 'b',
        Role::Rook => 'r',
        Role::Queen => 'q',
        Role::King => 'k',
    };
    match piece.color {
        chess_session::Color::White => letter.to_ascii_uppercase(),
        chess_session::Color::Black => letter,
    }
}

/// Prints a prompt and reads one trimmed, lowercased line.
/// `None` means end of input; callers treat it as leaving.
fn prompt(input: &mut impl BufRead, text: &str) -> anyhow::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_ascii_lowercase()))
}
