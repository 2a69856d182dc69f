use std::env;
use std::io;
use std::process;

use chess_deck::console::{run, setup_game};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut game = match setup_game(&args) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("usage: chess_deck [random [seed] | decks <white> <black> | <fen>]");
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run(&mut game, stdin.lock(), &mut stdout) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
