/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A move in coordinate notation
    Move(String),
    Undo,
    Moves,
    Fen,
    Perft(usize),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let first = *parts.first()?;

    let cmd = match first {
        "undo" => Command::Undo,
        "moves" => Command::Moves,
        "fen" => Command::Fen,
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            Command::Perft(depth)
        }
        "help" | "?" => Command::Help,
        "exit" | "quit" => Command::Quit,
        other => Command::Move(other.to_string()),
    };
    Some(cmd)
}
