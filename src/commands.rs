/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Quit,
    /// Blank line. Redraws the current screen.
    Empty,
    Unknown(String),
}

pub const HELP: &str = "Commands: r (refresh / retry), q (quit)";

impl Command {
    pub fn parse(input: &str) -> Self {
        let word = input.trim().to_lowercase();
        match word.as_str() {
            "" => Command::Empty,
            "r" | "refresh" | "retry" => Command::Refresh,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(input.trim().to_string()),
        }
    }
}
