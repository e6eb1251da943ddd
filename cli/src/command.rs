use core::str::FromStr;
use sweeper_core::{Action, Coord, Coord2};

pub const HELP: &str = "\
commands:
  o ROW COL   open a cell
  f ROW COL   flag or unflag a cell
  c X Y       left click at a pixel position (open)
  r X Y       right click at a pixel position (flag)
  d           toggle debug view
  p           pause or resume
  n           new game
  l           open or close the leaderboard
  s           print a JSON snapshot
  h           show this help
  q           quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

impl Button {
    /// What a click with this button does to the cell under it.
    pub fn action(self, coords: Coord2) -> Action {
        match self {
            Button::Left => Action::Open(coords),
            Button::Right => Action::Flag(coords),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    /// Click at a pixel position on the board.
    Click(Button, i32, i32),
    Leaderboard,
    Snapshot,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_owned());
        };
        let args: Vec<&str> = words.collect();

        let command = match (head, args.as_slice()) {
            ("o" | "open", [row, col]) => Command::Action(Action::Open(coords(row, col)?)),
            ("f" | "flag", [row, col]) => Command::Action(Action::Flag(coords(row, col)?)),
            ("c" | "click", [x, y]) => Command::Click(Button::Left, number(x)?, number(y)?),
            ("r" | "rclick", [x, y]) => Command::Click(Button::Right, number(x)?, number(y)?),
            ("d" | "debug", []) => Command::Action(Action::ToggleDebug),
            ("p" | "pause", []) => Command::Action(Action::TogglePause),
            ("n" | "new", []) => Command::Action(Action::NewGame),
            ("l" | "leaderboard", []) => Command::Leaderboard,
            ("s" | "snapshot", []) => Command::Snapshot,
            ("h" | "help" | "?", []) => Command::Help,
            ("q" | "quit" | "exit", []) => Command::Quit,
            _ => return Err(format!("unknown command {s:?}")),
        };
        Ok(command)
    }
}

fn number<T: FromStr>(word: &str) -> Result<T, String> {
    word.parse().map_err(|_| format!("not a number: {word:?}"))
}

fn coords(row: &str, col: &str) -> Result<Coord2, String> {
    Ok((number::<Coord>(row)?, number::<Coord>(col)?))
}
