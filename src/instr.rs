use crate::error::UnevenTurn;
use regex::Regex;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    North,
    East,
    South,
    West,
    TurnLeft,
    TurnRight,
    Forward,
}

impl Action {
    fn is_turn(&self) -> bool {
        match *self {
            Action::TurnLeft | Action::TurnRight => true,
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Instruction {
    pub action: Action,
    pub amount: i32,
}

/// Scans the input for `[NESWLRF][0-9]+` tokens, ignoring anything in between,
/// so the instructions do not have to come one per line.
pub fn parse(s: &str) -> Result<Vec<Instruction>, UnevenTurn> {
    lazy_static! {
        static ref RE: Regex = Regex::new("([NESWLRF])([0-9]+)").unwrap();
    }

    let instructions = RE
        .captures_iter(s)
        .map(|cap| {
            let action = match cap[1].as_bytes()[0] {
                b'N' => Action::North,
                b'E' => Action::East,
                b'S' => Action::South,
                b'W' => Action::West,
                b'L' => Action::TurnLeft,
                b'R' => Action::TurnRight,
                b'F' => Action::Forward,
                x => unreachable!("no other letter can match: {}", x),
            };
            let amount = cap[2].parse::<i32>().expect("matched with re already");
            Instruction { action, amount }
        })
        .collect::<Vec<_>>();

    let bad_turn = instructions
        .iter()
        .find(|i| i.action.is_turn() && i.amount % 90 != 0);

    if let Some(bad) = bad_turn {
        return Err(UnevenTurn(bad.amount));
    }

    Ok(instructions)
}
