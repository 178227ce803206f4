use crate::error::UnevenTurn;
use crate::instr::{Action, Instruction};

/// Runs the instructions against a ship which moves forward along its own
/// heading, returning the manhattan distance from the starting position.
pub fn simulate_heading(instructions: &[Instruction]) -> Result<i32, UnevenTurn> {
    let mut ship = Ship::default();

    for instruction in instructions {
        ship.execute(*instruction)?;
    }

    Ok(ship.manhattan_distance())
}

/// Runs the instructions against a ship which moves forward towards a
/// waypoint kept relative to it, returning the manhattan distance from the
/// starting position.
pub fn simulate_waypoint(instructions: &[Instruction]) -> Result<i32, UnevenTurn> {
    let mut ship = WaypointShip::default();

    for instruction in instructions {
        ship.execute(*instruction)?;
    }

    Ok(ship.manhattan_distance())
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    fn unit(self) -> (i32, i32) {
        use Heading::*;
        match self {
            North => (0, 1),
            East => (1, 0),
            South => (0, -1),
            West => (-1, 0),
        }
    }

    fn rotated(self, degrees: i32) -> Result<Heading, UnevenTurn> {
        use Heading::*;

        if degrees % 90 != 0 {
            return Err(UnevenTurn(degrees));
        }

        // the discriminants run clockwise; rem_euclid instead of % as the
        // latter stays negative for most counter-clockwise turns
        Ok(match (self as i32 + degrees / 90).rem_euclid(4) {
            0 => North,
            1 => East,
            2 => South,
            3 => West,
            x => unreachable!("rem_euclid(4) returned {}", x),
        })
    }
}

#[derive(Debug)]
struct Ship {
    position: (i32, i32),
    heading: Heading,
}

impl Default for Ship {
    fn default() -> Ship {
        Ship {
            position: (0, 0),
            heading: Heading::East,
        }
    }
}

impl Ship {
    fn execute(&mut self, instruction: Instruction) -> Result<(), UnevenTurn> {
        use Action::*;
        let Instruction { action, amount } = instruction;

        match action {
            North => self.translate(Heading::North, amount),
            East => self.translate(Heading::East, amount),
            South => self.translate(Heading::South, amount),
            West => self.translate(Heading::West, amount),
            TurnRight => self.heading = self.heading.rotated(amount)?,
            TurnLeft => self.heading = self.heading.rotated(-amount)?,
            Forward => self.translate(self.heading, amount),
        }

        Ok(())
    }

    fn translate(&mut self, towards: Heading, amount: i32) {
        let (dx, dy) = towards.unit();
        self.position = (self.position.0 + dx * amount, self.position.1 + dy * amount);
    }

    fn manhattan_distance(self) -> i32 {
        self.position.0.abs() + self.position.1.abs()
    }
}

#[derive(Debug)]
struct WaypointShip {
    position: (i32, i32),
    // starts ten east, one north of the ship and stays relative to it
    waypoint: (i32, i32),
}

impl Default for WaypointShip {
    fn default() -> WaypointShip {
        WaypointShip {
            position: (0, 0),
            waypoint: (10, 1),
        }
    }
}

impl WaypointShip {
    fn execute(&mut self, instruction: Instruction) -> Result<(), UnevenTurn> {
        use Action::*;
        let Instruction { action, amount } = instruction;

        match action {
            North => self.adjust_waypoint(Heading::North, amount),
            East => self.adjust_waypoint(Heading::East, amount),
            South => self.adjust_waypoint(Heading::South, amount),
            West => self.adjust_waypoint(Heading::West, amount),
            TurnRight => self.waypoint = rotated(self.waypoint, amount)?,
            TurnLeft => self.waypoint = rotated(self.waypoint, -amount)?,
            Forward => {
                self.position = (
                    self.position.0 + self.waypoint.0 * amount,
                    self.position.1 + self.waypoint.1 * amount,
                );
            }
        }

        Ok(())
    }

    fn adjust_waypoint(&mut self, towards: Heading, amount: i32) {
        let (dx, dy) = towards.unit();
        self.waypoint = (self.waypoint.0 + dx * amount, self.waypoint.1 + dy * amount);
    }

    fn manhattan_distance(self) -> i32 {
        self.position.0.abs() + self.position.1.abs()
    }
}

/// Rotates an integer offset vector around the origin in right angles,
/// positive degrees turning clockwise.
fn rotated(offset: (i32, i32), degrees: i32) -> Result<(i32, i32), UnevenTurn> {
    if degrees % 90 != 0 {
        return Err(UnevenTurn(degrees));
    }

    let steps = (degrees / 90).rem_euclid(4);
    let (mut dx, mut dy) = offset;

    for _ in 0..steps {
        // quarter-turn clockwise
        let tmp = dx;
        dx = dy;
        dy = -tmp;
    }

    Ok((dx, dy))
}
