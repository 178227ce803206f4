#[macro_use]
extern crate lazy_static;

mod error;
mod exec;
mod instr;

pub use error::UnevenTurn;
pub use exec::{simulate_heading, simulate_waypoint};
pub use instr::{parse, Action, Instruction};
