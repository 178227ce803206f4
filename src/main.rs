use std::io::Read;

#[cfg(feature = "with_dhat")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "with_dhat")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    #[cfg(feature = "with_dhat")]
    let _dhat = Dhat::start_heap_profiling();

    let mut buffer = String::new();
    let stdin = std::io::stdin();
    stdin.lock().read_to_string(&mut buffer)?;

    let instructions = ferry_nav::parse(&buffer)?;

    let part_one = ferry_nav::simulate_heading(&instructions)?;
    let part_two = ferry_nav::simulate_waypoint(&instructions)?;

    println!("part1: {}", part_one);
    println!("part2: {}", part_two);

    Ok(())
}
