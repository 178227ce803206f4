use ferry_nav::{parse, simulate_heading, simulate_waypoint};

const SAMPLE: &str = "F10
N3
F7
R90
F11";

#[test]
fn sample_scenario() {
    let instructions = parse(SAMPLE).unwrap();

    assert_eq!(simulate_heading(&instructions).unwrap(), 25);
    assert_eq!(simulate_waypoint(&instructions).unwrap(), 286);
}

#[test]
fn reruns_yield_the_same_distances() {
    let instructions = parse(SAMPLE).unwrap();

    assert_eq!(
        simulate_heading(&instructions).unwrap(),
        simulate_heading(&instructions).unwrap()
    );
    assert_eq!(
        simulate_waypoint(&instructions).unwrap(),
        simulate_waypoint(&instructions).unwrap()
    );
}

#[test]
fn order_matters() {
    use itertools::Itertools;

    let instructions = parse(SAMPLE).unwrap();

    let baseline = (
        simulate_heading(&instructions).unwrap(),
        simulate_waypoint(&instructions).unwrap(),
    );

    // translations commute with each other but turns do not commute with
    // forward moves, so some reordering has to end up elsewhere
    let any_changed = instructions
        .iter()
        .copied()
        .permutations(instructions.len())
        .map(|reordered| {
            (
                simulate_heading(&reordered).unwrap(),
                simulate_waypoint(&reordered).unwrap(),
            )
        })
        .any(|distances| distances != baseline);

    assert!(any_changed);
}
