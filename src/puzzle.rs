//! Built-in puzzle input

use crate::ir::Observation;

/// The three hailstones the solver runs on when no input file is given
pub fn builtin_observations() -> Vec<Observation> {
    vec![
        Observation::from_i64(
            [212542581053874, 357959731032403, 176793474286781],
            [-88, -256, -240],
        ),
        Observation::from_i64(
            [154677220587564, 207254130208265, 139183938188421],
            [184, 74, 235],
        ),
        Observation::from_i64(
            [216869547613134, 38208083662943, 397740686492049],
            [109, 262, -66],
        ),
    ]
}

/// Small worked example with a known answer of 47
pub const SAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";
