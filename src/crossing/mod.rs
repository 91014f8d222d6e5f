//! Planar path crossings between pairs of hailstones
//!
//! Only the x and y components take part. Two paths cross when their
//! lines meet at a single point; parallel paths never cross, even when
//! they overlap.

use itertools::Itertools;
use log::debug;
use num::{BigInt, BigRational, Signed, Zero};

use crate::ir::{Axis, Observation};

/// Meeting point of two planar paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossing {
    /// `(x, y)` of the crossing
    pub point: [BigRational; 2],
    /// Time at which the first hailstone reaches the point
    pub time_a: BigRational,
    /// Time at which the second hailstone reaches the point
    pub time_b: BigRational,
}

impl Crossing {
    /// Both hailstones reach the point now or later
    pub fn in_future(&self) -> bool {
        !self.time_a.is_negative() && !self.time_b.is_negative()
    }

    /// The point lies inside `[min, max]` on both axes, bounds included
    pub fn within(&self, min: &BigInt, max: &BigInt) -> bool {
        let min = BigRational::from_integer(min.clone());
        let max = BigRational::from_integer(max.clone());
        self.point.iter().all(|c| *c >= min && *c <= max)
    }
}

fn planar(values: &[BigInt; 3]) -> [BigRational; 2] {
    [Axis::X, Axis::Y].map(|axis| BigRational::from_integer(values[axis.index()].clone()))
}

/// Where the x/y paths of `a` and `b` cross, if they are not parallel
pub fn path_crossing(a: &Observation, b: &Observation) -> Option<Crossing> {
    let [pax, pay] = planar(&a.position);
    let [vax, vay] = planar(&a.velocity);
    let [pbx, pby] = planar(&b.position);
    let [vbx, vby] = planar(&b.velocity);

    // Solve pa + s*va == pb + u*vb for (s, u)
    let det = &vbx * &vay - &vax * &vby;
    if det.is_zero() {
        return None;
    }
    let dx = &pbx - &pax;
    let dy = &pby - &pay;
    let time_a = (&vbx * &dy - &dx * &vby) / &det;
    let time_b = (&vax * &dy - &vay * &dx) / &det;
    let point = [&pax + &time_a * &vax, &pay + &time_a * &vay];
    Some(Crossing {
        point,
        time_a,
        time_b,
    })
}

/// Count unordered pairs whose future paths cross inside the test area
pub fn count_future_crossings(observations: &[Observation], min: &BigInt, max: &BigInt) -> usize {
    let count = observations
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| {
            path_crossing(a, b).is_some_and(|crossing| crossing.in_future() && crossing.within(min, max))
        })
        .count();
    debug!(
        "{} of {} pairs cross inside [{}, {}]",
        count,
        observations.len() * observations.len().saturating_sub(1) / 2,
        min,
        max
    );
    count
}
