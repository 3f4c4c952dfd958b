//! Traveller movement: path traversal with arclength correction, segment
//! carry-over, and damped free flight after departure.

use glam::DVec2;
use hecs::World;

use walker_core::components::{Motion, PathFollower, Position, Trail, Traveller};
use walker_core::constants::{
    TRAIL_MAX_POINTS, TRAVERSE_DAMPING, TRAVERSE_MAX_ITERATIONS, TRAVERSE_TOLERANCE_DIVISOR,
};
use walker_path::Path;

/// Advance every traveller by one tick.
///
/// Order within one traveller's update: record the trail point, apply path
/// acceleration, then either traverse the path or free-fly, then age.
pub fn run(world: &mut World, paths: &[Path], precise: bool, air_damp: f64) {
    for (_entity, (traveller, follower, position, motion, trail)) in world.query_mut::<(
        &mut Traveller,
        &mut PathFollower,
        &mut Position,
        &mut Motion,
        Option<&mut Trail>,
    )>() {
        if let Some(trail) = trail {
            push_trail(trail, position.0);
        }

        follower.path_velocity += follower.path_acceleration;

        match follower.path {
            Some(path_id) => match paths.get(path_id) {
                Some(path) => traverse(path, follower, position, motion, precise),
                None => follower.path = None,
            },
            None => free_flight(position, motion, air_damp),
        }

        traveller.age += 1;
    }
}

/// Move one traveller along its path by `path_velocity` world units.
///
/// The naive parameter step `d / arclength` is exact on lines and
/// approximate on Beziers; when `precise` is set a bounded secant-like
/// search corrects the step until the chord traveled is within `d/20`
/// of the desired distance.
fn traverse(
    path: &Path,
    follower: &mut PathFollower,
    position: &mut Position,
    motion: &mut Motion,
    precise: bool,
) {
    let mut part = match path.segment(follower.segment) {
        Some(part) => part,
        None => {
            depart(follower, motion);
            return;
        }
    };

    let travel_dist = follower.path_velocity;
    let mut move_t = travel_dist / part.arclength();
    let mut actual_dist = travel_dist;

    if precise {
        let acceptable_error = travel_dist / TRAVERSE_TOLERANCE_DIVISOR;
        let anchor = part.position(follower.path_t);
        actual_dist = part.position(follower.path_t + move_t).distance(anchor);
        let mut delta_t = 0.5 * move_t;
        let mut iterations = 0;
        while (actual_dist < travel_dist - acceptable_error
            || actual_dist > travel_dist + acceptable_error)
            && iterations < TRAVERSE_MAX_ITERATIONS
        {
            delta_t = travel_dist / actual_dist * delta_t;
            if actual_dist < travel_dist {
                move_t += delta_t;
            } else {
                move_t -= delta_t;
            }
            delta_t /= TRAVERSE_DAMPING;
            actual_dist = part.position(follower.path_t + move_t).distance(anchor);
            iterations += 1;
        }
    }

    follower.path_total_distance += actual_dist;
    follower.path_total_t += move_t;
    follower.path_t += move_t;

    // Strictly past the segment end carries the overshoot onto the next
    // segment; landing exactly on the end renders the endpoint this tick.
    if follower.path_t > 1.0 {
        let remaining = (follower.path_t - 1.0) * part.arclength();
        follower.segment += 1;
        match path.segment(follower.segment) {
            Some(next) => {
                follower.path_t = remaining / next.arclength();
                part = next;
            }
            None => {
                depart(follower, motion);
                return;
            }
        }
    }

    assert!(
        follower.path_t >= 0.0,
        "in-segment parameter went negative during traversal"
    );

    let next_position = part.position(follower.path_t);
    motion.acceleration = next_position - position.0 - motion.velocity;
    motion.velocity = next_position - position.0;
    position.0 = next_position;
}

/// Leave the path at its end: velocity carries over into free flight, the
/// position is not touched this tick.
fn depart(follower: &mut PathFollower, motion: &mut Motion) {
    follower.path = None;
    follower.segment = 0;
    follower.path_t = 0.0;
    motion.acceleration = DVec2::ZERO;
}

/// Ballistic drift for departed travellers.
fn free_flight(position: &mut Position, motion: &mut Motion, air_damp: f64) {
    motion.velocity *= air_damp;
    motion.velocity += motion.acceleration;
    position.0 += motion.velocity;
}

/// Record a pre-movement trail point, dropping the oldest past the cap.
fn push_trail(trail: &mut Trail, position: DVec2) {
    if trail.positions.len() >= TRAIL_MAX_POINTS {
        trail.positions.remove(0);
    }
    trail.positions.push(position);
}
