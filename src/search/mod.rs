//! State-space search
//!
//! This module contains:
//! - A generic breadth-first search with path reconstruction
//! - The Theseus and Minotaur maze chase
//! - The robot-building resource optimization

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Theseus and Minotaur maze chase
pub mod maze;
/// Robot-building resource optimization
pub mod resources;

pub use maze::{Chase, Maze, Position};
pub use resources::{Blueprint, GeodeReport, max_geodes};

/// Shortest path from `start` to the first goal state reached
///
/// States are expanded in first-in first-out order and successors in the
/// order `successors` yields them, so ties between equally short paths are
/// broken deterministically. The returned path starts with `start` and ends
/// with the goal; `None` means no goal is reachable.
pub fn breadth_first_search<S, I, F, G>(start: S, mut successors: F, mut is_goal: G) -> Option<Vec<S>>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> I,
    G: FnMut(&S) -> bool,
{
    let mut parents: HashMap<S, Option<S>> = HashMap::new();
    let mut queue = VecDeque::new();
    parents.insert(start.clone(), None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if is_goal(&current) {
            return Some(reconstruct(&parents, current));
        }

        for next in successors(&current) {
            if !parents.contains_key(&next) {
                parents.insert(next.clone(), Some(current.clone()));
                queue.push_back(next);
            }
        }
    }

    None
}

fn reconstruct<S>(parents: &HashMap<S, Option<S>>, goal: S) -> Vec<S>
where
    S: Clone + Eq + Hash,
{
    let mut path = vec![goal];
    while let Some(Some(parent)) = path.last().and_then(|state| parents.get(state)) {
        path.push(parent.clone());
    }
    path.reverse();
    path
}
