//! Robot-building resource optimization
//!
//! Four resources (ore, clay, obsidian, geode) are each mined by their own
//! kind of robot. Every minute each robot mines one unit and at most one new
//! robot can be ordered, paid for from the stock at the start of the minute;
//! it starts mining the minute after. The question is how many geodes can be
//! opened by the end.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::io::error::{Result, parse_error};

/// Number of resource kinds
pub const RESOURCES: usize = 4;

/// Index of the geode resource
const GEODE: usize = 3;

/// Amount of each resource, ordered ore, clay, obsidian, geode
pub type Stock = [u32; RESOURCES];

/// Robot costs, one row per robot kind in resource order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Blueprint {
    costs: [Stock; RESOURCES],
}

impl Blueprint {
    /// Blueprint from the four robot costs
    ///
    /// Ore and clay robots cost ore, obsidian robots cost ore and clay, geode
    /// robots cost ore and obsidian.
    pub const fn new(
        ore_robot_ore: u32,
        clay_robot_ore: u32,
        obsidian_robot: (u32, u32),
        geode_robot: (u32, u32),
    ) -> Self {
        Self {
            costs: [
                [ore_robot_ore, 0, 0, 0],
                [clay_robot_ore, 0, 0, 0],
                [obsidian_robot.0, obsidian_robot.1, 0, 0],
                [geode_robot.0, 0, geode_robot.1, 0],
            ],
        }
    }

    /// Parse a blueprint sentence
    ///
    /// The numbers in the text are read in order as the ore robot's ore, the
    /// clay robot's ore, the obsidian robot's ore and clay, and the geode
    /// robot's ore and obsidian. A leading `Blueprint N:` label is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not hold exactly six costs
    pub fn parse(text: &str) -> Result<Self> {
        let body = match text.split_once(':') {
            Some((label, rest)) if label.trim_start().starts_with("Blueprint") => rest,
            _ => text,
        };

        let numbers = body
            .split(|c: char| !c.is_ascii_digit())
            .filter(|token| !token.is_empty())
            .map(str::parse::<u32>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| parse_error("blueprint", &err))?;

        match numbers.as_slice() {
            &[ore, clay, obsidian_ore, obsidian_clay, geode_ore, geode_obsidian] => Ok(Self::new(
                ore,
                clay,
                (obsidian_ore, obsidian_clay),
                (geode_ore, geode_obsidian),
            )),
            other => Err(parse_error(
                "blueprint",
                &format!("expected 6 robot costs, found {}", other.len()),
            )),
        }
    }

    /// Cost of the robot mining `resource`
    pub fn cost(&self, resource: usize) -> Option<&Stock> {
        self.costs.get(resource)
    }

    // Robots beyond the largest per-minute spend of a resource are useless,
    // except geode robots which are the goal
    fn worth_building(&self, robots: &Stock, resource: usize) -> bool {
        if resource == GEODE {
            return true;
        }
        let owned = robots.get(resource).copied().unwrap_or(0);
        owned == 0
            || self
                .costs
                .iter()
                .any(|cost| cost.get(resource).copied().unwrap_or(0) > owned)
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [ore, clay, obsidian, geode] = self.costs;
        write!(
            f,
            "ore robot {} ore, clay robot {} ore, obsidian robot {} ore + {} clay, geode robot {} ore + {} obsidian",
            ore[0], clay[0], obsidian[0], obsidian[1], geode[0], geode[2]
        )
    }
}

/// Outcome of a geode optimization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeodeReport {
    /// Most geodes reachable in the time limit
    pub geodes: u32,
    /// Distinct states discovered by the search
    pub states: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Mining {
    remaining: u32,
    stock: Stock,
    robots: Stock,
}

impl Mining {
    // Optimistic bound: current geodes, plus the output of present geode
    // robots, plus a new geode robot every remaining minute
    fn can_beat(&self, best: u32) -> bool {
        let remaining = u64::from(self.remaining);
        let bound = remaining * remaining.saturating_sub(1) / 2
            + u64::from(self.robots[GEODE]) * remaining
            + u64::from(self.stock[GEODE]);
        bound > u64::from(best)
    }

    fn successors(&self, blueprint: &Blueprint) -> Vec<Self> {
        let mut orders = vec![(self.stock, self.robots)];

        for (resource, cost) in blueprint.costs.iter().enumerate() {
            if !blueprint.worth_building(&self.robots, resource) {
                continue;
            }
            let affordable = self.stock.iter().zip(cost).all(|(have, need)| have >= need);
            if !affordable {
                continue;
            }

            let mut stock = self.stock;
            let mut robots = self.robots;
            for (have, need) in stock.iter_mut().zip(cost) {
                *have -= need;
            }
            if let Some(count) = robots.get_mut(resource) {
                *count += 1;
            }
            orders.push((stock, robots));
        }

        // Only robots present at the start of the minute mine during it
        orders
            .into_iter()
            .map(|(mut stock, robots)| {
                for (have, mined) in stock.iter_mut().zip(self.robots) {
                    *have += mined;
                }
                Self {
                    remaining: self.remaining - 1,
                    stock,
                    robots,
                }
            })
            .collect()
    }
}

/// Most geodes a blueprint can open in `minutes`, starting with one ore robot
///
/// Breadth-first over (minutes left, stock, robots), skipping robots that
/// cannot pay off and states whose optimistic bound does not beat the best
/// count seen so far.
#[tracing::instrument(skip(blueprint))]
pub fn max_geodes(blueprint: &Blueprint, minutes: u32) -> GeodeReport {
    let start = Mining {
        remaining: minutes,
        stock: [0; RESOURCES],
        robots: [1, 0, 0, 0],
    };

    let mut discovered = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut best = 0;

    while let Some(current) = queue.pop_front() {
        best = best.max(current.stock[GEODE]);

        if current.remaining == 0 || !current.can_beat(best) {
            continue;
        }

        for next in current.successors(blueprint) {
            if discovered.insert(next) {
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(geodes = best, states = discovered.len(), "geode search finished");
    GeodeReport {
        geodes: best,
        states: discovered.len(),
    }
}
