//! Comparator networks and the known optimal ones for few wires
//!
//! A comparator `(a, b)` with `a < b` leaves the larger value on wire `a`, so
//! a sorting network arranges values in non-increasing order by wire.

use std::fmt;

use crate::io::configuration::MAX_NETWORK_WIRES;
use crate::io::error::{Result, invalid_parameter};

/// Pair of wires compared by one comparator
pub type Comparator = (usize, usize);

// Depth-optimal networks for 1 to 9 wires, one slice of comparators per layer
const OPTIMAL_NETWORKS: [&[&[Comparator]]; 9] = [
    &[],
    &[&[(0, 1)]],
    &[&[(1, 2)], &[(0, 1)], &[(1, 2)]],
    &[&[(0, 1), (2, 3)], &[(1, 3), (0, 2)], &[(1, 2)]],
    &[
        &[(1, 2), (3, 4)],
        &[(1, 3), (0, 2)],
        &[(2, 4), (0, 3)],
        &[(0, 1), (2, 3)],
        &[(1, 2)],
    ],
    &[
        &[(0, 1), (2, 3), (4, 5)],
        &[(0, 2), (3, 5), (1, 4)],
        &[(0, 1), (2, 3), (4, 5)],
        &[(1, 2), (3, 4)],
        &[(2, 3)],
    ],
    &[
        &[(1, 2), (3, 4), (5, 6)],
        &[(0, 2), (4, 6), (3, 5)],
        &[(2, 6), (1, 5), (0, 4)],
        &[(2, 5), (0, 3)],
        &[(2, 4), (1, 3)],
        &[(0, 1), (2, 3), (4, 5)],
    ],
    &[
        &[(0, 7), (1, 6), (2, 5), (3, 4)],
        &[(0, 3), (4, 7), (1, 2), (5, 6)],
        &[(0, 1), (2, 3), (4, 5), (6, 7)],
        &[(3, 5), (2, 4)],
        &[(1, 2), (3, 4), (5, 6)],
        &[(2, 3), (4, 5)],
        &[(3, 4)],
    ],
    &[
        &[(1, 8), (2, 7), (3, 6), (4, 5)],
        &[(0, 2), (6, 7), (1, 4), (5, 8)],
        &[(2, 6), (7, 8), (0, 3), (4, 5)],
        &[(0, 1), (3, 5), (2, 4), (6, 7)],
        &[(1, 3), (5, 7), (4, 6)],
        &[(1, 2), (3, 4), (5, 6), (7, 8)],
        &[(2, 3), (4, 5)],
    ],
];

/// Comparator network arranged in parallel layers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortingNetwork {
    wires: usize,
    layers: Vec<Vec<Comparator>>,
}

impl SortingNetwork {
    /// Build a network on `wires` wires
    ///
    /// # Errors
    ///
    /// Returns an error if a comparator is not `(a, b)` with `a < b < wires`
    /// or a wire is used twice within one layer
    pub fn new(wires: usize, layers: Vec<Vec<Comparator>>) -> Result<Self> {
        if wires == 0 {
            return Err(invalid_parameter("wires", &wires, &"must be at least 1"));
        }

        for (depth, layer) in layers.iter().enumerate() {
            let mut used = vec![false; wires];
            for &(a, b) in layer {
                if a >= b || b >= wires {
                    return Err(invalid_parameter(
                        "layers",
                        &format!("({a}, {b})"),
                        &format!("comparators need a < b < {wires}"),
                    ));
                }
                for wire in [a, b] {
                    match used.get_mut(wire) {
                        Some(seen) if !*seen => *seen = true,
                        _ => {
                            return Err(invalid_parameter(
                                "layers",
                                &format!("({a}, {b})"),
                                &format!("wire {wire} is used twice in layer {depth}"),
                            ));
                        }
                    }
                }
            }
        }

        Ok(Self { wires, layers })
    }

    /// Catalogued depth-optimal network for 1 to 9 wires
    pub fn optimal(wires: usize) -> Option<Self> {
        let layers = OPTIMAL_NETWORKS.get(wires.checked_sub(1)?)?;
        Some(Self {
            wires,
            layers: layers.iter().map(|layer| layer.to_vec()).collect(),
        })
    }

    /// Number of wires
    pub const fn wires(&self) -> usize {
        self.wires
    }

    /// Comparators grouped by layer
    pub fn layers(&self) -> &[Vec<Comparator>] {
        &self.layers
    }

    /// Number of layers
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Number of comparators
    pub fn size(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Run values through the network in place
    ///
    /// # Errors
    ///
    /// Returns an error if the number of values differs from the wire count
    pub fn apply<T: PartialOrd>(&self, values: &mut [T]) -> Result<()> {
        if values.len() != self.wires {
            return Err(invalid_parameter(
                "values",
                &values.len(),
                &format!("network has {} wires", self.wires),
            ));
        }

        for &(a, b) in self.layers.iter().flatten() {
            if let (Some(upper), Some(lower)) = (values.get(a), values.get(b))
                && lower > upper
            {
                values.swap(a, b);
            }
        }
        Ok(())
    }

    /// Test the network on every 0-1 input
    ///
    /// A comparator network sorts every input iff it sorts every binary one.
    ///
    /// # Errors
    ///
    /// Returns an error above `MAX_NETWORK_WIRES` wires
    pub fn sorts_all_inputs(&self) -> Result<bool> {
        if self.wires > MAX_NETWORK_WIRES {
            return Err(invalid_parameter(
                "wires",
                &self.wires,
                &format!("0-1 verification supports at most {MAX_NETWORK_WIRES} wires"),
            ));
        }

        let mut values = vec![0_u8; self.wires];
        for input in 0_u64..(1_u64 << self.wires) {
            for (wire, value) in values.iter_mut().enumerate() {
                *value = ((input >> wire) & 1) as u8;
            }
            self.apply(&mut values)?;
            if values.windows(2).any(|pair| pair.first() < pair.get(1)) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for SortingNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wires, {} layers, {} comparators",
            self.wires,
            self.depth(),
            self.size()
        )?;
        for layer in &self.layers {
            write!(f, "\n  {layer:?}")?;
        }
        Ok(())
    }
}
