use crate::algorithm::bitset::Bitset;
use crate::algorithm::feasibility::Requirement;
use crate::spatial::tiles::{Direction, TileSet};
use std::collections::HashMap;

/// Interned form of a [`Requirement`] used as a cache key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Constraint {
    Free,
    Color(u32),
    Blocked,
}

/// Key for caching candidate sets
///
/// One interned constraint per side, in `[left, up, right, down]` order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SideKey {
    constraints: [Constraint; 4],
}

/// Memoization cache for candidate tile sets
///
/// Maps the constraints on a cell to the catalog indices that satisfy all of
/// them. Per-side indices are built once from the catalog; combined sets are
/// computed on first use and reused for every later cell with the same
/// neighborhood.
pub struct CandidateCache {
    color_ids: HashMap<String, u32>,
    by_side: [HashMap<u32, Bitset>; 4],
    combined: HashMap<SideKey, Bitset>,
    tile_count: usize,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl CandidateCache {
    /// Index a catalog by the color on each of its tiles' sides
    pub fn new(catalog: &TileSet) -> Self {
        let tile_count = catalog.len();
        let mut color_ids: HashMap<String, u32> = HashMap::new();
        let mut by_side: [HashMap<u32, Bitset>; 4] = Default::default();

        for (index, tile) in catalog.iter().enumerate() {
            for direction in Direction::ALL {
                let next_id = color_ids.len() as u32;
                let id = *color_ids
                    .entry(tile.color(direction).as_str().to_string())
                    .or_insert(next_id);

                if let Some(side) = by_side.get_mut(direction.index()) {
                    side.entry(id)
                        .or_insert_with(|| Bitset::new(tile_count))
                        .insert(index);
                }
            }
        }

        Self {
            color_ids,
            by_side,
            combined: HashMap::new(),
            tile_count,
            stats: CacheStats::default(),
        }
    }

    /// Build the cache key for a set of requirements
    ///
    /// A required color that no catalog tile carries is folded into
    /// `Blocked`, since nothing can satisfy it either way.
    pub fn key(&self, requirements: &[Requirement<'_>; 4]) -> SideKey {
        let constraints = (*requirements).map(|requirement| match requirement {
            Requirement::Free => Constraint::Free,
            Requirement::Blocked => Constraint::Blocked,
            Requirement::Exactly(color) => self
                .color_ids
                .get(color.as_str())
                .map_or(Constraint::Blocked, |&id| Constraint::Color(id)),
        });
        SideKey { constraints }
    }

    /// Catalog indices satisfying every requirement, in catalog order
    pub fn candidates(&mut self, requirements: &[Requirement<'_>; 4]) -> Bitset {
        let key = self.key(requirements);

        if let Some(cached) = self.combined.get(&key) {
            self.stats.hits += 1;
            return cached.clone();
        }

        self.stats.misses += 1;
        let computed = self.compute(&key);
        self.combined.insert(key, computed.clone());
        computed
    }

    fn compute(&self, key: &SideKey) -> Bitset {
        let mut result = Bitset::all(self.tile_count);

        for (side, constraint) in self.by_side.iter().zip(key.constraints.iter()) {
            match constraint {
                Constraint::Free => {}
                Constraint::Blocked => return Bitset::new(self.tile_count),
                Constraint::Color(id) => match side.get(id) {
                    Some(members) => result.intersect_with(members),
                    None => return Bitset::new(self.tile_count),
                },
            }
        }

        result
    }

    /// Number of distinct neighborhoods seen so far
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    /// Test whether no neighborhood has been cached yet
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }
}
