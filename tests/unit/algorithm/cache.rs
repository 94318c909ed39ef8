//! Tests for candidate caching by cell neighborhood

#[cfg(test)]
mod tests {
    use tilewall::algorithm::cache::CandidateCache;
    use tilewall::algorithm::feasibility::Requirement;
    use tilewall::spatial::tiles::{Color, Tile, TileSet};

    fn catalog() -> tilewall::Result<TileSet> {
        TileSet::new(vec![
            Tile::new("a", "1", "b", "d"),
            Tile::new("b", "1", "a", "d"),
            Tile::new("a", "0", "a", "d"),
        ])
    }

    // Tests candidates intersect every constrained side in catalog order
    // Verified by intersecting only the left side
    #[test]
    fn test_candidates_intersect_sides() -> tilewall::Result<()> {
        let catalog = catalog()?;
        let mut cache = CandidateCache::new(&catalog);

        let a = Color::new("a");
        let one = Color::new("1");
        let free = Requirement::Free;

        let left_only = cache.candidates(&[Requirement::Exactly(&a), free, free, free]);
        assert_eq!(left_only.to_vec(), vec![0, 2]);

        let left_and_up =
            cache.candidates(&[Requirement::Exactly(&a), Requirement::Exactly(&one), free, free]);
        assert_eq!(left_and_up.to_vec(), vec![0]);

        let unconstrained = cache.candidates(&[free; 4]);
        assert_eq!(unconstrained.to_vec(), vec![0, 1, 2]);
        Ok(())
    }

    // Tests repeated neighborhoods are served from the cache
    // Verified by never storing computed sets
    #[test]
    fn test_hits_and_misses() -> tilewall::Result<()> {
        let catalog = catalog()?;
        let mut cache = CandidateCache::new(&catalog);
        assert!(cache.is_empty());

        let b = Color::new("b");
        let reqs = [Requirement::Exactly(&b), Requirement::Free, Requirement::Free, Requirement::Free];
        let first = cache.candidates(&reqs);
        let second = cache.candidates(&reqs);

        assert_eq!(first, second);
        assert_eq!(cache.stats.misses, 1);
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    // Tests blocked sides and unknown colors leave no candidates
    // Verified by treating unknown colors as free
    #[test]
    fn test_blocked_and_unknown() -> tilewall::Result<()> {
        let catalog = catalog()?;
        let mut cache = CandidateCache::new(&catalog);

        let blocked = [Requirement::Blocked, Requirement::Free, Requirement::Free, Requirement::Free];
        assert!(cache.candidates(&blocked).is_empty());

        let unknown = Color::new("z");
        let missing = [
            Requirement::Free,
            Requirement::Exactly(&unknown),
            Requirement::Free,
            Requirement::Free,
        ];
        assert!(cache.candidates(&missing).is_empty());
        Ok(())
    }

    // Tests unknown colors share a key with a blocked side
    // Verified by interning unknown colors on the fly
    #[test]
    fn test_unknown_color_folds_to_blocked() -> tilewall::Result<()> {
        let catalog = catalog()?;
        let cache = CandidateCache::new(&catalog);

        let unknown = Color::new("z");
        let free = Requirement::Free;
        assert_eq!(
            cache.key(&[free, Requirement::Exactly(&unknown), free, free]),
            cache.key(&[free, Requirement::Blocked, free, free])
        );
        Ok(())
    }
}
