//! Tests for comparator networks

#[cfg(test)]
mod tests {
    use tilewall::TilingError;
    use tilewall::combinatorics::sorting::SortingNetwork;

    // Tests the catalogued networks sort and have the recorded dimensions
    // Verified by removing the last layer of the 5-wire network
    #[test]
    fn test_optimal_networks() -> tilewall::Result<()> {
        let dimensions = [
            (1, 0, 0),
            (2, 1, 1),
            (3, 3, 3),
            (4, 3, 5),
            (5, 5, 9),
            (6, 5, 12),
            (7, 6, 16),
            (8, 7, 20),
            (9, 7, 25),
        ];
        for (wires, depth, size) in dimensions {
            let network = SortingNetwork::optimal(wires);
            assert!(network.is_some(), "missing network for {wires} wires");
            if let Some(network) = network {
                assert_eq!((network.wires(), network.depth(), network.size()), (wires, depth, size));
                assert!(network.sorts_all_inputs()?);
            }
        }
        Ok(())
    }

    // Tests only 1 to 9 wires are catalogued
    // Verified by indexing the table with the wire count directly
    #[test]
    fn test_optimal_range() {
        assert!(SortingNetwork::optimal(0).is_none());
        assert!(SortingNetwork::optimal(10).is_none());
    }

    // Tests values come out largest first
    // Verified by swapping when the upper value is larger
    #[test]
    fn test_apply_descending() -> tilewall::Result<()> {
        let mut values = [3, 9, 1, 7, 5];
        if let Some(network) = SortingNetwork::optimal(5) {
            network.apply(&mut values)?;
        }
        assert_eq!(values, [9, 7, 5, 3, 1]);
        Ok(())
    }

    // Tests a value count different from the wire count is refused
    // Verified by truncating the comparator list instead
    #[test]
    fn test_apply_length_mismatch() -> tilewall::Result<()> {
        let network = SortingNetwork::new(2, vec![vec![(0, 1)]])?;
        let mut values = [1, 2, 3];
        assert!(network.apply(&mut values).is_err());
        Ok(())
    }

    // Tests malformed comparators and reused wires are refused
    // Verified by removing the per-layer wire tracking
    #[test]
    fn test_new_validation() {
        assert!(matches!(
            SortingNetwork::new(0, Vec::new()),
            Err(TilingError::InvalidParameter { .. })
        ));
        assert!(SortingNetwork::new(3, vec![vec![(1, 0)]]).is_err());
        assert!(SortingNetwork::new(3, vec![vec![(0, 3)]]).is_err());
        assert!(SortingNetwork::new(3, vec![vec![(0, 1), (1, 2)]]).is_err());
        assert!(SortingNetwork::new(3, vec![vec![(0, 1)], vec![(1, 2)]]).is_ok());
    }

    // Tests an incomplete network is caught by the 0-1 check
    // Verified by returning true unconditionally
    #[test]
    fn test_incomplete_network_fails() -> tilewall::Result<()> {
        let network = SortingNetwork::new(3, vec![vec![(0, 1)], vec![(1, 2)]])?;
        assert!(!network.sorts_all_inputs()?);
        Ok(())
    }

    // Tests the summary line of the text form
    // Verified by printing depth and size swapped
    #[test]
    fn test_display() -> tilewall::Result<()> {
        let network = SortingNetwork::new(3, vec![vec![(1, 2)], vec![(0, 1)], vec![(1, 2)]])?;
        let text = network.to_string();
        assert!(text.starts_with("3 wires, 3 layers, 3 comparators"));
        assert!(text.contains("[(0, 1)]"));
        Ok(())
    }
}
