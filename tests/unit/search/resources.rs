//! Tests for blueprints and the geode optimization

#[cfg(test)]
mod tests {
    use tilewall::TilingError;
    use tilewall::search::resources::{Blueprint, GeodeReport, RESOURCES, max_geodes};

    const SAMPLE: Blueprint = Blueprint::new(4, 2, (3, 14), (2, 7));

    // Tests costs are laid out per robot in resource order
    // Verified by storing the geode robot's obsidian as clay
    #[test]
    fn test_costs() {
        assert_eq!(RESOURCES, 4);
        assert_eq!(SAMPLE.cost(0), Some(&[4, 0, 0, 0]));
        assert_eq!(SAMPLE.cost(1), Some(&[2, 0, 0, 0]));
        assert_eq!(SAMPLE.cost(2), Some(&[3, 14, 0, 0]));
        assert_eq!(SAMPLE.cost(3), Some(&[2, 0, 7, 0]));
        assert_eq!(SAMPLE.cost(4), None);
    }

    // Tests blueprint sentences parse with and without the label
    // Verified by reading the label number as the first cost
    #[test]
    fn test_parse() -> tilewall::Result<()> {
        let text = "Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. \
                    Each obsidian robot costs 3 ore and 14 clay. \
                    Each geode robot costs 2 ore and 7 obsidian.";
        assert_eq!(Blueprint::parse(text)?, SAMPLE);
        assert_eq!(Blueprint::parse("4 2 3 14 2 7")?, SAMPLE);
        Ok(())
    }

    // Tests the wrong number of costs is refused
    // Verified by padding missing costs with zero
    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Blueprint::parse("4 2 3 14 2"),
            Err(TilingError::Parse {
                what: "blueprint",
                ..
            })
        ));
        assert!(Blueprint::parse("Blueprint 2: 1 2 3 4 5 6 7").is_err());
    }

    // Tests the display form lists each robot cost
    // Verified by printing costs in reverse order
    #[test]
    fn test_display() {
        assert_eq!(
            SAMPLE.to_string(),
            "ore robot 4 ore, clay robot 2 ore, obsidian robot 3 ore + 14 clay, geode robot 2 ore + 7 obsidian"
        );
    }

    // Tests no time means no geodes and a single state
    // Verified by expanding states with zero minutes left
    #[test]
    fn test_no_time() {
        assert_eq!(max_geodes(&SAMPLE, 0), GeodeReport { geodes: 0, states: 1 });
        assert_eq!(max_geodes(&SAMPLE, 1), GeodeReport { geodes: 0, states: 1 });
    }

    // Tests the search frontier for short horizons
    // Verified by letting new robots mine in the minute they are built
    #[test]
    fn test_short_horizons() {
        assert_eq!(max_geodes(&SAMPLE, 5), GeodeReport { geodes: 0, states: 8 });
        assert_eq!(max_geodes(&SAMPLE, 10), GeodeReport { geodes: 0, states: 196 });
    }

    // Tests the first geodes appear at 19 minutes
    // Verified by pruning with a bound that ignores geode robots
    #[test]
    fn test_first_geodes() {
        assert_eq!(max_geodes(&SAMPLE, 18).geodes, 0);
        assert_eq!(
            max_geodes(&SAMPLE, 19),
            GeodeReport {
                geodes: 1,
                states: 115_385
            }
        );
        assert_eq!(max_geodes(&SAMPLE, 20).geodes, 2);
    }

    // Tests the first geode robot needs one minute per link of the chain
    // Verified by paying for robots out of the stock at the end of the minute
    #[test]
    fn test_cheap_blueprint() {
        let cheap = Blueprint::new(1, 1, (1, 1), (1, 1));
        let geodes: Vec<u32> = (6..=10).map(|minutes| max_geodes(&cheap, minutes).geodes).collect();
        assert_eq!(geodes, vec![0, 1, 3, 6, 10]);
    }
}
