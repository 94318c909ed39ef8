//! Tests for solver limits and runtime defaults

#[cfg(test)]
mod tests {
    use tilewall::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_MAX_HEIGHT, DEFAULT_SEED, MAX_ENUMERATION_VERTICES,
        MAX_INDIVIDUAL_PROGRESS_BARS, MAX_NETWORK_WIRES, MAX_PERFECTION_VERTICES, MAX_WALL_WIDTH,
        MAX_CELL_SIZE, MIN_CELL_SIZE, OUTPUT_SUFFIX, PROBLEM_EXTENSION,
    };

    // Tests the default height bound
    // Verified by changing the constant value
    #[test]
    fn test_default_max_height() {
        assert_eq!(DEFAULT_MAX_HEIGHT, 4);
    }

    // Tests the wall width bound
    // Verified by reducing the width limit
    #[test]
    fn test_max_wall_width() {
        assert_eq!(MAX_WALL_WIDTH, 1_024);
    }

    // Tests enumeration limits values
    // Verified by raising the enumeration limit to 64
    #[test]
    fn test_enumeration_limits() {
        assert_eq!(MAX_ENUMERATION_VERTICES, 24);
        assert_eq!(MAX_NETWORK_WIRES, 24);
        assert_eq!(MAX_PERFECTION_VERTICES, 12);
    }

    // Tests cell size bounds
    // Verified by setting the default below the minimum
    #[test]
    fn test_cell_sizes() {
        assert_eq!(DEFAULT_CELL_SIZE, 48);
        assert_eq!(MIN_CELL_SIZE, 8);
        assert_eq!(MAX_CELL_SIZE, 512);
    }

    // Tests progress bar limit
    // Verified by increasing bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests output naming constants
    // Verified by changing the suffix
    #[test]
    fn test_file_naming() {
        assert_eq!(OUTPUT_SUFFIX, "_tiling");
        assert_eq!(PROBLEM_EXTENSION, "json");
    }
}
