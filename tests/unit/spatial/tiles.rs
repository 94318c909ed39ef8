//! Tests for colors, directions, tiles and tile catalogs

#[cfg(test)]
mod tests {
    use tilewall::TilingError;
    use tilewall::spatial::tiles::{Color, Direction, Tile, TileSet};

    // Tests hex colors parse into RGB and symbolic ones do not
    // Verified by dropping the prefix check
    #[test]
    fn test_hex_rgb() {
        assert_eq!(Color::new("#b91e2f").hex_rgb(), Some([0xb9, 0x1e, 0x2f]));
        assert_eq!(Color::new("b91e2f").hex_rgb(), None);
        assert_eq!(Color::new("#b91e2").hex_rgb(), None);
        assert_eq!(Color::new("#zz1e2f").hex_rgb(), None);
        assert_eq!(Color::new("(").hex_rgb(), None);
    }

    // Tests sequences split one color per character
    // Verified by splitting on whitespace instead
    #[test]
    fn test_sequence_splits_characters() {
        let colors = Color::sequence("(()");
        assert_eq!(colors, vec![Color::new("("), Color::new("("), Color::new(")")]);
    }

    // Tests integer and text tokens compare as the same color
    // Verified by formatting integers with a prefix
    #[test]
    fn test_color_conversions_agree() {
        assert_eq!(Color::from(1_usize), Color::from("1"));
        assert_eq!(Color::from('1'), Color::from(String::from("1")));
        assert_eq!(Color::new("abc").to_string(), "abc");
    }

    // Tests colors deserialize from strings and integers
    // Verified by removing the integer variant
    #[test]
    fn test_color_deserialize() -> Result<(), serde_json::Error> {
        let colors: Vec<Color> = serde_json::from_str(r##"["#000000", 2, "x"]"##)?;
        assert_eq!(colors, vec![Color::new("#000000"), Color::new("2"), Color::new("x")]);
        Ok(())
    }

    // Tests opposite directions pair up
    // Verified by mapping Up to Left
    #[test]
    fn test_direction_opposite() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    // Tests index order matches the storage order of tile colors
    // Verified by swapping two indices
    #[test]
    fn test_direction_index_matches_all() {
        for (position, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), position);
        }
    }

    // Tests offsets point up towards row 0
    // Verified by flipping the sign of the vertical offset
    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
    }

    // Tests tile colors are stored as left, up, right, down
    // Verified by swapping left and right in the constructor
    #[test]
    fn test_tile_sides() {
        let tile = Tile::new("l", "u", "r", "d");
        assert_eq!(tile.color(Direction::Left).as_str(), "l");
        assert_eq!(tile.color(Direction::Up).as_str(), "u");
        assert_eq!(tile.color(Direction::Right).as_str(), "r");
        assert_eq!(tile.color(Direction::Down).as_str(), "d");
        assert_eq!(tile.to_string(), "Tile(l, u, r, d)");
    }

    // Tests matching compares the facing sides
    // Verified by comparing the same side on both tiles
    #[test]
    fn test_tile_matches() {
        let left = Tile::new("a", "x", "b", "y");
        let right = Tile::new("b", "x", "c", "y");
        assert!(left.matches(&right, Direction::Right));
        assert!(right.matches(&left, Direction::Left));
        assert!(!left.matches(&right, Direction::Left));
        assert!(!right.matches(&left, Direction::Right));

        // Mirrored tiles meet on both sides
        let mirrored = Tile::new("b", "x", "a", "y");
        assert!(left.matches(&mirrored, Direction::Left));
        assert!(left.matches(&mirrored, Direction::Right));
    }

    // Tests tiles deserialize from four-element arrays
    // Verified by reading the array in up, left order
    #[test]
    fn test_tile_deserialize() -> Result<(), serde_json::Error> {
        let tile: Tile = serde_json::from_str(r##"["0", 1, "2", "#b91e2f"]"##)?;
        assert_eq!(tile, Tile::new("0", "1", "2", "#b91e2f"));
        Ok(())
    }

    // Tests an empty catalog is refused
    // Verified by removing the emptiness check
    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(TileSet::new(Vec::new()), Err(TilingError::EmptyCatalog)));
    }

    // Tests catalog order and lookups
    // Verified by sorting the tiles on construction
    #[test]
    fn test_catalog_order() -> tilewall::Result<()> {
        let catalog = TileSet::new(vec![Tile::new("b", "1", "a", "d"), Tile::new("a", "1", "b", "d")])?;
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(0), Some(&Tile::new("b", "1", "a", "d")));
        assert_eq!(catalog.get(2), None);
        assert_eq!(catalog.iter().count(), 2);
        assert_eq!((&catalog).into_iter().count(), catalog.tiles().len());
        Ok(())
    }

    // Tests side offers only look at the requested side
    // Verified by checking every side of each tile
    #[test]
    fn test_offers() -> tilewall::Result<()> {
        let catalog = TileSet::new(vec![Tile::new("a", "1", "b", "d")])?;
        assert!(catalog.offers(Direction::Up, &Color::new("1")));
        assert!(!catalog.offers(Direction::Down, &Color::new("1")));
        assert!(catalog.offers(Direction::Right, &Color::new("b")));
        Ok(())
    }
}
