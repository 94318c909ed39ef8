//! Tests for binary tree shapes and Catalan numbers

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilewall::combinatorics::catalan::{Shape, binary_trees, catalan_number};

    // Tests the first Catalan numbers
    // Verified by using k + 1 as the divisor
    #[test]
    fn test_catalan_numbers() {
        let numbers: Vec<Option<u64>> = (0..8).map(catalan_number).collect();
        let expected = [1_u64, 1, 2, 5, 14, 42, 132, 429].map(Some);
        assert_eq!(numbers, expected);
    }

    // Tests the largest Catalan number that fits in 64 bits
    // Verified by removing the overflow check
    #[test]
    fn test_catalan_overflow() {
        assert_eq!(catalan_number(36), Some(11_959_798_385_860_453_492));
        assert_eq!(catalan_number(37), None);
    }

    // Tests the number of shapes per node count follows the Catalan numbers
    // Verified by dropping the last left subtree size
    #[test]
    fn test_binary_tree_counts() {
        for nodes in 0..=7 {
            let shapes = binary_trees(nodes);
            assert_eq!(u64::try_from(shapes.len()).ok(), catalan_number(nodes));

            let distinct: HashSet<&Shape> = shapes.iter().collect();
            assert_eq!(distinct.len(), shapes.len());
            assert!(shapes.iter().all(|shape| shape.node_count() == nodes));
        }
    }

    // Tests generation order: left subtree grows slowest
    // Verified by iterating left sizes downward
    #[test]
    fn test_binary_tree_order() {
        let rendered: Vec<String> = binary_trees(2).iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["(. (. .))", "((. .) .)"]);
        assert_eq!(binary_trees(0), vec![Shape::Empty]);
    }

    // Tests path naming, edges and non-full vertices of a complete tree
    // Verified by naming right children with "l"
    #[test]
    fn test_paths_and_edges() {
        let shape = Shape::node(Shape::node(Shape::Empty, Shape::leaf()), Shape::leaf());

        assert_eq!(shape.labels(), vec!["", "l", "lr", "r"]);
        assert_eq!(
            shape.edges(),
            vec![
                (String::new(), "l".to_owned()),
                ("l".to_owned(), "lr".to_owned()),
                (String::new(), "r".to_owned()),
            ]
        );
        assert_eq!(shape.non_full_vertices(), vec!["l", "lr", "r"]);
    }

    // Tests every shape has one more empty slot than nodes
    // Verified by counting nodes as slots
    #[test]
    fn test_leaf_slots() {
        for shape in binary_trees(5) {
            assert_eq!(shape.leaf_slots(), shape.node_count() + 1);
        }
    }

    // Tests mirroring swaps subtrees and is its own inverse
    // Verified by mirroring only the root
    #[test]
    fn test_mirrored() {
        let shape = Shape::node(Shape::node(Shape::leaf(), Shape::Empty), Shape::Empty);
        let mirror = shape.mirrored();
        assert_eq!(mirror.to_string(), "(. (. (. .)))");
        assert_eq!(mirror.mirrored(), shape);
    }
}
