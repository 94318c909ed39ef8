//! Binary tree shapes counted by the Catalan numbers
//!
//! Vertices of a shape are named by their path from the root: the root is
//! `""`, its left child `"l"`, the right child of that `"lr"`, and so on.

use std::fmt;

/// Shape of a binary tree, ignoring labels
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No node
    Empty,
    /// A node with its left and right subtrees
    Node(Box<Self>, Box<Self>),
}

impl Shape {
    /// Node with the given subtrees
    pub fn node(left: Self, right: Self) -> Self {
        Self::Node(Box::new(left), Box::new(right))
    }

    /// A single node without children
    pub fn leaf() -> Self {
        Self::node(Self::Empty, Self::Empty)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(left, right) => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Number of empty child slots, always one more than the node count
    pub fn leaf_slots(&self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Node(left, right) => left.leaf_slots() + right.leaf_slots(),
        }
    }

    /// Vertex names in preorder
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        self.walk(String::new(), &mut |path, _| labels.push(path.to_owned()));
        labels
    }

    /// Parent to child edges in preorder of the child
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut edges = Vec::new();
        self.walk(String::new(), &mut |path, _| {
            if let Some(parent) = path.len().checked_sub(1).and_then(|end| path.get(..end)) {
                edges.push((parent.to_owned(), path.to_owned()));
            }
        });
        edges
    }

    /// Vertices with fewer than two children, in preorder
    pub fn non_full_vertices(&self) -> Vec<String> {
        let mut vertices = Vec::new();
        self.walk(String::new(), &mut |path, children| {
            if children < 2 {
                vertices.push(path.to_owned());
            }
        });
        vertices
    }

    /// The same shape with every node's children swapped
    #[must_use]
    pub fn mirrored(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(left, right) => Self::node(right.mirrored(), left.mirrored()),
        }
    }

    // Calls `visit` with the path and child count of every node, in preorder
    fn walk<F>(&self, path: String, visit: &mut F)
    where
        F: FnMut(&str, usize),
    {
        let Self::Node(left, right) = self else {
            return;
        };

        let children = usize::from(**left != Self::Empty) + usize::from(**right != Self::Empty);
        visit(&path, children);
        left.walk(format!("{path}l"), visit);
        right.walk(format!("{path}r"), visit);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "."),
            Self::Node(left, right) => write!(f, "({left} {right})"),
        }
    }
}

/// Every binary tree shape with exactly `nodes` nodes
///
/// For a root whose left subtree has `i` nodes, `i` runs from 0 upward and
/// the left subtree varies slowest. The result has `catalan_number(nodes)`
/// entries, which grows quickly past a dozen nodes.
pub fn binary_trees(nodes: usize) -> Vec<Shape> {
    let mut by_size: Vec<Vec<Shape>> = vec![vec![Shape::Empty]];

    for size in 1..=nodes {
        let mut shapes = Vec::new();
        for left_size in 0..size {
            let lefts = by_size.get(left_size).map_or(&[][..], Vec::as_slice);
            let rights = by_size
                .get(size - 1 - left_size)
                .map_or(&[][..], Vec::as_slice);
            for left in lefts {
                for right in rights {
                    shapes.push(Shape::node(left.clone(), right.clone()));
                }
            }
        }
        by_size.push(shapes);
    }

    by_size.pop().unwrap_or_default()
}

/// The `n`-th Catalan number, or `None` if it does not fit in a `u64`
pub fn catalan_number(n: usize) -> Option<u64> {
    let mut current: u128 = 1;
    for k in 0..n as u128 {
        current = current.checked_mul(2 * (2 * k + 1))? / (k + 2);
        if current > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(current).ok()
}
