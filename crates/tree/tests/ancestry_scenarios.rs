//! Ancestry scenarios on a three-parent family and on a custom id type

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use kindred_tree::{Tree, TreeError, TreeResult};

const TRIPLE_PARENT_FAMILY: &str = "\
A
B
C
D
E A B C
F A B C
G A B C
H A B C
I E F D
J F G H
K I G H
L I G D
M A K L
";

fn family() -> TreeResult<Tree<char, 3>> {
    TRIPLE_PARENT_FAMILY.parse()
}

fn set(ids: &str) -> BTreeSet<char> {
    ids.chars().collect()
}

#[test]
fn ancestors_of_each_generation() -> TreeResult<()> {
    let tree = family()?;

    assert_eq!(tree.get_ancestors(&'I')?, set("IABCEFD"));
    assert_eq!(tree.get_ancestors(&'H')?, set("HABC"));
    assert_eq!(tree.get_ancestors(&'M')?, set("ABCDEFGHIKLM"));
    assert_eq!(tree.get_ancestors(&'B')?, set("B"));
    Ok(())
}

#[test]
fn lowest_common_ancestors_across_generations() -> TreeResult<()> {
    let tree = family()?;
    let cases = [
        ('J', 'D', ""),
        ('K', 'M', "K"),
        ('K', 'L', "IG"),
        ('J', 'E', "ABC"),
        ('M', 'M', "M"),
        ('L', 'J', "FG"),
        ('M', 'J', "FGH"),
        ('E', 'D', ""),
    ];

    for (first, second, expected) in cases {
        assert_eq!(
            tree.lowest_common_ancestors(&first, &second)?,
            set(expected),
            "LCA({first}, {second})"
        );
    }
    Ok(())
}

#[test]
fn lowest_common_ancestors_are_symmetric() -> TreeResult<()> {
    let tree = family()?;
    let all: Vec<char> = tree.nodes().map(|node| *node.id()).collect();

    for first in &all {
        for second in &all {
            assert_eq!(
                tree.lowest_common_ancestors(first, second)?,
                tree.lowest_common_ancestors(second, first)?
            );
        }
    }
    Ok(())
}

#[test]
fn no_lowest_common_ancestor_descends_from_another() -> TreeResult<()> {
    let tree = family()?;

    for (first, second) in [('K', 'L'), ('L', 'J'), ('M', 'J'), ('J', 'E')] {
        let lowest = tree.lowest_common_ancestors(&first, &second)?;
        for a in &lowest {
            for b in &lowest {
                if a != b {
                    assert!(!tree.is_ancestor(a, b)?, "{a} is an ancestor of {b}");
                }
            }
        }
    }
    Ok(())
}

#[test]
fn unknown_node_has_no_ancestors() -> TreeResult<()> {
    let tree = family()?;
    assert_eq!(tree.get_ancestors(&'Q').err(), Some(TreeError::node_not_found('Q')));
    assert_eq!(
        tree.lowest_common_ancestors(&'A', &'Q').err(),
        Some(TreeError::node_not_found('Q'))
    );
    Ok(())
}

/// Grid coordinate id written as `x,y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Coord {
    x: i32,
    y: i32,
}

const fn coord(x: i32, y: i32) -> Coord {
    Coord { x, y }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| format!("missing comma in '{s}'"))?;
        let x = x.parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
        let y = y.parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
        Ok(Self { x, y })
    }
}

const COORD_FAMILY: &str = "\
1,1
2,2
1,2 1,1 2,2
2,1 1,1 2,2
3,3 1,2 2,1
";

#[test]
fn custom_ids_round_trip_through_text() -> TreeResult<()> {
    let tree: Tree<Coord, 2> = COORD_FAMILY.parse()?;
    let reparsed: Tree<Coord, 2> = tree.to_string().parse()?;

    assert_eq!(tree.size(), 5);
    assert_eq!(reparsed, tree);
    Ok(())
}

#[test]
fn custom_ids_support_ancestry_queries() -> TreeResult<()> {
    let tree: Tree<Coord, 2> = COORD_FAMILY.parse()?;

    assert_eq!(
        tree.get_ancestors(&coord(3, 3))?.len(),
        5,
        "every node is an ancestor of 3,3"
    );
    assert_eq!(
        tree.lowest_common_ancestors(&coord(1, 2), &coord(3, 3))?,
        BTreeSet::from([coord(1, 2)])
    );
    // Siblings meet at both shared parents.
    assert_eq!(
        tree.lowest_common_ancestors(&coord(1, 2), &coord(2, 1))?,
        BTreeSet::from([coord(1, 1), coord(2, 2)])
    );
    Ok(())
}

#[test]
fn malformed_custom_id_is_rejected() {
    let result = "1,1\n2;2".parse::<Tree<Coord, 2>>();
    assert!(matches!(
        result,
        Err(TreeError::InvalidNodeId { ref token, .. }) if token == "2;2"
    ));
}
