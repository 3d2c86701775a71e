//! Shared test utilities for the recipe-mosaic test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let adder = SimpleAdder::new(LayoutMode::Wide, MaxGroups::Unlimited);
//! let results = items(8);
//! let groups = adder.add_groups(&results, 0, false, Vec::new());
//! assert_eq!(shape_sizes(&groups), vec![(GroupShape::Left, 5), (GroupShape::RowThree, 3)]);
//! assert_conserved(&results, &groups);
//! ```

use crate::shape::GroupShape;
use crate::types::{Group, flatten};

/// `n` recipe ids in stream order: `r001`, `r002`, ...
pub fn items(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("r{i:03}")).collect()
}

/// `(shape, item count)` per group, for compact layout assertions.
pub fn shape_sizes<T>(groups: &[Group<T>]) -> Vec<(GroupShape, usize)> {
    groups.iter().map(|g| (g.shape, g.len())).collect()
}

/// Assert the groups hold exactly `expected`, in order, with no group over
/// capacity.
pub fn assert_conserved<T: PartialEq + std::fmt::Debug>(expected: &[T], groups: &[Group<T>]) {
    for (i, g) in groups.iter().enumerate() {
        assert!(
            g.len() <= g.capacity,
            "group {i} ({}) holds {} items, capacity {}",
            g.shape,
            g.len(),
            g.capacity
        );
    }
    let placed: Vec<&T> = flatten(groups).collect();
    let expected: Vec<&T> = expected.iter().collect();
    assert_eq!(placed, expected, "placed items differ from the result stream");
}
