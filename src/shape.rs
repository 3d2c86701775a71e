//! Group shapes, their capacities, and the masonry transition table.
//!
//! ```text
//! wide:    left(5) → row3(3) → right(5) → left(5) → ...
//! narrow:  single(1) → row2(2) → single(1) → ...
//! ```
//!
//! `row4` only appears in category rails and has no masonry successor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::LayoutMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupShape {
    /// Big tile on the left with a 2x2 block beside it.
    #[serde(rename = "left")]
    Left,
    /// Mirror of `Left`: 2x2 block first, big tile on the right.
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "row3")]
    RowThree,
    #[serde(rename = "row4")]
    RowFour,
    #[serde(rename = "row2")]
    RowTwo,
    #[serde(rename = "single")]
    Single,
}

impl GroupShape {
    pub const ALL: [GroupShape; 6] = [
        GroupShape::Left,
        GroupShape::Right,
        GroupShape::RowThree,
        GroupShape::RowFour,
        GroupShape::RowTwo,
        GroupShape::Single,
    ];

    /// How many items a group of this shape holds.
    pub fn capacity(self) -> usize {
        match self {
            GroupShape::Left | GroupShape::Right => 5,
            GroupShape::RowFour => 4,
            GroupShape::RowThree => 3,
            GroupShape::RowTwo => 2,
            GroupShape::Single => 1,
        }
    }

    /// The shape that follows a full group of this shape in the masonry feed.
    ///
    /// `None` marks a terminal shape.
    pub fn successor(self) -> Option<GroupShape> {
        match self {
            GroupShape::Left => Some(GroupShape::RowThree),
            GroupShape::RowThree => Some(GroupShape::Right),
            GroupShape::Right => Some(GroupShape::Left),
            GroupShape::RowTwo => Some(GroupShape::Single),
            GroupShape::Single => Some(GroupShape::RowTwo),
            GroupShape::RowFour => None,
        }
    }

    /// First masonry shape for an empty feed.
    pub fn opening(layout: LayoutMode) -> GroupShape {
        match layout {
            LayoutMode::Wide => GroupShape::Left,
            LayoutMode::Narrow => GroupShape::Single,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GroupShape::Left => "left",
            GroupShape::Right => "right",
            GroupShape::RowThree => "row3",
            GroupShape::RowFour => "row4",
            GroupShape::RowTwo => "row2",
            GroupShape::Single => "single",
        }
    }
}

impl fmt::Display for GroupShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
