//! Uniform rails: every group has the same shape.
//!
//! Wide rails are `row4` groups of four. Narrow rails are `row2` groups that
//! declare a capacity of four but receive two results each. Groups are never
//! topped up and there is no minimum fill, so the final rail simply holds
//! whatever is left.

use tracing::debug;

use super::{GroupAdder, MaxGroups, relevant_slice, try_create_group};
use crate::shape::GroupShape;
use crate::types::{GroupList, LayoutMode};

/// Capacity declared by every rail group, in both layouts.
const RAIL_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAdder {
    layout: LayoutMode,
    max_groups: MaxGroups,
}

impl CategoryAdder {
    pub fn new(layout: LayoutMode, max_groups: MaxGroups) -> Self {
        Self { layout, max_groups }
    }

    /// Shape and per-group take for this layout.
    fn rail(&self) -> (GroupShape, usize) {
        match self.layout {
            LayoutMode::Wide => (GroupShape::RowFour, 4),
            LayoutMode::Narrow => (GroupShape::RowTwo, 2),
        }
    }
}

impl GroupAdder for CategoryAdder {
    fn max_groups(&self) -> MaxGroups {
        self.max_groups
    }

    fn add_groups<T: Clone>(
        &self,
        results: &[T],
        consumed: usize,
        _end_reached: bool,
        mut groups: GroupList<T>,
    ) -> GroupList<T> {
        let (shape, take) = self.rail();
        let mut remaining = relevant_slice(results, consumed);

        while self.max_groups.allows_another(groups.len()) {
            let Some(group) = try_create_group(shape, RAIL_CAPACITY, take, remaining, true) else {
                break;
            };
            remaining = &remaining[group.len()..];
            groups.push(group);
        }

        debug!(
            %shape,
            groups = groups.len(),
            pending = remaining.len(),
            "packed category rails"
        );
        groups
    }
}
