//! Masonry packing with alternating shapes.
//!
//! Each pass of the loop does exactly one of:
//!
//! 1. top up the last group if it has room,
//! 2. open the next shape from [`GroupShape::successor`] (or the layout's
//!    opening shape for an empty feed),
//! 3. stop.
//!
//! A new group must be filled to capacity in one go. Once the source reports
//! end of stream that gate is lifted so the last few results still show up
//! in a short final group.

use tracing::debug;

use super::{GroupAdder, MaxGroups, relevant_slice, try_create_group};
use crate::shape::GroupShape;
use crate::types::{GroupList, LayoutMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleAdder {
    layout: LayoutMode,
    max_groups: MaxGroups,
}

impl SimpleAdder {
    pub fn new(layout: LayoutMode, max_groups: MaxGroups) -> Self {
        Self { layout, max_groups }
    }

    /// Shape for the group that follows `last`, or `None` to stop.
    ///
    /// A terminal shape (one with no successor) only continues when forced,
    /// restarting from the layout's opening shape.
    fn next_shape(&self, last: Option<GroupShape>, force: bool) -> Option<GroupShape> {
        match last {
            None => Some(GroupShape::opening(self.layout)),
            Some(shape) => match shape.successor() {
                Some(next) => Some(next),
                None if force => Some(GroupShape::opening(self.layout)),
                None => None,
            },
        }
    }
}

impl GroupAdder for SimpleAdder {
    fn max_groups(&self) -> MaxGroups {
        self.max_groups
    }

    fn add_groups<T: Clone>(
        &self,
        results: &[T],
        consumed: usize,
        end_reached: bool,
        mut groups: GroupList<T>,
    ) -> GroupList<T> {
        let mut remaining = relevant_slice(results, consumed);

        while !remaining.is_empty() {
            if let Some(last) = groups.last_mut().filter(|g| !g.is_full()) {
                let taken = last.fill_from(remaining, usize::MAX);
                debug!(shape = %last.shape, taken, len = last.len(), "topped up last group");
                remaining = &remaining[taken..];
                continue;
            }

            if !self.max_groups.allows_another(groups.len()) {
                debug!(groups = groups.len(), max = %self.max_groups, "group limit reached");
                break;
            }

            let Some(shape) = self.next_shape(groups.last().map(|g| g.shape), end_reached) else {
                debug!("terminal shape, no further groups");
                break;
            };

            let capacity = shape.capacity();
            let Some(group) = try_create_group(shape, capacity, capacity, remaining, end_reached)
            else {
                debug!(
                    %shape,
                    needed = capacity,
                    pending = remaining.len(),
                    "not enough results for next group"
                );
                break;
            };

            let short = group.len() < capacity;
            debug!(%shape, len = group.len(), short, "opened group");
            remaining = &remaining[group.len()..];
            groups.push(group);
        }

        groups
    }
}
