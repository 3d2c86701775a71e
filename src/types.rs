//! Shared types passed between the adders, the feed session, and output.
//!
//! Groups are serialized as JSON by `recipe-mosaic pack --json`, so the field
//! names and the lowercase shape names are part of the output contract.

use serde::{Deserialize, Serialize};

use crate::shape::GroupShape;

/// Screen class the feed is laid out for. Fixed for an adder's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Tablet: masonry opens with a big `left` block, rails are four wide.
    #[default]
    Wide,
    /// Phone: masonry opens with a `single`, rails are two wide.
    Narrow,
}

/// A display group: a shape tag plus the items placed into it so far.
///
/// `capacity` is stored rather than derived from `shape`. Narrow category
/// rails declare a capacity that differs from their shape's nominal one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group<T> {
    pub shape: GroupShape,
    pub capacity: usize,
    pub items: Vec<T>,
}

/// Ordered groups; insertion order is display order.
pub type GroupList<T> = Vec<Group<T>>;

impl<T> Group<T> {
    /// Empty group with the shape's nominal capacity.
    pub fn new(shape: GroupShape) -> Self {
        Self::with_capacity(shape, shape.capacity())
    }

    pub fn with_capacity(shape: GroupShape, capacity: usize) -> Self {
        Self {
            shape,
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Free slots left before the group is full.
    pub fn room(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }
}

impl<T: Clone> Group<T> {
    /// Append up to `limit` items from the front of `source`, never past
    /// capacity. Returns how many were taken.
    pub fn fill_from(&mut self, source: &[T], limit: usize) -> usize {
        let take = limit.min(self.room()).min(source.len());
        self.items.extend_from_slice(&source[..take]);
        take
    }
}

/// Total number of items placed across all groups.
///
/// Within one search session this equals the consumption cursor to hand
/// back to the next adder call.
pub fn placed_items<T>(groups: &[Group<T>]) -> usize {
    groups.iter().map(Group::len).sum()
}

/// Iterate every placed item in display order.
pub fn flatten<T>(groups: &[Group<T>]) -> impl Iterator<Item = &T> {
    groups.iter().flat_map(|g| g.items.iter())
}
