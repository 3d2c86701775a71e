//! Packing a growing result stream into display groups.
//!
//! | Strategy | Shapes | Minimum fill |
//! |---|---|---|
//! | [`SimpleAdder`] | `left`/`row3`/`right` (wide), `single`/`row2` (narrow) | full capacity, unless end of stream |
//! | [`CategoryAdder`] | `row4` (wide), `row2` (narrow) | none |
//!
//! Adders are immutable configuration. All feed state (the group list and
//! the consumption cursor) is threaded through [`GroupAdder::add_groups`] by
//! the caller, usually a [`FeedSession`](crate::session::FeedSession).

mod category;
mod simple;

pub use category::CategoryAdder;
pub use simple::SimpleAdder;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shape::GroupShape;
use crate::types::{Group, GroupList, LayoutMode};

/// Upper bound on the number of groups a feed may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "MaxGroupsRepr", into = "MaxGroupsRepr")]
pub enum MaxGroups {
    #[default]
    Unlimited,
    Limit(usize),
}

impl MaxGroups {
    /// Whether a feed currently holding `count` groups may open another one.
    pub fn allows_another(self, count: usize) -> bool {
        match self {
            MaxGroups::Unlimited => true,
            MaxGroups::Limit(max) => count < max,
        }
    }
}

impl fmt::Display for MaxGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxGroups::Unlimited => f.write_str("unlimited"),
            MaxGroups::Limit(max) => write!(f, "{max}"),
        }
    }
}

impl FromStr for MaxGroups {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "unlimited" {
            return Ok(MaxGroups::Unlimited);
        }
        s.parse::<usize>()
            .map(MaxGroups::Limit)
            .map_err(|_| format!("expected a group count or \"unlimited\", got '{s}'"))
    }
}

/// TOML has no null, so "no limit" is spelled as the string `"unlimited"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MaxGroupsRepr {
    Limit(usize),
    Keyword(String),
}

impl TryFrom<MaxGroupsRepr> for MaxGroups {
    type Error = String;

    fn try_from(repr: MaxGroupsRepr) -> Result<Self, Self::Error> {
        match repr {
            MaxGroupsRepr::Limit(max) => Ok(MaxGroups::Limit(max)),
            MaxGroupsRepr::Keyword(word) => word.parse(),
        }
    }
}

impl From<MaxGroups> for MaxGroupsRepr {
    fn from(value: MaxGroups) -> Self {
        match value {
            MaxGroups::Unlimited => MaxGroupsRepr::Keyword("unlimited".to_string()),
            MaxGroups::Limit(max) => MaxGroupsRepr::Limit(max),
        }
    }
}

/// Strategy that packs a flat result stream into shape-typed groups.
///
/// `results` is every result seen so far in the current search, and
/// `consumed` is how many leading results are already placed in `groups`.
/// Implementations only ever top up the last group or append new ones; they
/// never remove, split, or reshape an existing group. An out-of-range
/// `consumed` is treated as "nothing new".
pub trait GroupAdder {
    fn max_groups(&self) -> MaxGroups;

    fn add_groups<T: Clone>(
        &self,
        results: &[T],
        consumed: usize,
        end_reached: bool,
        groups: GroupList<T>,
    ) -> GroupList<T>;
}

/// Which adder a feed uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Masonry feed with alternating shapes.
    #[default]
    Simple,
    /// Uniform rails.
    Category,
}

/// Runtime-selected adder, for callers that pick the strategy from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adder {
    Simple(SimpleAdder),
    Category(CategoryAdder),
}

impl Adder {
    pub fn new(strategy: Strategy, layout: LayoutMode, max_groups: MaxGroups) -> Self {
        match strategy {
            Strategy::Simple => Adder::Simple(SimpleAdder::new(layout, max_groups)),
            Strategy::Category => Adder::Category(CategoryAdder::new(layout, max_groups)),
        }
    }
}

impl GroupAdder for Adder {
    fn max_groups(&self) -> MaxGroups {
        match self {
            Adder::Simple(a) => a.max_groups(),
            Adder::Category(a) => a.max_groups(),
        }
    }

    fn add_groups<T: Clone>(
        &self,
        results: &[T],
        consumed: usize,
        end_reached: bool,
        groups: GroupList<T>,
    ) -> GroupList<T> {
        match self {
            Adder::Simple(a) => a.add_groups(results, consumed, end_reached, groups),
            Adder::Category(a) => a.add_groups(results, consumed, end_reached, groups),
        }
    }
}

/// The not-yet-placed tail of `results`, empty when `consumed` overshoots.
pub(crate) fn relevant_slice<T>(results: &[T], consumed: usize) -> &[T] {
    results.get(consumed..).unwrap_or(&[])
}

/// Open a group of `shape` holding up to `take` items from `remaining`.
///
/// Without `force` the group is only created when `remaining` can supply all
/// `take` items. With `force` (end of stream) a short group is allowed, but
/// never an empty one.
pub(crate) fn try_create_group<T: Clone>(
    shape: GroupShape,
    capacity: usize,
    take: usize,
    remaining: &[T],
    force: bool,
) -> Option<Group<T>> {
    if remaining.is_empty() || (remaining.len() < take && !force) {
        return None;
    }
    let mut group = Group::with_capacity(shape, capacity);
    group.fill_from(remaining, take);
    Some(group)
}
