//! # Recipe Mosaic
//!
//! Packs a paginated stream of recipes into shape-typed display groups for a
//! masonry feed or uniform category rails. Items are opaque: the packer only
//! counts and moves them, and a renderer lays out each group from its
//! `shape` and `capacity`.
//!
//! # Incremental Packing
//!
//! Results arrive a page at a time. Each call receives the full list seen so
//! far plus a cursor of how many leading results are already placed:
//!
//! ```text
//! page 1:  r001..r007, consumed 0  → left(5)                  [r006..r007 pending]
//! page 2:  r001..r012, consumed 5  → left(5) row3(3)          [r009..r012 pending]
//! end:     r001..r012, consumed 8  → left(5) row3(3) right(4)
//! ```
//!
//! Groups already on screen are never reshaped. The last one may be topped
//! up; otherwise new groups are appended. A group opens only when it can be
//! filled completely, except once the source reports end of stream.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`shape`] | Group shapes, capacities, and the masonry transition table |
//! | [`types`] | `Group`, `GroupList`, `LayoutMode` |
//! | [`grouping`] | `GroupAdder` trait with the `SimpleAdder` and `CategoryAdder` strategies |
//! | [`session`] | Per-search state: group list, cursor, next-page decisions |
//! | [`config`] | `mosaic.toml` loading, validation, and merging |
//! | [`input`] | Recipe id lists for the CLI |
//! | [`output`] | CLI output formatting |

pub mod config;
pub mod grouping;
pub mod input;
pub mod output;
pub mod session;
pub mod shape;
pub mod types;

pub use grouping::{Adder, CategoryAdder, GroupAdder, MaxGroups, SimpleAdder, Strategy};
pub use session::{FeedSession, NextStep};
pub use shape::GroupShape;
pub use types::{Group, GroupList, LayoutMode};

#[cfg(test)]
pub(crate) mod test_helpers;
