//! Structural model of a parsed Ink file.
//!
//! ```text
//! NodeMap (one per file)
//!   └── Knot        absolute [start_line, end_line)
//!         └── Stitch    offsets from the knot's start_line
//!               └── Label   offset from the stitch's start line
//! ```
//!
//! Nodes live in flat arenas inside the [`NodeMap`]; parents are referenced
//! by id. Use the [`KnotRef`], [`StitchRef`] and [`LabelRef`] views to read
//! derived positions.

mod node_map;
mod nodes;
mod views;

pub use node_map::NodeMap;
pub use nodes::{KnotId, LabelId, StitchId};
pub use views::{KnotRef, LabelRef, StitchRef};
