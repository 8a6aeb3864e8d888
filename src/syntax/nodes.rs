//! Arena-stored structural nodes.
//!
//! Children refer to their parent through an arena index, never a reference,
//! and store positions as offsets from that parent. Only knots carry absolute
//! lines; everything below is derived on demand (see [`super::views`]).

use smol_str::SmolStr;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Index of a knot in its [`super::NodeMap`].
    KnotId
);
arena_id!(
    /// Index of a stitch in its [`super::NodeMap`].
    StitchId
);
arena_id!(
    /// Index of a label in its [`super::NodeMap`].
    LabelId
);

/// A top-level block. `name` is `None` for the file preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knot {
    pub(super) name: Option<SmolStr>,
    pub(super) start_line: u32,
    pub(super) end_line: u32,
    pub(super) is_function: bool,
    /// Closed by the end of the file rather than by another header.
    pub(super) is_last: bool,
    pub(super) stitches: Vec<StitchId>,
}

/// A block within a knot. `name` is `None` for the knot's leading lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stitch {
    pub(super) name: Option<SmolStr>,
    pub(super) knot: KnotId,
    pub(super) relative_start: u32,
    pub(super) relative_end: u32,
    pub(super) is_last: bool,
    pub(super) labels: Vec<LabelId>,
}

/// A labelled gather or choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub(super) name: SmolStr,
    pub(super) stitch: StitchId,
    /// Line offset from the parent stitch's first line.
    pub(super) offset: u32,
}
