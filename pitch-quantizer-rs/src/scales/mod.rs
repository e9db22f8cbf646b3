//! Scale definitions, note masks and the scale registry.
//!
//! A [`Scale`] is a short list of pitch offsets that repeats every `span`
//! units. A [`ScaleMask`] picks which of those notes are live. [`Scales`]
//! joins the four editable user slots with the built-in [`presets`], and
//! [`ScaleEditor`] performs the edit operations a front panel exposes while
//! keeping every scale sorted and inside its span.

mod editor;
mod error;
mod mask;
pub mod presets;
mod registry;
mod scale;

pub use editor::ScaleEditor;
pub use error::ScaleError;
pub use mask::ScaleMask;
pub use registry::{Scales, USER_SCALE_NAMES};
pub use scale::Scale;

/// Most notes a scale can hold. Also the mask width.
pub const MAX_NOTES: usize = 16;

/// Fewest notes the editor lets a user scale shrink to.
pub const MIN_EDIT_NOTES: usize = 4;

/// Most notes the editor lets a user scale grow to.
pub const MAX_EDIT_NOTES: usize = MAX_NOTES;

/// Number of editable scale slots ahead of the presets.
pub const NUM_USER_SCALES: usize = 4;
