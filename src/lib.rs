//! Splits slash-separated paths into their components.
//!
//! A path is cut into *components*: maximal runs of non-`/` characters, plus
//! a `"/"` root marker for a leading separator and, on paths longer than one
//! character, for a trailing one. Interior separator runs collapse, so no
//! component is ever empty. Nothing is normalized at this layer: `.` and `..`
//! pass through untouched and only `/` counts as a separator.
//!
//! ```
//! use path_components::{join_components, path_components};
//!
//! let parts = path_components("/usr//local/bin/");
//! assert_eq!(parts.as_slice(), ["/", "usr", "local", "bin", "/"]);
//! assert_eq!(parts.join(), "/usr/local/bin/");
//! ```

pub mod components;
pub mod join;

pub use components::{
    components, is_root_marker, path_components, Components, PathComponents, ROOT, SEPARATOR,
};
pub use join::join_components;
