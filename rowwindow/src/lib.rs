//! A headless row-windowing engine for virtualized lists and tables.
//!
//! Given a row count, per-row size estimates and a scroll position, this crate computes which
//! rows currently fall inside the viewport (widened by an overscan margin), their start offsets
//! and the total content size. Prefix sums over row sizes keep offset -> index lookups and
//! start-offset queries cheap even for very large row counts.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size along the scroll axis (terminal rows, pixels, ...)
//! - scroll offset
//! - row size estimates and (optionally) dynamic measurements
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod sums;
mod types;
mod window;


pub use options::WindowOptions;
pub use types::{Align, ScrollDirection, WindowEntry, WindowRange};
pub use window::RowWindow;
