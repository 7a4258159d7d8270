//! A headless table model engine: column trees, header groups, rows and typed cells.
//!
//! Columns are defined as a tree of leaves (with accessor closures) and groups. Building a
//! [`TableModel`] flattens that tree into ordered leaf columns with resolved widths and a stack
//! of header rows where group headers span their leaves and shallow columns are padded with
//! placeholders. Rows come straight from the backing data, one per record, in input order.
//!
//! It is UI-agnostic: rendering layers read header groups and cell values and draw them however
//! they like.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod column;
mod header;
mod model;
mod value;

#[cfg(test)]
mod tests;

pub use column::{Accessor, ColumnDef, DEFAULT_COLUMN_WIDTH};
pub use header::{Header, HeaderGroup, LeafColumn};
pub use model::{RowRef, SubRowsFn, TableModel};
pub use value::CellValue;
