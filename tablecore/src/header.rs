use alloc::string::String;
use alloc::vec::Vec;

use crate::column::{ColumnKind, DEFAULT_COLUMN_WIDTH};
use crate::{Accessor, ColumnDef};

/// A resolved leaf column: the unit cells are read from and widths are measured in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafColumn {
    pub id: String,
    pub title: String,
    pub width: u16,
    pub position: usize,
}

/// One header cell: a group spanning several leaves, a real leaf header, or a placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub column_id: String,
    pub title: String,
    pub span: usize,
    /// Sum of the widths of the leaves this header spans.
    pub width: u16,
    /// Placeholders pad the rows above a leaf that sits shallower than the deepest column.
    pub is_placeholder: bool,
}

/// One header row. `depth` 0 is the topmost row; the bottom row carries the real leaf headers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderGroup {
    pub depth: usize,
    pub headers: Vec<Header>,
}

pub(crate) struct BuiltGrid<T> {
    pub(crate) leaf_columns: Vec<LeafColumn>,
    pub(crate) accessors: Vec<Accessor<T>>,
    pub(crate) header_groups: Vec<HeaderGroup>,
}

struct GroupInfo {
    id: String,
    title: String,
}

struct LeafInfo<T> {
    id: String,
    title: String,
    width: u16,
    // Group ordinals from the root down, assigned in flatten order.
    ancestors: Vec<usize>,
    accessor: Accessor<T>,
}

fn flatten<T>(
    defs: Vec<ColumnDef<T>>,
    path: &mut Vec<usize>,
    groups: &mut Vec<GroupInfo>,
    leaves: &mut Vec<LeafInfo<T>>,
) {
    for def in defs {
        match def.kind {
            ColumnKind::Leaf(accessor) => leaves.push(LeafInfo {
                id: def.id,
                title: def.header,
                width: def.width.unwrap_or(DEFAULT_COLUMN_WIDTH),
                ancestors: path.clone(),
                accessor,
            }),
            ColumnKind::Group(children) => {
                let ordinal = groups.len();
                groups.push(GroupInfo {
                    id: def.id,
                    title: def.header,
                });
                path.push(ordinal);
                flatten(children, path, groups, leaves);
                path.pop();
            }
        }
    }
}

/// Flattens the column tree into ordered leaves and lays out the header rows.
///
/// Layout rules:
/// - Leaf columns are the depth-first leaves of the tree, in definition order.
/// - A group header spans the leaves beneath it; consecutive leaves sharing the same group
///   merge into one header.
/// - Every leaf's real header renders on the bottom row. A leaf shallower than the deepest
///   column gets placeholder headers on the rows between its ancestors and the bottom, so
///   each grid column is present in every header row.
pub(crate) fn build_grid<T>(defs: Vec<ColumnDef<T>>) -> BuiltGrid<T> {
    let mut groups = Vec::new();
    let mut leaves = Vec::new();
    let mut path = Vec::new();
    flatten(defs, &mut path, &mut groups, &mut leaves);

    let depth = leaves
        .iter()
        .map(|leaf| leaf.ancestors.len() + 1)
        .max()
        .unwrap_or(0);

    let mut header_groups = Vec::with_capacity(depth);
    for d in 0..depth {
        let mut headers: Vec<Header> = Vec::new();
        let mut ordinals: Vec<Option<usize>> = Vec::new();
        for leaf in &leaves {
            if let Some(&ordinal) = leaf.ancestors.get(d) {
                if let (Some(last), Some(Some(prev))) = (headers.last_mut(), ordinals.last()) {
                    if *prev == ordinal {
                        last.span += 1;
                        last.width = last.width.saturating_add(leaf.width);
                        continue;
                    }
                }
                headers.push(Header {
                    column_id: groups[ordinal].id.clone(),
                    title: groups[ordinal].title.clone(),
                    span: 1,
                    width: leaf.width,
                    is_placeholder: false,
                });
                ordinals.push(Some(ordinal));
            } else if d + 1 == depth {
                headers.push(Header {
                    column_id: leaf.id.clone(),
                    title: leaf.title.clone(),
                    span: 1,
                    width: leaf.width,
                    is_placeholder: false,
                });
                ordinals.push(None);
            } else {
                headers.push(Header {
                    column_id: leaf.id.clone(),
                    title: String::new(),
                    span: 1,
                    width: leaf.width,
                    is_placeholder: true,
                });
                ordinals.push(None);
            }
        }
        header_groups.push(HeaderGroup { depth: d, headers });
    }

    let mut leaf_columns = Vec::with_capacity(leaves.len());
    let mut accessors = Vec::with_capacity(leaves.len());
    for (position, leaf) in leaves.into_iter().enumerate() {
        leaf_columns.push(LeafColumn {
            id: leaf.id,
            title: leaf.title,
            width: leaf.width,
            position,
        });
        accessors.push(leaf.accessor);
    }

    BuiltGrid {
        leaf_columns,
        accessors,
        header_groups,
    }
}
