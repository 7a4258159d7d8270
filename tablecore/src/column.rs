use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::CellValue;

/// Width assigned to a leaf column that sets no explicit width.
pub const DEFAULT_COLUMN_WIDTH: u16 = 10;

/// Extracts a cell value from a record.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// One node of the column tree: either a leaf with an accessor, or a group of child columns.
///
/// Cheap to clone: accessors are stored in `Arc`s.
pub struct ColumnDef<T> {
    pub(crate) id: String,
    pub(crate) header: String,
    pub(crate) width: Option<u16>,
    pub(crate) kind: ColumnKind<T>,
}

pub(crate) enum ColumnKind<T> {
    Leaf(Accessor<T>),
    Group(Vec<ColumnDef<T>>),
}

impl<T> ColumnDef<T> {
    /// Creates a leaf column: `accessor(record)` produces the cell value, `header` the title.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: None,
            kind: ColumnKind::Leaf(Arc::new(accessor)),
        }
    }

    /// Creates a group column spanning `children` in the header rows. Groups own no cells.
    pub fn group(
        id: impl Into<String>,
        header: impl Into<String>,
        children: Vec<ColumnDef<T>>,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: None,
            kind: ColumnKind::Group(children),
        }
    }

    /// Fixes the cell width of a leaf column. Groups derive their width from their leaves.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ColumnKind::Group(_))
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            width: self.width,
            kind: match &self.kind {
                ColumnKind::Leaf(accessor) => ColumnKind::Leaf(Arc::clone(accessor)),
                ColumnKind::Group(children) => ColumnKind::Group(children.clone()),
            },
        }
    }
}

impl<T> core::fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("is_group", &self.is_group())
            .finish_non_exhaustive()
    }
}
