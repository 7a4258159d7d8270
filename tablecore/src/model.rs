use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::header::{BuiltGrid, build_grid};
use crate::{Accessor, CellValue, ColumnDef, HeaderGroup, LeafColumn};

/// Returns the nested child records of a record.
pub type SubRowsFn<T> = Arc<dyn Fn(&T) -> &[T] + Send + Sync>;

/// A headless table model: resolved columns and header rows over a backing record list.
///
/// The model is built eagerly by [`TableModel::new`] and is immutable afterwards. Rows follow
/// the core model only: one row per top-level record, in input order, with no sorting,
/// filtering, grouping or expansion applied.
pub struct TableModel<T> {
    leaf_columns: Vec<LeafColumn>,
    accessors: Vec<Accessor<T>>,
    header_groups: Vec<HeaderGroup>,
    data: Vec<T>,
    get_sub_rows: Option<SubRowsFn<T>>,
    debug: bool,
}

impl<T> TableModel<T> {
    pub fn new(columns: Vec<ColumnDef<T>>, data: Vec<T>) -> Self {
        let BuiltGrid {
            leaf_columns,
            accessors,
            header_groups,
        } = build_grid(columns);
        Self {
            leaf_columns,
            accessors,
            header_groups,
            data,
            get_sub_rows: None,
            debug: false,
        }
    }

    /// Exposes nested child records. The core row model still renders top-level records only;
    /// consumers that expand rows read children through [`RowRef::sub_rows`].
    pub fn with_get_sub_rows(
        mut self,
        get_sub_rows: impl Fn(&T) -> &[T] + Send + Sync + 'static,
    ) -> Self {
        self.get_sub_rows = Some(Arc::new(get_sub_rows));
        self
    }

    /// Enables grid-construction logging (emitted under the `tracing` feature).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self.log_grid();
        self
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    fn log_grid(&self) {
        if !self.debug {
            return;
        }
        tdebug!(
            rows = self.data.len(),
            leaf_columns = self.leaf_columns.len(),
            header_rows = self.header_groups.len(),
            total_width = self.total_width(),
            "table model built"
        );
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn row(&self, index: usize) -> Option<RowRef<'_, T>> {
        (index < self.data.len()).then(|| RowRef { model: self, index })
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_, T>> {
        (0..self.data.len()).map(move |index| RowRef { model: self, index })
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn leaf_columns(&self) -> &[LeafColumn] {
        &self.leaf_columns
    }

    pub fn leaf_column(&self, column_id: &str) -> Option<&LeafColumn> {
        self.leaf_columns.iter().find(|c| c.id == column_id)
    }

    /// Header rows from the top down; the last row carries the real leaf headers.
    pub fn header_groups(&self) -> &[HeaderGroup] {
        &self.header_groups
    }

    /// Sum of all leaf column widths.
    pub fn total_width(&self) -> u32 {
        self.leaf_columns.iter().map(|c| c.width as u32).sum()
    }
}

impl<T: Clone> Clone for TableModel<T> {
    fn clone(&self) -> Self {
        Self {
            leaf_columns: self.leaf_columns.clone(),
            accessors: self.accessors.clone(),
            header_groups: self.header_groups.clone(),
            data: self.data.clone(),
            get_sub_rows: self.get_sub_rows.clone(),
            debug: self.debug,
        }
    }
}

impl<T> core::fmt::Debug for TableModel<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableModel")
            .field("rows", &self.data.len())
            .field("leaf_columns", &self.leaf_columns)
            .field("header_rows", &self.header_groups.len())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// A borrowed view of one row.
pub struct RowRef<'a, T> {
    model: &'a TableModel<T>,
    index: usize,
}

impl<'a, T> RowRef<'a, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn data(&self) -> &'a T {
        &self.model.data[self.index]
    }

    /// Evaluates the accessor of the leaf column at `position` against this row's record.
    pub fn cell_at(&self, position: usize) -> Option<CellValue> {
        let accessor = self.model.accessors.get(position)?;
        Some(accessor(self.data()))
    }

    pub fn cell(&self, column_id: &str) -> Option<CellValue> {
        let column = self.model.leaf_column(column_id)?;
        self.cell_at(column.position)
    }

    /// Calls `f` with every leaf column and this row's cell value for it, in column order.
    pub fn for_each_cell(&self, mut f: impl FnMut(&LeafColumn, CellValue)) {
        for (column, accessor) in self.model.leaf_columns.iter().zip(&self.model.accessors) {
            f(column, accessor(self.data()));
        }
    }

    pub fn sub_rows(&self) -> &'a [T] {
        match &self.model.get_sub_rows {
            Some(get) => get(self.data()),
            None => &[],
        }
    }
}

impl<T> Clone for RowRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowRef<'_, T> {}

impl<T> core::fmt::Debug for RowRef<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowRef").field("index", &self.index).finish()
    }
}
