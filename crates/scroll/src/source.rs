//! Row-data sources for provisioned cells

use recycler_pool::InstanceHost;
use tracing::warn;

/// Feeds row data into a freshly provisioned cell.
///
/// Implementations decide what "data" means for a row index; the list code
/// only knows indices.
pub trait CellDataSource<H: InstanceHost> {
    /// Push the data for row `index` into `cell`.
    fn provide(&mut self, host: &mut H, cell: &H::Handle, index: usize);
}

/// Hands the bare row index to a callback.
///
/// For lists whose cells resolve their own content from the index.
pub struct IndexDataSource<F> {
    apply: F,
}

impl<F> IndexDataSource<F> {
    /// Wrap `apply` as a data source.
    pub fn new(apply: F) -> Self {
        Self { apply }
    }
}

impl<H, F> CellDataSource<H> for IndexDataSource<F>
where
    H: InstanceHost,
    F: FnMut(&mut H, &H::Handle, usize),
{
    fn provide(&mut self, host: &mut H, cell: &H::Handle, index: usize) {
        (self.apply)(host, cell, index);
    }
}

/// Owns the row data up front and hands `&T` for the requested index to a
/// callback.
///
/// Out-of-range indices are logged and skipped; the cell keeps whatever
/// content it had.
pub struct ArrayDataSource<T, F> {
    items: Vec<T>,
    apply: F,
}

impl<T, F> ArrayDataSource<T, F> {
    /// Wrap `items` and `apply` as a data source.
    pub fn new(items: Vec<T>, apply: F) -> Self {
        Self { items, apply }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<H, T, F> CellDataSource<H> for ArrayDataSource<T, F>
where
    H: InstanceHost,
    F: FnMut(&mut H, &H::Handle, &T),
{
    fn provide(&mut self, host: &mut H, cell: &H::Handle, index: usize) {
        let Some(item) = self.items.get(index) else {
            warn!(index, rows = self.items.len(), "row index out of range");
            return;
        };
        (self.apply)(host, cell, item);
    }
}
