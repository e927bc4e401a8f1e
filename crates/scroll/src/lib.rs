//! # recycler-scroll
//!
//! Scroll-list cell provisioning over the `recycler-pool` engine.
//!
//! A scrolling list only ever needs a screenful of live cells: as rows leave
//! the viewport their cells go back to a pool, and incoming rows reuse them.
//! This crate wires that pattern onto [`recycler_pool`]:
//!
//! - [`CellProvider`]: lazily creates and warms the cell pool on first use,
//!   then checks cells in and out of a [`SharedRegistry`]. An optional
//!   recycle hook runs before every return.
//! - [`CellDataSource`]: pushes row data into a provisioned cell, either as
//!   the bare index ([`IndexDataSource`]) or from an owned array
//!   ([`ArrayDataSource`]).
//!
//! Windowing, layout, and rendering stay with the host list widget; this
//! crate only moves instances between the pool and the viewport.
//!
//! ## Usage
//!
//! ```rust
//! use recycler_pool::testing::{MapTemplates, MockHost};
//! use recycler_scroll::{ArrayDataSource, CellDataSource, CellProvider, shared_registry};
//!
//! # fn main() -> Result<(), recycler_pool::PoolError> {
//! let mut host = MockHost::new();
//! let template = host.spawn("cell");
//! let registry = shared_registry(&mut host, MapTemplates::new().with("cell", template));
//!
//! let mut provider = CellProvider::new(registry, "cell").with_warm_up(3);
//! let mut rows = ArrayDataSource::new(
//!     vec!["ammo".to_owned(), "armor".to_owned()],
//!     |host: &mut MockHost, cell: &u32, item: &String| {
//!         use recycler_pool::InstanceHost;
//!         host.set_display_name(cell, item);
//!     },
//! );
//!
//! // Row 1 scrolls into view.
//! let cell = provider.get_cell(&mut host)?.expect("warm pool");
//! rows.provide(&mut host, cell.handle(), 1);
//! assert_eq!(host.object(*cell.handle()).label, "armor");
//!
//! // Row 1 scrolls back out.
//! provider.return_cell(&mut host, &cell)?;
//! # Ok(())
//! # }
//! ```

mod provider;
mod source;

pub use provider::{CellProvider, DEFAULT_WARM_UP, SharedRegistry, shared_registry};
pub use source::{ArrayDataSource, CellDataSource, IndexDataSource};
