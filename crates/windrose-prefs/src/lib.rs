#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Durable, origin-scoped layout preference for the Windrose front end.
//!
//! The store holds one record: the `layout-preference` key mapping to a
//! [`LayoutMode`] token. Views open a [`PrefSession`] at mount, read the
//! resolved mode once, and write back on explicit user selection. Reads never
//! fail: anything the allow-list does not recognize resolves to the default.
//! Write failures are logged and absorbed.
//!
//! Backends are substitutable through [`PrefStorage`]: browser `localStorage`
//! in production, [`MemoryStorage`] in tests and native builds.

pub mod mode;
pub mod session;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(target_arch = "wasm32")]
pub use local::BrowserStorage;
pub use mode::LayoutMode;
pub use session::{LAYOUT_KEY, PrefSession};
pub use storage::{MemoryStorage, PrefStorage, StorageError};
