//! Growable, aliasable views over shared contiguous storage.
//!
//! Models the mechanism behind a resizable-array slice with its hidden
//! state made explicit: a shared [`Buffer`], an offset into it, a length,
//! and the capacity derived from them.
//!
//! # Architecture
//!
//! ```text
//! View (header: buffer handle + offset + len, immutable)
//! ├── Buffer (Rc<RefCell<Vec<T>>>, fixed length, shared by re-slices)
//! ├── GrowthPolicy (capacity of the fresh buffer on overflowing append)
//! └── ViewError (precondition violations, surfaced by `try_*`)
//! ```
//!
//! # Aliasing contract
//!
//! - **Sub-views** share the parent's buffer and can reach into its unused
//!   tail capacity.
//! - **Appends that fit** write in place and share the buffer.
//! - **Appends that overflow** copy into a fresh buffer; the result no
//!   longer aliases anything.
//!
//! ```
//! use sliver::View;
//!
//! let base: View<i32> = View::make(0, 4);
//! let a = base.append(&[1]);
//! let b = base.append(&[2]);
//! // Both appends wrote slot 0 of the same buffer.
//! assert_eq!(a.at(0), 2);
//!
//! let c = a.append(&[3, 4, 5, 6]);
//! c.set(0, 9);
//! assert_eq!(a.at(0), 2);
//! assert!(!c.shares_storage(&a));
//! # let _ = b;
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod view;

// Public re-exports for the primary API surface.
pub use buffer::Buffer;
pub use config::GrowthPolicy;
pub use error::ViewError;
pub use view::View;
