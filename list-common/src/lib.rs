//! # Abstract List Common
//!
//! The persistent cons list shared by the list abstraction crates.
//!
//! ## Modules
//!
//! - [`list`]: the [`List`] type, its primitive accessors and construction helpers
//! - [`error`]: [`ListError`] for the non-panicking accessors
//!
//! ## Design Principles
//!
//! 1. **Immutable**: every operation returns a new list, no cell is ever mutated
//! 2. **Shared tails**: tails sit behind `Arc`, so lists can share structure across threads
//! 3. **Small surface**: `is_empty`, `head`, `tail` and `cons` are enough to write everything else

pub mod error;
pub mod list;

// Re-export main types for convenience
pub use error::ListError;
pub use list::List;
