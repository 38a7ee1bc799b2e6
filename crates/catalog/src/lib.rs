//! `launchdir-catalog` — the directory's product domain.
//!
//! A *product* is a startup accelerator/incubator/fellowship program listed in
//! the directory. This crate owns the product record, the submission payload
//! and its validation, the optional-filter model used by product queries, and
//! the shaping of filter option sets. No storage or HTTP concerns live here.

pub mod filter;
pub mod options;
pub mod product;
pub mod submission;

pub use filter::ProductFilter;
pub use options::{Country, FilterOptions};
pub use product::Product;
pub use submission::{NewProgram, ProgramForm};
