//! `launchdir-reviews` — the review domain.
//!
//! Reviews are written by program alumni against a listed product. They are
//! immutable after insertion and listed newest-first.

pub mod review;

pub use review::{NewReview, Review, ReviewForm};
