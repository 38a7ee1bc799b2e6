//! `launchdir-auth` — authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models JWT
//! claims, validates their time window deterministically, and verifies HS256
//! signatures. Login/signup flows are out of scope; the directory only
//! validates tokens presented to it.

pub mod claims;
pub mod jwt;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
