//! Morph Testing Infrastructure
//!
//! Proptest strategies, assertion macros and tracing setup shared by the
//! integration tests of the workspace.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! morph-testkit = { path = "../morph-testkit" }
//! ```
//!
//! Then in your tests:
//! ```rust,no_run
//! use morph_testkit::strategies::arb_int_value;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn reflexive(a in arb_int_value()) {
//!         morph_testkit::init_test_tracing();
//!         prop_assert_eq!(morph_ord::dispatch::compare(&a, &a), Ok(morph_ord::EQ));
//!     }
//! }
//! ```

pub mod assertions;
pub mod strategies;

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per process. Honors `RUST_LOG`.
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

#[doc(hidden)]
pub mod __private {
    pub use morph_ord::{Compare, OrdError};
}
