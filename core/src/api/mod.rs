//! Public API for seqkit.
//!
//! This module holds the stable error type and the environment through which
//! the dynamic `Array` package is reached by dotted name.
//!
//! # Example
//!
//! ```
//! use seqkit_core::api::EnvironmentBuilder;
//! use seqkit_core::parser::parse_literal;
//! use seqkit_core::stdlib::register_stdlib;
//! use seqkit_core::values::{FfiContext, binder::Binder};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let env = register_stdlib(&arena, EnvironmentBuilder::new(&arena))
//!     .build()
//!     .unwrap();
//!
//! let ctx = FfiContext::new(&arena);
//! let numbers = parse_literal(&arena, "[1, 2, NaN, 4]").unwrap();
//! let nan = parse_literal(&arena, "NaN").unwrap();
//! let found = env.call(&ctx, "Array.includes", &[numbers, nan]).unwrap();
//! assert!(found.as_bool().unwrap());
//! ```

pub mod environment;
pub mod error;

pub use environment::{Environment, EnvironmentBuilder};
pub use error::Error;
