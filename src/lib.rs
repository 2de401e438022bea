//! seqkit - array iteration methods as typed and dynamic sequence operations
//!
//! # Overview
//!
//! seqkit offers the familiar array iteration methods (`map`, `filter`,
//! `forEach`, `find`, `findIndex`, `some`, `every`, `reduce`, `includes`,
//! `slice` and friends) at two layers:
//!
//! - [`ops`]: generic free functions over slices with Rust closures.
//! - The `Array` package: native functions over dynamic [`Value`]s, reached
//!   by name through an [`Environment`] and reporting the full error
//!   taxonomy (bad receiver, non-callable callback, empty seedless reduce).
//!
//! # Quick Start
//!
//! ```
//! use seqkit::ops;
//!
//! let numbers = [1, 2, 3, 4];
//! let evens = ops::filter(&numbers, |x, _, _| x % 2 == 0);
//! assert_eq!(ops::fold(&evens, 0, |acc, x, _, _| acc + x), 6);
//! assert_eq!(ops::find_index(&numbers, |x, _, _| *x > 2), Some(2));
//! ```
//!
//! # Dynamic Values
//!
//! ```
//! use bumpalo::Bump;
//! use seqkit::{EnvironmentBuilder, parse_literal, register_stdlib};
//! use seqkit::values::{FfiContext, binder::Binder};
//!
//! let arena = Bump::new();
//! let env = register_stdlib(&arena, EnvironmentBuilder::new(&arena)).build().unwrap();
//! let ctx = FfiContext::new(&arena);
//!
//! let nested = parse_literal(&arena, "[1, [2, [3]]]").unwrap();
//! let flat = env.call(&ctx, "Array.flat", &[nested]).unwrap();
//! assert_eq!(format!("{:?}", flat), "[1, 2, [3]]");
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from seqkit_core
pub use seqkit_core::api::{Environment, EnvironmentBuilder, Error};
pub use seqkit_core::ops;
pub use seqkit_core::parser::{
    self, DEFAULT_MAX_PARSE_DEPTH, ParseError, Span, parse_literal, parse_literal_with_max_depth,
};
pub use seqkit_core::stdlib::{self, register_stdlib};
pub use seqkit_core::values::{
    self, ClosureFunction, FfiContext, Function, NativeFn, NativeFunction, Value,
};
