//! Function value representation for native functions and closures.
//!
//! This module defines the `Function` trait which represents callable values.
//! Supports native Rust function pointers (the `Array` package) and Rust
//! closures that carry their own context.

use super::dynamic::Value;
use crate::api::Error;
use crate::values::binder::Binder;
use bumpalo::Bump;

// ============================================================================
// FFI Context
// ============================================================================

/// Execution context handed to every function call.
///
/// Functions that build arrays or strings allocate them in this arena, so the
/// results live exactly as long as their inputs.
pub struct FfiContext<'a> {
    arena: &'a Bump,
}

impl<'a> FfiContext<'a> {
    /// Create a new context allocating into `arena`.
    #[inline]
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    /// Get the arena for allocating values.
    #[inline]
    pub fn arena(&self) -> &'a Bump {
        self.arena
    }
}

// ============================================================================
// Function Trait
// ============================================================================

/// Trait for callable values.
///
/// Errors returned from `call` are propagated unchanged by every operation
/// that invokes the function; none of them catch or rewrap callback errors.
pub trait Function<'a> {
    /// Name used in diagnostics and when printing the value.
    fn name(&self) -> &str;

    /// Call the function with the given arguments.
    fn call(&self, ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error>;
}

/// Type alias for native function pointers.
///
/// # Example
///
/// ```
/// use seqkit_core::api::Error;
/// use seqkit_core::values::{FfiContext, Value};
///
/// fn double<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
///     let n = args.first().copied().unwrap_or(Value::Undefined);
///     Ok(Value::number(n.as_number().unwrap_or(f64::NAN) * 2.0))
/// }
/// ```
pub type NativeFn =
    for<'a> fn(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error>;

/// Wrapper for native Rust function pointers.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    name: &'static str,
    doc: Option<&'static str>,
    func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        Self {
            name,
            doc: None,
            func,
        }
    }

    pub const fn with_doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn doc(&self) -> Option<&'static str> {
        self.doc
    }

    /// Register this function as a field in a builder, under its own name.
    pub fn register<'a, B>(self, arena: &'a Bump, builder: B) -> B
    where
        B: Binder<'a>,
    {
        let name = self.name;
        builder.bind(name, Value::function(arena, self))
    }
}

impl<'a> Function<'a> for NativeFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn call(&self, ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
        (self.func)(ctx, args)
    }
}

/// A function value backed by a Rust closure.
///
/// Context that would otherwise be threaded through a separate receiver
/// argument is captured by the closure instead.
///
/// ```
/// use bumpalo::Bump;
/// use seqkit_core::values::{ClosureFunction, FfiContext, Function, Value};
///
/// let arena = Bump::new();
/// let threshold = 10.0;
/// let above = ClosureFunction::new("above", move |_ctx, args| {
///     Ok(Value::bool(args[0].as_number().is_ok_and(|n| n > threshold)))
/// });
/// let ctx = FfiContext::new(&arena);
/// assert!(above.call(&ctx, &[Value::number(12.0)]).unwrap().is_truthy());
/// ```
pub struct ClosureFunction<F> {
    name: &'static str,
    func: F,
}

impl<F> ClosureFunction<F> {
    pub fn new<'a>(name: &'static str, func: F) -> Self
    where
        F: Fn(&FfiContext<'a>, &[Value<'a>]) -> Result<Value<'a>, Error>,
    {
        Self { name, func }
    }
}

impl<'a, F> Function<'a> for ClosureFunction<F>
where
    F: Fn(&FfiContext<'a>, &[Value<'a>]) -> Result<Value<'a>, Error>,
{
    fn name(&self) -> &str {
        self.name
    }

    fn call(&self, ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
        (self.func)(ctx, args)
    }
}
