use crate::{
    String, ToString, Vec, format,
    values::{
        binder::{self, Binder},
        function::Function,
    },
};

use alloc::collections::BTreeMap;
use bumpalo::Bump;
use core::fmt;

/// A dynamically typed value living in a `Bump` arena.
///
/// Values are `Copy`: compound variants only hold references into the arena,
/// so passing a value to a callback never clones its contents.
///
/// Equality (`==`) is strict equality: numbers compare with IEEE semantics
/// (`NaN != NaN`, `0 == -0`), strings by content, and arrays, records and
/// functions by identity. Use [`Value::same_value_zero`] for the comparison
/// that treats two NaNs as equal.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(&'a str),
    Array(&'a [Value<'a>]),
    /// Fields sorted by name.
    Record(&'a [(&'a str, Value<'a>)]),
    Function(&'a dyn Function<'a>),
}

static_assertions::assert_impl_all!(Value<'static>: Copy);
#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(Value<'static>, [usize; 3]);

/// Returned by the `as_*` extractors when the value has a different kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeError {
    pub expected: &'static str,
    pub found: &'static str,
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl core::error::Error for TypeError {}

impl<'a> Value<'a> {
    // ========================================================================
    // Constructors
    // ========================================================================

    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    /// Numbers are always `f64`; indices and counts go through here.
    pub fn int(value: i64) -> Self {
        Value::Number(value as f64)
    }

    pub fn bool(value: bool) -> Self {
        Value::Bool(value)
    }

    /// Copy a string into the arena.
    pub fn str(arena: &'a Bump, value: &str) -> Self {
        Value::Str(arena.alloc_str(value))
    }

    /// Copy the elements into a fresh arena-allocated array.
    ///
    /// The new array has its own identity even when `items` is itself
    /// the contents of another array value.
    pub fn array(arena: &'a Bump, items: &[Value<'a>]) -> Self {
        Value::Array(arena.alloc_slice_copy(items))
    }

    pub fn array_from_iter<I>(arena: &'a Bump, items: I) -> Self
    where
        I: IntoIterator<Item = Value<'a>>,
        I::IntoIter: ExactSizeIterator,
    {
        Value::Array(arena.alloc_slice_fill_iter(items))
    }

    /// Move a function into the arena and wrap it as a value.
    pub fn function<F>(arena: &'a Bump, function: F) -> Self
    where
        F: Function<'a> + 'a,
    {
        let function: &'a F = arena.alloc(function);
        Value::Function(function)
    }

    /// Create a [`RecordBuilder`] for constructing records ergonomically.
    pub fn record_builder(arena: &'a Bump) -> RecordBuilder<'a> {
        RecordBuilder::new(arena)
    }

    // ========================================================================
    // Extractors
    // ========================================================================

    /// Name of the value's kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
            Value::Function(_) => "function",
        }
    }

    fn mismatch(&self, expected: &'static str) -> TypeError {
        TypeError {
            expected,
            found: self.type_name(),
        }
    }

    pub fn as_number(&self) -> Result<f64, TypeError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn as_str(&self) -> Result<&'a str, TypeError> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&'a [Value<'a>], TypeError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_record(&self) -> Result<Record<'a>, TypeError> {
        match self {
            Value::Record(fields) => Ok(Record { fields }),
            other => Err(other.mismatch("record")),
        }
    }

    pub fn as_function(&self) -> Result<&'a dyn Function<'a>, TypeError> {
        match self {
            Value::Function(function) => Ok(*function),
            other => Err(other.mismatch("function")),
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    // ========================================================================
    // Comparisons
    // ========================================================================

    /// Truthiness: `false`, `0`, `-0`, `NaN`, `""`, `null` and `undefined` are
    /// falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Record(_) | Value::Function(_) => true,
        }
    }

    /// Strict equality, except that `NaN` equals `NaN`.
    pub fn same_value_zero(&self, other: &Value<'a>) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // Standard float equality: NaN != NaN
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => core::ptr::eq(*a, *b),
            (Value::Record(a), Value::Record(b)) => core::ptr::eq(*a, *b),
            (Value::Function(a), Value::Function(b)) => core::ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Integral values print without a fractional part, `-0` prints as `0`, and
/// the non-finite values are spelled out.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n == f64::INFINITY {
        f.write_str("Infinity")
    } else if n == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form, with an explicit sign on positive exponents: 1e+21
        let exponential = format!("{:e}", n);
        match exponential.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exponential),
        }
    } else {
        write!(f, "{}", n)
    }
}

/// String conversion: strings are written raw, arrays as their elements
/// joined by `,` with `null`/`undefined` elements left empty.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Record(_) => f.write_str("[object Record]"),
            Value::Function(function) => write!(f, "[function {}]", function.name()),
        }
    }
}

/// Literal-like rendering used for printing results: `[1, "a", null]`.
impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {:?}", name, value)?;
                }
                f.write_str(" }")
            }
            other => fmt::Display::fmt(other, f),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Read-only view over a record's fields.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    fields: &'a [(&'a str, Value<'a>)],
}

impl<'a> Record<'a> {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name (binary search, fields are sorted).
    pub fn get(&self, field_name: &str) -> Option<Value<'a>> {
        self.fields
            .binary_search_by(|(name, _)| (*name).cmp(field_name))
            .ok()
            .map(|idx| self.fields[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Value<'a>)> + use<'a> {
        self.fields.iter().map(|(name, value)| (*name, *value))
    }
}

/// Builder for record values.
///
/// # Example
///
/// ```
/// use seqkit_core::values::{binder::Binder, dynamic::Value};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let rec = Value::record_builder(&arena)
///     .bind("y", Value::number(3.5))
///     .bind("x", Value::int(42)) // Order doesn't matter
///     .build()
///     .unwrap();
/// let fields: Vec<_> = rec.as_record().unwrap().iter().map(|(name, _)| name).collect();
/// assert_eq!(fields, ["x", "y"]);
/// ```
pub struct RecordBuilder<'a> {
    arena: &'a Bump,
    fields: BTreeMap<String, Value<'a>>,
    duplicates: Vec<String>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self {
            arena,
            fields: BTreeMap::new(),
            duplicates: Vec::new(),
        }
    }
}

impl<'a> Binder<'a> for RecordBuilder<'a> {
    type Output = Value<'a>;

    fn bind(mut self, name: &str, value: Value<'a>) -> Self {
        if self.fields.contains_key(name) {
            self.duplicates.push(name.to_string());
            return self;
        }
        self.fields.insert(name.to_string(), value);
        self
    }

    fn build(mut self) -> Result<Self::Output, binder::Error> {
        if !self.duplicates.is_empty() {
            return Err(binder::Error::DuplicateBinding(core::mem::take(
                &mut self.duplicates,
            )));
        }

        let arena = self.arena;
        let fields = arena.alloc_slice_fill_iter(
            self.fields
                .into_iter()
                .map(|(name, value)| (&*arena.alloc_str(&name), value)),
        );
        Ok(Value::Record(fields))
    }
}

#[cfg(test)]
#[path = "dynamic_test.rs"]
mod dynamic_test;
