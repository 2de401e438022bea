//! `Array` package: the iteration methods over dynamic values.
//!
//! Every function takes the receiver array as its first argument, followed by
//! the method's own arguments: `Array.map(receiver, callback)`. Callbacks are
//! called with `(element, index, receiver)`; reducers with
//! `(accumulator, element, index, receiver)`.
//!
//! Argument checks happen before any element is visited: the receiver must be
//! an array and the callback must be a function. Errors returned by a
//! callback stop the scan and are returned unchanged.

use crate::{
    String, ToString, Vec,
    api::Error,
    ops,
    values::{
        binder::Binder,
        dynamic::{TypeError, Value},
        function::{FfiContext, Function, NativeFunction},
    },
};
use bumpalo::Bump;
use core::{cmp::Ordering, fmt};
use smallvec::SmallVec;

// ============================================================================
// Argument Helpers
// ============================================================================

/// The receiver array, or `InvalidReceiver` for a missing, nullish or
/// non-array receiver.
fn receiver<'a>(operation: &'static str, args: &[Value<'a>]) -> Result<&'a [Value<'a>], Error> {
    match args.first() {
        Some(Value::Array(items)) => {
            tracing::trace!(operation, len = items.len(), "array call");
            Ok(*items)
        }
        Some(other) => Err(Error::InvalidReceiver {
            operation,
            found: other.type_name(),
        }),
        None => Err(Error::InvalidReceiver {
            operation,
            found: "undefined",
        }),
    }
}

/// The function at `position`. A missing argument counts as `undefined`.
fn callback<'a>(
    operation: &'static str,
    args: &[Value<'a>],
    position: usize,
) -> Result<&'a dyn Function<'a>, Error> {
    argument(args, position)
        .as_function()
        .map_err(|mismatch| Error::NotCallable {
            operation,
            found: mismatch.found,
        })
}

fn argument<'a>(args: &[Value<'a>], position: usize) -> Value<'a> {
    args.get(position).copied().unwrap_or(Value::Undefined)
}

/// Reject calls with more arguments than the method accepts, including a
/// trailing `thisArg`.
fn check_arity(
    operation: &'static str,
    args: &[Value<'_>],
    max: usize,
    expected: &'static str,
) -> Result<(), Error> {
    if args.len() > max {
        return Err(Error::ArgumentCount {
            operation,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// An optional integer argument. `undefined` means absent; numbers are
/// truncated toward zero, with `NaN` read as `0`.
fn optional_integer(
    operation: &'static str,
    argument_name: &'static str,
    value: Value<'_>,
) -> Result<Option<isize>, Error> {
    match value {
        Value::Undefined => Ok(None),
        // Float to int casts saturate, and NaN becomes 0
        Value::Number(n) => Ok(Some(n.trunc() as isize)),
        other => Err(Error::InvalidArgument {
            operation,
            argument: argument_name,
            source: TypeError {
                expected: "number",
                found: other.type_name(),
            },
        }),
    }
}

/// Call `f` with `(element, index, receiver)`.
#[inline]
fn call_with_element<'a>(
    ctx: &FfiContext<'a>,
    f: &dyn Function<'a>,
    item: Value<'a>,
    index: usize,
    items: &'a [Value<'a>],
) -> Result<Value<'a>, Error> {
    f.call(ctx, &[item, Value::int(index as i64), Value::Array(items)])
}

fn index_or_minus_one<'a>(index: Option<usize>) -> Value<'a> {
    index.map_or(Value::int(-1), |index| Value::int(index as i64))
}

// ============================================================================
// Transformations
// ============================================================================

/// Transform each element.
///
/// # Examples
/// - `Array.map([1, 2, 3], @double)` → `[2, 4, 6]`
/// - `Array.map([], @double)` → `[]`
fn array_map<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.map";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let f = callback(OP, args, 1)?;
    let mapped = ops::try_map(items, |item, index, _| {
        call_with_element(ctx, f, *item, index, items)
    })?;
    Ok(Value::array(ctx.arena(), &mapped))
}

/// Keep the elements whose callback result is truthy.
fn array_filter<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.filter";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let pred = callback(OP, args, 1)?;
    let kept = ops::try_filter(items, |item, index, _| {
        Ok::<_, Error>(call_with_element(ctx, pred, *item, index, items)?.is_truthy())
    })?;
    Ok(Value::array(ctx.arena(), &kept))
}

/// Visit every element. Returns `undefined`; callback results are ignored.
fn array_for_each<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.forEach";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let visit = callback(OP, args, 1)?;
    ops::try_for_each(items, |item, index, _| {
        call_with_element(ctx, visit, *item, index, items).map(|_| ())
    })?;
    Ok(Value::Undefined)
}

/// Map each element and spread array results one level.
///
/// # Examples
/// - `Array.flatMap([1, 2], @pair)` → `[1, 2, 2, 4]`
fn array_flat_map<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.flatMap";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let f = callback(OP, args, 1)?;
    let flattened = ops::try_flat_map(items, |item, index, _| {
        let produced: SmallVec<[Value<'a>; 4]> =
            match call_with_element(ctx, f, *item, index, items)? {
                Value::Array(inner) => SmallVec::from_slice(inner),
                other => smallvec::smallvec![other],
            };
        Ok::<_, Error>(produced)
    })?;
    Ok(Value::array(ctx.arena(), &flattened))
}

// ============================================================================
// Searches
// ============================================================================

/// First element whose predicate holds, or `undefined`.
fn array_find<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.find";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let pred = callback(OP, args, 1)?;
    let found = ops::try_find(items, |item, index, _| {
        Ok::<_, Error>(call_with_element(ctx, pred, *item, index, items)?.is_truthy())
    })?;
    Ok(found.copied().unwrap_or(Value::Undefined))
}

/// Index of the first element whose predicate holds, or `-1`.
fn array_find_index<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.findIndex";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let pred = callback(OP, args, 1)?;
    let found = ops::try_find_index(items, |item, index, _| {
        Ok::<_, Error>(call_with_element(ctx, pred, *item, index, items)?.is_truthy())
    })?;
    Ok(index_or_minus_one(found))
}

/// Last element whose predicate holds, scanning from the end.
fn array_find_last<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.findLast";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let pred = callback(OP, args, 1)?;
    let found = ops::try_find_last(items, |item, index, _| {
        Ok::<_, Error>(call_with_element(ctx, pred, *item, index, items)?.is_truthy())
    })?;
    Ok(found.copied().unwrap_or(Value::Undefined))
}

fn array_find_last_index<'a>(
    ctx: &FfiContext<'a>,
    args: &[Value<'a>],
) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.findLastIndex";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let pred = callback(OP, args, 1)?;
    let found = ops::try_find_last_index(items, |item, index, _| {
        Ok::<_, Error>(call_with_element(ctx, pred, *item, index, items)?.is_truthy())
    })?;
    Ok(index_or_minus_one(found))
}

/// Whether any predicate result is truthy. `false` for `[]`.
fn array_some<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.some";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let pred = callback(OP, args, 1)?;
    let any = ops::try_some(items, |item, index, _| {
        Ok::<_, Error>(call_with_element(ctx, pred, *item, index, items)?.is_truthy())
    })?;
    Ok(Value::bool(any))
}

/// Whether every predicate result is truthy. `true` for `[]`.
fn array_every<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.every";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let pred = callback(OP, args, 1)?;
    let all = ops::try_every(items, |item, index, _| {
        Ok::<_, Error>(call_with_element(ctx, pred, *item, index, items)?.is_truthy())
    })?;
    Ok(Value::bool(all))
}

// ============================================================================
// Reduction
// ============================================================================

/// Fold the array into one value.
///
/// The seed is present exactly when a third argument was passed, so an
/// explicit `undefined` is a seed. Without a seed the first element is the
/// initial accumulator and an empty array is an error.
///
/// # Examples
/// - `Array.reduce([1, 2, 3, 4], @sum)` → `10`
/// - `Array.reduce([], @sum, 0)` → `0`
/// - `Array.reduce([], @sum)` → error
fn array_reduce<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.reduce";
    check_arity(OP, args, 3, "1 to 3")?;
    let items = receiver(OP, args)?;
    let reducer = callback(OP, args, 1)?;
    let step = |acc: Value<'a>, item: &Value<'a>, index: usize, _: &[Value<'a>]| {
        reducer.call(
            ctx,
            &[acc, *item, Value::int(index as i64), Value::Array(items)],
        )
    };
    match args.get(2) {
        Some(seed) => ops::try_fold(items, *seed, step),
        None => ops::try_reduce(items, step),
    }
}

// ============================================================================
// Membership
// ============================================================================

/// Whether the array contains the needle, with `NaN` matching `NaN`.
///
/// # Examples
/// - `Array.includes([1, NaN], NaN)` → `true`
/// - `Array.includes([1, 2, 3], 1, -2)` → `false`
fn array_includes<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.includes";
    check_arity(OP, args, 3, "1 to 3")?;
    let items = receiver(OP, args)?;
    let needle = argument(args, 1);
    let from = optional_integer(OP, "fromIndex", argument(args, 2))?;
    Ok(Value::bool(ops::includes(items, &needle, from)))
}

/// First index of the needle under strict equality, or `-1`.
fn array_index_of<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.indexOf";
    check_arity(OP, args, 3, "1 to 3")?;
    let items = receiver(OP, args)?;
    let needle = argument(args, 1);
    let from = optional_integer(OP, "fromIndex", argument(args, 2))?;
    Ok(index_or_minus_one(ops::index_of(items, &needle, from)))
}

/// Last index of the needle under strict equality, or `-1`.
fn array_last_index_of<'a>(
    _ctx: &FfiContext<'a>,
    args: &[Value<'a>],
) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.lastIndexOf";
    check_arity(OP, args, 3, "1 to 3")?;
    let items = receiver(OP, args)?;
    let needle = argument(args, 1);
    let from = optional_integer(OP, "fromIndex", argument(args, 2))?;
    Ok(index_or_minus_one(ops::last_index_of(items, &needle, from)))
}

// ============================================================================
// Extraction
// ============================================================================

/// Copy of `[start, end)` with negative offsets from the end.
///
/// # Examples
/// - `Array.slice([1, 2, 3, 4, 5], 1, 3)` → `[2, 3]`
/// - `Array.slice([1, 2, 3, 4, 5], -2, -1)` → `[4]`
/// - `Array.slice([1, 2, 3], 3, 1)` → `[]`
fn array_slice<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.slice";
    check_arity(OP, args, 3, "1 to 3")?;
    let items = receiver(OP, args)?;
    let start = optional_integer(OP, "start", argument(args, 1))?;
    let end = optional_integer(OP, "end", argument(args, 2))?;
    Ok(Value::array(ctx.arena(), &ops::slice(items, start, end)))
}

/// The receiver followed by every further argument. Array arguments are
/// spread, anything else is appended as one element.
fn array_concat<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.concat";
    let items = receiver(OP, args)?;
    let others: SmallVec<[&[Value<'a>]; 4]> = args[1..]
        .iter()
        .map(|other| match other {
            Value::Array(inner) => *inner,
            single => core::slice::from_ref(single),
        })
        .collect();
    Ok(Value::array(ctx.arena(), &ops::concat(items, &others)))
}

/// Elements rendered for `join`: nullish elements become empty.
struct Joined<'a>(Value<'a>);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nullish() {
            Ok(())
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

/// Render the elements separated by `separator` (default `","`).
///
/// # Examples
/// - `Array.join([1, null, "a"], "-")` → `"1--a"`
fn array_join<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.join";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let separator: String = match argument(args, 1) {
        Value::Undefined => ",".to_string(),
        other => other.to_string(),
    };
    let rendered: Vec<Joined<'a>> = ops::map(items, |item, _, _| Joined(*item));
    Ok(Value::str(ctx.arena(), &ops::join(&rendered, &separator)))
}

/// A reversed copy; the receiver is left as is.
fn array_reverse<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.reverse";
    check_arity(OP, args, 1, "1")?;
    let items = receiver(OP, args)?;
    Ok(Value::array(ctx.arena(), &ops::reversed(items)))
}

fn flatten_into<'a>(out: &mut Vec<Value<'a>>, items: &'a [Value<'a>], depth: isize) {
    for item in items {
        match item {
            Value::Array(inner) if depth > 0 => flatten_into(out, inner, depth - 1),
            other => out.push(*other),
        }
    }
}

/// Flatten nested arrays up to `depth` levels (default 1).
///
/// # Examples
/// - `Array.flat([1, [2, [3]]])` → `[1, 2, [3]]`
/// - `Array.flat([1, [2, [3]]], Infinity)` → `[1, 2, 3]`
/// - `Array.flat([1, [2]], 0)` → `[1, [2]]`
fn array_flat<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.flat";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let depth = optional_integer(OP, "depth", argument(args, 1))?.unwrap_or(1);
    let mut out = Vec::with_capacity(items.len());
    flatten_into(&mut out, items, depth);
    Ok(Value::array(ctx.arena(), &out))
}

/// `undefined` sorts after everything else, the rest by string rendering.
fn default_order(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => Ordering::Equal,
        (Value::Undefined, _) => Ordering::Greater,
        (_, Value::Undefined) => Ordering::Less,
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// A sorted copy. Without a comparator values are ordered by their string
/// rendering, so `[10, 9, 1]` sorts to `[1, 10, 9]`.
///
/// A comparator is called with `(a, b)`; a result above zero puts `b` first.
fn array_sort<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    const OP: &str = "Array.sort";
    check_arity(OP, args, 2, "1 to 2")?;
    let items = receiver(OP, args)?;
    let sorted = match argument(args, 1) {
        Value::Undefined => ops::sorted_by(items, default_order),
        _ => {
            let compare = callback(OP, args, 1)?;
            ops::try_sorted_by(items, |a, b| {
                let answer = compare.call(ctx, &[*a, *b])?;
                let n = answer.as_number().unwrap_or(f64::NAN);
                Ok::<_, Error>(if n > 0.0 {
                    Ordering::Greater
                } else if n < 0.0 {
                    Ordering::Less
                } else {
                    Ordering::Equal
                })
            })?
        }
    };
    Ok(Value::array(ctx.arena(), &sorted))
}

// ============================================================================
// Package Registration
// ============================================================================

static ARRAY_FUNCTIONS: [NativeFunction; 20] = [
    NativeFunction::new("map", array_map).with_doc("Transform each element"),
    NativeFunction::new("filter", array_filter).with_doc("Keep elements passing a predicate"),
    NativeFunction::new("forEach", array_for_each).with_doc("Visit each element for effect"),
    NativeFunction::new("find", array_find).with_doc("First element passing a predicate"),
    NativeFunction::new("findIndex", array_find_index)
        .with_doc("Index of the first element passing a predicate, or -1"),
    NativeFunction::new("findLast", array_find_last)
        .with_doc("Last element passing a predicate"),
    NativeFunction::new("findLastIndex", array_find_last_index)
        .with_doc("Index of the last element passing a predicate, or -1"),
    NativeFunction::new("some", array_some).with_doc("Whether any element passes a predicate"),
    NativeFunction::new("every", array_every).with_doc("Whether all elements pass a predicate"),
    NativeFunction::new("reduce", array_reduce)
        .with_doc("Fold into one value, with an optional seed"),
    NativeFunction::new("includes", array_includes)
        .with_doc("Membership test where NaN matches NaN"),
    NativeFunction::new("indexOf", array_index_of)
        .with_doc("First index of a value under strict equality, or -1"),
    NativeFunction::new("lastIndexOf", array_last_index_of)
        .with_doc("Last index of a value under strict equality, or -1"),
    NativeFunction::new("slice", array_slice).with_doc("Copy of a half-open index range"),
    NativeFunction::new("concat", array_concat).with_doc("Append arrays and values"),
    NativeFunction::new("join", array_join).with_doc("Render elements with a separator"),
    NativeFunction::new("reverse", array_reverse).with_doc("Reversed copy"),
    NativeFunction::new("flat", array_flat).with_doc("Flatten nested arrays to a depth"),
    NativeFunction::new("flatMap", array_flat_map)
        .with_doc("Transform then flatten one level"),
    NativeFunction::new("sort", array_sort).with_doc("Sorted copy, stable"),
];

/// The functions of the `Array` package, in registration order.
pub fn array_functions() -> &'static [NativeFunction] {
    &ARRAY_FUNCTIONS
}

/// Registers all functions from the Array package directly to a Binder.
///
/// Use this to flatten the package's contents into a global environment or
/// another record.
pub fn register_array_functions<'a, B>(arena: &'a Bump, mut builder: B) -> B
where
    B: Binder<'a>,
{
    for function in array_functions().iter().copied() {
        builder = function.register(arena, builder);
    }
    builder
}

/// Creates a Record containing all Array functions, then binds it to the
/// Binder under the name `Array`.
///
/// # Panics
///
/// Panics if two package functions share a name, which is a bug in the
/// package table.
pub fn register_array_package<'a, B>(arena: &'a Bump, builder: B) -> B
where
    B: Binder<'a>,
{
    let record = register_array_functions(arena, Value::record_builder(arena))
        .build()
        .expect("duplicate binding in package - check function names");
    builder.bind("Array", record)
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
