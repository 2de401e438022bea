//! Built-in callbacks that command-line arguments refer to as `@name`.
//!
//! Predicates and transforms read the element from the first argument,
//! reducers read the accumulator and the element from the first two, and
//! comparators compare the first two. A non-number where a number is needed
//! is reported as a thrown error naming the callback.

use seqkit::{Error, FfiContext, NativeFunction, Value};

fn number(callback: &str, args: &[Value<'_>], position: usize) -> Result<f64, Error> {
    args.get(position)
        .copied()
        .unwrap_or(Value::Undefined)
        .as_number()
        .map_err(|e| Error::Thrown(format!("@{}: {}", callback, e)))
}

fn double<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::number(number("double", args, 0)? * 2.0))
}

fn square<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    let n = number("square", args, 0)?;
    Ok(Value::number(n * n))
}

fn is_even<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::bool(number("is_even", args, 0)? % 2.0 == 0.0))
}

fn is_odd<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::bool(number("is_odd", args, 0)?.abs() % 2.0 == 1.0))
}

fn is_positive<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::bool(number("is_positive", args, 0)? > 0.0))
}

fn gt10<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::bool(number("gt10", args, 0)? > 10.0))
}

fn sum<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::number(number("sum", args, 0)? + number("sum", args, 1)?))
}

fn product<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::number(
        number("product", args, 0)? * number("product", args, 1)?,
    ))
}

fn max<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::number(number("max", args, 0)?.max(number("max", args, 1)?)))
}

fn ascending<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::number(
        number("ascending", args, 0)? - number("ascending", args, 1)?,
    ))
}

fn descending<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    Ok(Value::number(
        number("descending", args, 1)? - number("descending", args, 0)?,
    ))
}

fn pair<'a>(ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    let n = number("pair", args, 0)?;
    Ok(Value::array(
        ctx.arena(),
        &[Value::number(n), Value::number(n * 2.0)],
    ))
}

// Printed to stdout so it interleaves with the result.
fn log<'a>(_ctx: &FfiContext<'a>, args: &[Value<'a>]) -> Result<Value<'a>, Error> {
    let element = args.first().copied().unwrap_or(Value::Undefined);
    let index = args.get(1).copied().unwrap_or(Value::Undefined);
    println!("{}: {:?}", index, element);
    Ok(Value::Undefined)
}

static CALLBACKS: [NativeFunction; 13] = [
    NativeFunction::new("double", double).with_doc("x * 2"),
    NativeFunction::new("square", square).with_doc("x * x"),
    NativeFunction::new("is_even", is_even).with_doc("x is an even number"),
    NativeFunction::new("is_odd", is_odd).with_doc("x is an odd number"),
    NativeFunction::new("is_positive", is_positive).with_doc("x > 0"),
    NativeFunction::new("gt10", gt10).with_doc("x > 10"),
    NativeFunction::new("sum", sum).with_doc("reducer: acc + x"),
    NativeFunction::new("product", product).with_doc("reducer: acc * x"),
    NativeFunction::new("max", max).with_doc("reducer: larger of acc and x"),
    NativeFunction::new("ascending", ascending).with_doc("comparator: a - b"),
    NativeFunction::new("descending", descending).with_doc("comparator: b - a"),
    NativeFunction::new("pair", pair).with_doc("[x, x * 2]"),
    NativeFunction::new("log", log).with_doc("print index and element"),
];

/// All built-in callbacks, in listing order.
pub fn callbacks() -> &'static [NativeFunction] {
    &CALLBACKS
}

/// Find a callback by name, without the leading `@`.
pub fn lookup(name: &str) -> Option<NativeFunction> {
    CALLBACKS.iter().find(|callback| callback.name() == name).copied()
}
