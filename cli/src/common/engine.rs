//! Shared environment setup and operation calls.

use bumpalo::Bump;
use seqkit::values::binder::Binder;
use seqkit::{
    Environment, EnvironmentBuilder, Error, FfiContext, Value, parse_literal, register_stdlib,
};

use super::callbacks;
use super::error::CliResult;

/// Build the environment holding the `Array` package.
pub fn build_environment(arena: &Bump) -> CliResult<Environment<'_>> {
    let env = register_stdlib(arena, EnvironmentBuilder::new(arena)).build()?;
    Ok(env)
}

/// Qualify a bare operation name with the `Array` package.
///
/// `map` becomes `Array.map`; names that already contain a dot are kept.
pub fn qualify(operation: &str) -> String {
    if operation.contains('.') {
        operation.to_string()
    } else {
        format!("Array.{}", operation)
    }
}

/// Turn one command-line argument into a value.
///
/// `@name` refers to a built-in callback, anything else is parsed as a
/// literal.
pub fn parse_argument<'a>(arena: &'a Bump, text: &str) -> CliResult<Value<'a>> {
    match text.strip_prefix('@') {
        Some(name) => callbacks::lookup(name)
            .map(|callback| Value::function(arena, callback))
            .ok_or_else(|| Error::UnknownFunction(text.to_string())),
        None => Ok(parse_literal(arena, text)?),
    }
}

/// Parse `array` and `args`, then call `operation` with them.
pub fn evaluate<'a, S: AsRef<str>>(
    arena: &'a Bump,
    env: &Environment<'a>,
    operation: &str,
    array: &str,
    args: &[S],
) -> CliResult<Value<'a>> {
    let path = qualify(operation);
    let mut values = Vec::with_capacity(args.len() + 1);
    values.push(parse_literal(arena, array)?);
    for arg in args {
        values.push(parse_argument(arena, arg.as_ref())?);
    }
    tracing::debug!(operation = %path, argc = values.len(), "evaluating");
    let ctx = FfiContext::new(arena);
    env.call(&ctx, &path, &values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eval(operation: &str, array: &str, args: &[&str]) -> Result<String, Error> {
        let arena = Bump::new();
        let env = build_environment(&arena)?;
        let value = evaluate(&arena, &env, operation, array, args)?;
        Ok(format!("{:?}", value))
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("map"), "Array.map");
        assert_eq!(qualify("Array.findIndex"), "Array.findIndex");
    }

    #[test]
    fn test_evaluate_with_callback_and_literal() {
        assert_eq!(eval("map", "[1, 2, 3]", &["@double"]).unwrap(), "[2, 4, 6]");
        assert_eq!(eval("reduce", "[1, 2, 3]", &["@sum", "10"]).unwrap(), "16");
        assert_eq!(eval("Array.includes", "[1, NaN]", &["NaN"]).unwrap(), "true");
    }

    #[test]
    fn test_unknown_callback() {
        assert_eq!(
            eval("map", "[1]", &["@triple"]).err(),
            Some(Error::UnknownFunction("@triple".to_string()))
        );
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            eval("shuffle", "[1]", &[]).err(),
            Some(Error::UnknownFunction("Array.shuffle".to_string()))
        );
    }

    #[test]
    fn test_bad_literal_is_parse_error() {
        let error = eval("map", "[1, 2", &["@double"]).unwrap_err();
        assert_eq!(error.code(), "E008");
    }
}
