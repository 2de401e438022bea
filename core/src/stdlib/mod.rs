//! Standard library packages.
//!
//! A package is a record of native functions bound under a package name in
//! the environment. The only package is `Array`, holding the iteration
//! methods over dynamic values.

use crate::values::binder::Binder;
use bumpalo::Bump;

pub mod array;

pub use array::{array_functions, register_array_functions, register_array_package};

/// Register every standard library package in the environment.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use seqkit_core::api::EnvironmentBuilder;
/// use seqkit_core::stdlib::register_stdlib;
/// use seqkit_core::values::binder::Binder;
///
/// let arena = Bump::new();
/// let env = register_stdlib(&arena, EnvironmentBuilder::new(&arena)).build().unwrap();
/// assert!(env.get("Array").is_some());
/// ```
///
/// # Panics
///
/// Panics if there are duplicate bindings within a package.
pub fn register_stdlib<'a, B>(arena: &'a Bump, env: B) -> B
where
    B: Binder<'a>,
{
    register_array_package(arena, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EnvironmentBuilder;

    #[test]
    fn test_register_stdlib() {
        let arena = Bump::new();
        let env = register_stdlib(&arena, EnvironmentBuilder::new(&arena))
            .build()
            .unwrap();
        let array = env.get("Array").unwrap().as_record().unwrap();
        assert_eq!(array.len(), array_functions().len());
        for function in array_functions() {
            let path = format!("Array.{}", function.name());
            assert!(env.resolve(&path).is_some(), "{path} should resolve");
        }
    }

    #[test]
    fn test_register_stdlib_twice_is_duplicate() {
        let arena = Bump::new();
        let env = EnvironmentBuilder::new(&arena);
        let env = register_stdlib(&arena, register_stdlib(&arena, env));
        assert!(env.build().is_err());
    }
}
