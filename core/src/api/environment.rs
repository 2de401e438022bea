//! Environment builder for registering global values.

use crate::{
    String, ToString, Vec,
    api::Error,
    values::binder::{self, Binder},
    values::{FfiContext, dynamic::Value},
};

use alloc::collections::BTreeMap;
use bumpalo::Bump;

/// Builder for constructing the global environment.
///
/// The environment contains the packages (records of functions) that callers
/// resolve by dotted name, such as `Array.map`.
///
/// # Example
///
/// ```
/// use seqkit_core::api::EnvironmentBuilder;
/// use seqkit_core::stdlib::register_stdlib;
/// use seqkit_core::values::binder::Binder;
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let env = register_stdlib(&arena, EnvironmentBuilder::new(&arena))
///     .build()
///     .unwrap();
/// assert!(env.resolve("Array.map").is_some());
/// ```
pub struct EnvironmentBuilder<'a> {
    arena: &'a Bump,
    entries: BTreeMap<&'a str, Value<'a>>,
    duplicates: Vec<String>,
}

impl<'a> EnvironmentBuilder<'a> {
    /// Create a new environment builder.
    pub fn new(arena: &'a Bump) -> Self {
        Self {
            arena,
            entries: BTreeMap::new(),
            duplicates: Vec::new(),
        }
    }
}

impl<'a> Binder<'a> for EnvironmentBuilder<'a> {
    type Output = Environment<'a>;

    /// Register a global value.
    ///
    /// If a duplicate name is encountered, an error is stored and returned
    /// when `build()` is called.
    fn bind(mut self, name: &str, value: Value<'a>) -> Self {
        if self.entries.contains_key(name) {
            self.duplicates.push(name.to_string());
            return self;
        }

        let name = self.arena.alloc_str(name);
        self.entries.insert(name, value);
        self
    }

    /// Build the final environment, sorted by name.
    fn build(mut self) -> Result<Environment<'a>, binder::Error> {
        if !self.duplicates.is_empty() {
            return Err(binder::Error::DuplicateBinding(core::mem::take(
                &mut self.duplicates,
            )));
        }

        let entries = self.arena.alloc_slice_fill_iter(self.entries);
        Ok(Environment { entries })
    }
}

/// The built global environment.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    entries: &'a [(&'a str, Value<'a>)],
}

impl<'a> Environment<'a> {
    /// Look up a top-level binding.
    pub fn get(&self, name: &str) -> Option<Value<'a>> {
        self.entries
            .binary_search_by(|(entry, _)| (*entry).cmp(name))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Resolve a dotted path (`Array.map`) through nested records.
    pub fn resolve(&self, path: &str) -> Option<Value<'a>> {
        let mut segments = path.split('.');
        let mut value = self.get(segments.next()?)?;
        for segment in segments {
            value = value.as_record().ok()?.get(segment)?;
        }
        Some(value)
    }

    /// Resolve `path` to a function and call it with `args`.
    pub fn call(
        &self,
        ctx: &FfiContext<'a>,
        path: &str,
        args: &[Value<'a>],
    ) -> Result<Value<'a>, Error> {
        let function = self
            .resolve(path)
            .and_then(|value| value.as_function().ok())
            .ok_or_else(|| Error::UnknownFunction(path.to_string()))?;
        tracing::debug!(function = path, argc = args.len(), "calling");
        function.call(ctx, args)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Value<'a>)> + use<'a> {
        self.entries.iter().map(|(name, value)| (*name, *value))
    }
}
