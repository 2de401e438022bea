pub mod binder;
pub mod dynamic;
pub mod function;

pub use binder::Binder;
pub use dynamic::{Record, RecordBuilder, TypeError, Value};
pub use function::{ClosureFunction, FfiContext, Function, NativeFn, NativeFunction};
