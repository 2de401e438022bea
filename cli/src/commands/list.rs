//! The `list` command - show what `eval` can call.

use seqkit::stdlib::array_functions;

use crate::common::callbacks::callbacks;

/// Print every operation and built-in callback with its description.
pub fn run() {
    println!("Operations:");
    for function in array_functions() {
        let name = format!("Array.{}", function.name());
        println!("  {:<20} {}", name, function.doc().unwrap_or_default());
    }
    println!();
    println!("Callbacks:");
    for callback in callbacks() {
        let name = format!("@{}", callback.name());
        println!("  {:<20} {}", name, callback.doc().unwrap_or_default());
    }
}
