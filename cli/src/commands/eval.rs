//! The `eval` command - apply one operation to an array literal.

use bumpalo::Bump;

use crate::cli::EvalArgs;
use crate::common::CliResult;
use crate::common::engine::{build_environment, evaluate};

/// Run the eval command and print the result.
pub fn run(args: EvalArgs) -> CliResult<()> {
    let arena = Bump::new();
    let env = build_environment(&arena)?;
    let result = evaluate(&arena, &env, &args.operation, &args.array, args.args.as_slice())?;
    println!("{:?}", result);
    Ok(())
}
