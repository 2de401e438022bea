//! The `demo` command - replay the example scenarios.
//!
//! Each scenario is a short sequence of calls through the `Array` package.
//! A failing call prints its error in place of a result and the replay goes
//! on; those failures are part of what the scenarios show.

use bumpalo::Bump;
use seqkit::{Environment, Error};

use crate::cli::DemoArgs;
use crate::common::CliResult;
use crate::common::engine::{build_environment, evaluate, qualify};

/// One call inside a scenario.
pub struct Step {
    pub label: &'static str,
    pub operation: &'static str,
    pub array: &'static str,
    pub args: &'static [&'static str],
}

/// A named group of steps.
pub struct Scenario {
    pub name: &'static str,
    pub title: &'static str,
    pub steps: &'static [Step],
}

const fn step(
    label: &'static str,
    operation: &'static str,
    array: &'static str,
    args: &'static [&'static str],
) -> Step {
    Step {
        label,
        operation,
        array,
        args,
    }
}

/// Every scenario, in replay order.
pub static CATALOG: &[Scenario] = &[
    Scenario {
        name: "map",
        title: "Transforming every element",
        steps: &[
            step("Double each number", "map", "[1, 2, 3, 4, 5]", &["@double"]),
            step("Square each number", "map", "[1, 2, 3, 4, 5]", &["@square"]),
            step("An empty array maps to an empty array", "map", "[]", &["@double"]),
        ],
    },
    Scenario {
        name: "filter",
        title: "Keeping the elements that pass a test",
        steps: &[
            step("Numbers greater than 10", "filter", "[5, 12, 8, 130, 44]", &["@gt10"]),
            step("Even numbers", "filter", "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]", &["@is_even"]),
            step("Odd numbers", "filter", "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]", &["@is_odd"]),
        ],
    },
    Scenario {
        name: "for-each",
        title: "Visiting every element for its effect",
        steps: &[step("Log index and element", "forEach", r#"["a", "b", "c"]"#, &["@log"])],
    },
    Scenario {
        name: "find",
        title: "Searching with a predicate",
        steps: &[
            step("First number > 10", "find", "[5, 12, 8, 130, 44]", &["@gt10"]),
            step("Index of the first number > 10", "findIndex", "[5, 12, 8, 130, 44]", &["@gt10"]),
            step("Last number > 10", "findLast", "[5, 12, 8, 130, 44]", &["@gt10"]),
            step("Index of the last odd number", "findLastIndex", "[5, 12, 8, 130, 44]", &["@is_odd"]),
            step("No even number", "find", "[1, 3, 5]", &["@is_even"]),
            step("No even number, by index", "findIndex", "[1, 3, 5]", &["@is_even"]),
        ],
    },
    Scenario {
        name: "some-every",
        title: "Testing any or all elements",
        steps: &[
            step("Is any number even?", "some", "[1, 3, 5, 6]", &["@is_even"]),
            step("Are all numbers even?", "every", "[2, 4, 6]", &["@is_even"]),
            step("Are all numbers positive?", "every", "[3, -1, 4]", &["@is_positive"]),
            step("Nothing passes in an empty array", "some", "[]", &["@is_even"]),
            step("Everything passes in an empty array", "every", "[]", &["@is_even"]),
        ],
    },
    Scenario {
        name: "reduce",
        title: "Folding an array into one value",
        steps: &[
            step("Sum", "reduce", "[1, 2, 3, 4]", &["@sum"]),
            step("Sum starting from 10", "reduce", "[1, 2, 3, 4]", &["@sum", "10"]),
            step("Product", "reduce", "[1, 2, 3, 4, 5]", &["@product"]),
            step("Maximum", "reduce", "[3, 9, 4]", &["@max"]),
            step("An empty array with a seed", "reduce", "[]", &["@sum", "0"]),
            step("An empty array without a seed", "reduce", "[]", &["@sum"]),
        ],
    },
    Scenario {
        name: "includes",
        title: "Looking for a value",
        steps: &[
            step("includes finds NaN", "includes", "[1, 2, NaN]", &["NaN"]),
            step("indexOf never finds NaN", "indexOf", "[1, 2, NaN]", &["NaN"]),
            step("First position of 2", "indexOf", "[2, 5, 9, 2]", &["2"]),
            step("Last position of 2", "lastIndexOf", "[2, 5, 9, 2]", &["2"]),
            step("Search from the last element", "includes", "[1, 2, 3]", &["1", "-1"]),
        ],
    },
    Scenario {
        name: "slice",
        title: "Copying part of an array",
        steps: &[
            step("From index 1 up to 3", "slice", "[1, 2, 3, 4, 5]", &["1", "3"]),
            step("The last two elements", "slice", "[1, 2, 3, 4, 5]", &["-2"]),
            step("An inverted range is empty", "slice", "[1, 2, 3]", &["3", "1"]),
        ],
    },
    Scenario {
        name: "concat-join-reverse",
        title: "Combining and rendering arrays",
        steps: &[
            step("Append an array and a value", "concat", "[1, 2]", &["[3, 4]", "5"]),
            step("Join with the default separator", "join", "[1, 2, 3]", &[]),
            step("Join with a dash, skipping null", "join", r#"[1, null, "a"]"#, &["'-'"]),
            step("Reversed copy", "reverse", "[1, 2, 3]", &[]),
        ],
    },
    Scenario {
        name: "flat",
        title: "Flattening nested arrays",
        steps: &[
            step("One level", "flat", "[1, [2, [3, [4]]]]", &[]),
            step("Every level", "flat", "[1, [2, [3, [4]]]]", &["Infinity"]),
            step("Map to pairs and spread them", "flatMap", "[1, 2, 3]", &["@pair"]),
        ],
    },
    Scenario {
        name: "sort",
        title: "Ordering elements",
        steps: &[
            step("Default order compares as strings", "sort", "[10, 9, 1, 2]", &[]),
            step("Numeric ascending", "sort", "[10, 9, 1, 2]", &["@ascending"]),
            step("Numeric descending", "sort", "[10, 9, 1, 2]", &["@descending"]),
            step("undefined sorts last", "sort", r#"["b", undefined, "a"]"#, &[]),
        ],
    },
];

/// Run the demo command.
pub fn run(args: DemoArgs) -> CliResult<()> {
    let arena = Bump::new();
    let env = build_environment(&arena)?;

    let selected = CATALOG
        .iter()
        .filter(|scenario| args.name.as_deref().is_none_or(|name| scenario.name == name));
    for (i, scenario) in selected.enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ({}) ===", scenario.title, scenario.name);
        for step in scenario.steps {
            replay(&arena, &env, step);
        }
    }
    Ok(())
}

fn replay<'a>(arena: &'a Bump, env: &Environment<'a>, step: &Step) {
    let mut call = format!("{}({}", qualify(step.operation), step.array);
    for arg in step.args {
        call.push_str(", ");
        call.push_str(arg);
    }
    call.push(')');

    println!("{}", step.label);
    println!("  {}", call);
    match evaluate(arena, env, step.operation, step.array, step.args) {
        Ok(value) => println!("  => {:?}", value),
        Err(error) => println!("  => {}", describe(&error)),
    }
}

fn describe(error: &Error) -> String {
    format!("error[{}]: {}", error.code(), error)
}
