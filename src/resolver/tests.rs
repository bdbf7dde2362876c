use super::{resolve_origin, resolve_origin_with_depth, resolve_parameter_names};
use crate::callable::{Callable, Captured, ParameterMeta};

fn two_arg_function() -> Callable {
    Callable::function(
        "x",
        vec![
            ParameterMeta::positional("a"),
            ParameterMeta::positional("b"),
        ],
    )
}

#[test]
fn test_plain_function_is_its_own_origin() {
    let f = two_arg_function();
    assert_eq!(resolve_origin(&f), f);
    let names = resolve_parameter_names(&f);
    assert!(names.contains("a") && names.contains("b"));
}

#[test]
fn test_wrapper_with_own_parameters_is_terminal() {
    let f = two_arg_function();
    // A decorator that takes configuration of its own must not be unwrapped
    // past, even though it closes over a single callable.
    let w = Callable::closure(
        "configured",
        vec![ParameterMeta::positional("retries")],
        vec![Captured::Callable(f)],
    );
    assert_eq!(resolve_origin(&w), w);
}

#[test]
fn test_ambiguous_captures_are_terminal() {
    let f = two_arg_function();
    let g = Callable::function("g", vec![]);
    let w = Callable::closure(
        "wrapper",
        vec![],
        vec![Captured::Callable(f), Captured::Callable(g)],
    );
    assert_eq!(resolve_origin(&w), w);

    let empty = Callable::closure("wrapper", vec![], vec![Captured::Value("state".into())]);
    assert_eq!(resolve_origin(&empty), empty);
}

#[test]
fn test_overlong_chain_hits_depth_bound() {
    let mut chain = two_arg_function();
    let innermost = chain.clone();
    for i in 0..(super::MAX_UNWRAP_DEPTH + 10) {
        chain = Callable::closure(
            &format!("layer_{}", i),
            vec![],
            vec![Captured::Callable(chain)],
        );
    }
    // Returns the last examined node instead of walking forever.
    let resolved = resolve_origin(&chain);
    assert_ne!(resolved, innermost);
}

#[test]
fn test_depth_bound_returns_last_examined() {
    let mut chain = two_arg_function();
    let innermost = chain.clone();
    for i in 0..10 {
        chain = Callable::closure(
            &format!("layer_{}", i),
            vec![],
            vec![Captured::Callable(chain)],
        );
    }
    // Generous bound resolves the whole stack.
    assert_eq!(resolve_origin(&chain), innermost);
    // A tight bound stops mid-chain without panicking.
    let partial = resolve_origin_with_depth(&chain, 3);
    assert_ne!(partial, innermost);
}
