use driftql_vars::{gen_var, uniquify, LogicVar, VarCategory};
use rayon::prelude::*;
use std::collections::HashSet;

#[test]
fn parallel_generation_never_collides() {
    let categories = [
        VarCategory::JoinCapable,
        VarCategory::Optional,
        VarCategory::UnGroundable,
    ];

    let ids: Vec<LogicVar> = (0..30_000usize)
        .into_par_iter()
        .map(|i| gen_var(categories[i % categories.len()]))
        .collect();

    let distinct: HashSet<&str> = ids.iter().map(LogicVar::name).collect();
    assert_eq!(distinct.len(), ids.len());
}

#[test]
fn parallel_uniquify_of_one_variable_never_collides() {
    let base = LogicVar::parse("?shared").expect("var");
    let ids: Vec<LogicVar> = (0..10_000usize)
        .into_par_iter()
        .map(|_| uniquify(&base))
        .collect();

    let distinct: HashSet<&LogicVar> = ids.iter().collect();
    assert_eq!(distinct.len(), ids.len());
    assert!(!distinct.contains(&base));
}
