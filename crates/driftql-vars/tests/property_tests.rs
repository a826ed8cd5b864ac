use driftql_vars::{
    build_drift_map, intersect_drift_maps, is_join_capable, is_optional, is_ungrounding,
    sanitize_predicate, unique, DriftMap, EqualityMap, Literal, LogicVar, Term, VarCategory,
    VarGenerator,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn constant_leaf() -> impl Strategy<Value = Term> {
    prop_oneof![
        any::<i64>().prop_map(Term::int),
        any::<bool>().prop_map(|b| Term::Literal(Literal::Bool(b))),
        Just(Term::Literal(Literal::Null)),
        proptest::string::string_regex("[a-z][a-z0-9/]{0,8}")
            .unwrap()
            .prop_map(Term::symbol),
        proptest::string::string_regex("[A-Za-z0-9 ,]{0,12}")
            .unwrap()
            .prop_map(Term::string),
    ]
}

fn constant_tree() -> impl Strategy<Value = Term> {
    constant_leaf().prop_recursive(3, 32, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Term::Seq)
    })
}

fn var_name() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("?"), Just("!"), Just("!!")],
        proptest::string::string_regex("[a-e]").unwrap(),
    )
        .prop_map(|(prefix, stem)| format!("{prefix}{stem}"))
}

fn slot() -> impl Strategy<Value = Term> {
    prop_oneof![
        3 => var_name().prop_map(|n| Term::Var(LogicVar::parse(&n).unwrap())),
        1 => any::<i64>().prop_map(Term::int),
    ]
}

fn category() -> impl Strategy<Value = VarCategory> {
    prop_oneof![
        Just(VarCategory::JoinCapable),
        Just(VarCategory::Optional),
        Just(VarCategory::UnGroundable),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_ids_are_distinct_and_partitioned(
        cats in proptest::collection::vec(category(), 1..64)
    ) {
        let mut seen = HashSet::new();
        for c in cats {
            let v = VarGenerator::new(c).fresh();
            let flags = [
                is_join_capable(&v),
                is_optional(&v) && !is_ungrounding(&v),
                is_ungrounding(&v),
            ];
            prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            if is_ungrounding(&v) {
                prop_assert!(is_optional(&v));
            }
            prop_assert!(seen.insert(v));
        }
    }

    #[test]
    fn sanitize_leaves_variable_free_data_alone(t in constant_tree()) {
        prop_assert_eq!(sanitize_predicate(&t), t);
    }

    #[test]
    fn unique_preserves_shape_and_records_every_rename(
        tokens in proptest::collection::vec(slot(), 0..12)
    ) {
        let (out, eq) = unique(&tokens, EqualityMap::new());
        prop_assert_eq!(out.len(), tokens.len());

        let mut groundable_outputs = HashSet::new();
        for (before, after) in tokens.iter().zip(&out) {
            match before.as_logic_var() {
                None => prop_assert_eq!(before, after),
                Some(v) => {
                    let renamed = after.as_logic_var().unwrap();
                    prop_assert_eq!(renamed.category(), v.category());
                    let group = eq.get(&v).unwrap();
                    prop_assert!(group.contains(&renamed));
                    if v.category().is_groundable() {
                        prop_assert!(groundable_outputs.insert(renamed));
                    } else {
                        prop_assert_eq!(renamed, v);
                    }
                }
            }
        }

        let drift = build_drift_map(&eq);
        for (dup, original) in drift.iter() {
            prop_assert!(eq.get(dup).is_none());
            prop_assert!(eq.get(original).unwrap()[1..].contains(dup));
        }
    }

    #[test]
    fn intersection_is_contained_in_every_branch(
        branches in proptest::collection::vec(proptest::collection::vec(slot(), 0..10), 1..4)
    ) {
        let maps: Vec<DriftMap> = branches
            .iter()
            .map(|tokens| build_drift_map(&unique(tokens, EqualityMap::new()).1))
            .collect();

        let common = intersect_drift_maps(&maps).unwrap();
        for (key, value) in common.iter() {
            prop_assert_eq!(key, value);
            for m in &maps {
                prop_assert!(m.contains(key));
            }
        }

        // A branch reconciled with itself keeps all of its duplicates.
        let first = &maps[0];
        let same = intersect_drift_maps([first, first]).unwrap();
        prop_assert_eq!(same.len(), first.len());
        prop_assert!(first.keys().all(|k| same.get(k) == Some(k)));
    }
}
