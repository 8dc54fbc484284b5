//! Property-based tests for ferrule-value.

use ferrule_value::prelude::*;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6_f64).prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::from),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 0..4).prop_map(|entries| {
                Value::object(entries)
            }),
        ]
    })
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (-2_i64..6).prop_map(Key::from),
        "[a-c]".prop_map(Key::from),
    ]
}

// ============================================================================
// IDEMPOTENCY: repeated calls agree and never mutate their input
// ============================================================================

proptest! {
    #[test]
    fn safe_get_idempotent(v in tree(), k in key()) {
        let before = v.clone();
        let r1 = safe_get(Some(&v), &k, None).unwrap();
        let r2 = safe_get(Some(&v), &k, None).unwrap();
        prop_assert_eq!(r1, r2);
        prop_assert_eq!(v, before);
    }

    #[test]
    fn safe_cast_idempotent(v in scalar()) {
        let r1 = v.cast::<i64>(None).unwrap();
        let r2 = v.cast::<i64>(None).unwrap();
        prop_assert_eq!(r1, r2);
    }
}

// ============================================================================
// DIG LAWS
// ============================================================================

proptest! {
    #[test]
    fn dig_without_keys_is_identity(v in tree()) {
        prop_assert_eq!(v.dig(Vec::<Key>::new(), None).unwrap(), Some(v.clone()));
    }

    #[test]
    fn dig_single_key_matches_safe_get(v in tree(), k in key()) {
        let fallback = Value::from("fallback");
        prop_assert_eq!(
            v.dig([k.clone()], Some(&fallback)).unwrap(),
            safe_get(Some(&v), &k, Some(&fallback)).unwrap()
        );
    }

    #[test]
    fn dig_composes(v in tree(), a in key(), b in key()) {
        let first = v.dig([a.clone()], None).unwrap();
        let stepwise = dig(first.as_ref(), [b.clone()], None).unwrap();
        prop_assert_eq!(v.dig([a, b], None).unwrap(), stepwise);
    }
}

// ============================================================================
// COALESCE LAWS
// ============================================================================

proptest! {
    #[test]
    fn coalesce_returns_first_present(values in prop::collection::vec(any::<Option<i32>>(), 0..8)) {
        let expected = values.iter().find_map(|v| *v);
        prop_assert_eq!(coalesce(values), expected);
    }

    #[test]
    fn absent_cast_yields_default(d in any::<Option<i64>>()) {
        prop_assert_eq!(safe_cast::<i64>(None, d).unwrap(), d);
    }
}
