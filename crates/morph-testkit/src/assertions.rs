//! Assertion helpers for ordering tests

/// Assert that comparing two values yields the expected ordering
#[macro_export]
macro_rules! assert_ordering {
    ($comparer:expr, $a:expr, $b:expr, $expected:expr) => {{
        let actual = $crate::__private::Compare::compare(&$comparer, &$a, &$b);
        assert_eq!(
            actual,
            Ok($expected),
            "compare({}, {}) should be {}",
            $a,
            $b,
            $expected
        )
    }};
}

/// Assert that comparing two values fails with a type mismatch from `$origin`
#[macro_export]
macro_rules! assert_type_mismatch {
    ($result:expr, $origin:expr) => {
        match $result {
            Err($crate::__private::OrdError::TypeMismatch { origin, .. }) => {
                assert_eq!(origin, $origin, "type mismatch reported the wrong origin")
            }
            other => panic!("expected a type mismatch, got {:?}", other),
        }
    };
}

/// Assert that comparing two values fails because their shared data type
/// declares no ordering, reported from `$origin`
#[macro_export]
macro_rules! assert_not_orderable {
    ($result:expr, $origin:expr) => {
        match $result {
            Err($crate::__private::OrdError::NotOrderable { origin, .. }) => {
                assert_eq!(origin, $origin, "not-orderable error reported the wrong origin")
            }
            other => panic!("expected a not-orderable error, got {:?}", other),
        }
    };
}

/// Assert that `compare(a, b)` and `compare(b, a)` are reverses of each other
#[macro_export]
macro_rules! assert_antisymmetric {
    ($comparer:expr, $a:expr, $b:expr) => {{
        let ab = $crate::__private::Compare::compare(&$comparer, &$a, &$b);
        let ba = $crate::__private::Compare::compare(&$comparer, &$b, &$a);
        assert_eq!(
            ab.map(|ord| ord.reverse()),
            ba,
            "compare is not antisymmetric for {} and {}",
            $a,
            $b
        )
    }};
}
