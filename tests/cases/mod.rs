// Helper macro to generate one test function per asserted field
macro_rules! handle_case {
    ([$($attrs:meta)*] $elem:ty, render, $expected:expr) => {
        $(#[$attrs])*
        #[test]
        fn validate_render() {
            pretty_assertions::assert_eq!(container().render(), $expected);
        }
    };

    ([$($attrs:meta)*] $elem:ty, order, [$($expected:expr),* $(,)?]) => {
        handle_case! {@walk [$($attrs)*] $elem, validate_order, Order, [$($expected),*]}
    };

    ([$($attrs:meta)*] $elem:ty, ascending, [$($expected:expr),* $(,)?]) => {
        handle_case! {@walk [$($attrs)*] $elem, validate_ascending, Ascending, [$($expected),*]}
    };

    ([$($attrs:meta)*] $elem:ty, descending, [$($expected:expr),* $(,)?]) => {
        handle_case! {@walk [$($attrs)*] $elem, validate_descending, Descending, [$($expected),*]}
    };

    ([$($attrs:meta)*] $elem:ty, reverse, [$($expected:expr),* $(,)?]) => {
        handle_case! {@walk [$($attrs)*] $elem, validate_reverse, Reverse, [$($expected),*]}
    };

    ([$($attrs:meta)*] $elem:ty, side_cross, [$($expected:expr),* $(,)?]) => {
        handle_case! {@walk [$($attrs)*] $elem, validate_side_cross, SideCross, [$($expected),*]}
    };

    ([$($attrs:meta)*] $elem:ty, middle_out, [$($expected:expr),* $(,)?]) => {
        handle_case! {@walk [$($attrs)*] $elem, validate_middle_out, MiddleOut, [$($expected),*]}
    };

    // Walks a begin/end pair with the cursor API and checks it against the
    // expectation and against `Container::ordered`.
    (@walk [$($attrs:meta)*] $elem:ty, $fn_name:ident, $kind:ident, [$($expected:expr),*]) => {
        $(#[$attrs])*
        #[test]
        fn $fn_name() {
            let c = container();
            let expected: Vec<$elem> = vec![$(<$elem>::from($expected)),*];

            let mut it = c.begin(vistas::OrderKind::$kind);
            let end = c.end(vistas::OrderKind::$kind);
            let mut walked = Vec::new();
            while it.not_equals(&end).unwrap() {
                walked.push(it.current().unwrap().clone());
                it.advance().unwrap();
            }

            pretty_assertions::assert_eq!(walked, expected, "walking {}", vistas::OrderKind::$kind);
            pretty_assertions::assert_eq!(c.ordered(vistas::OrderKind::$kind), expected);
            pretty_assertions::assert_eq!(walked.len(), c.len());
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $elem:ty, $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse $elem:ty, [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse $elem:ty, [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse $elem, [
            $($test_functions)*
            handle_case! {[$($attr)*] $elem, $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name, element type and input first, then any order for assertions
macro_rules! test_case {
    (
        name: $name:ident,
        element: $elem:ty,
        input: [$($input:expr),* $(,)?],
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, unused_mut, dead_code)]

            use super::*;

            // Fresh container holding `$input`, one append per element
            fn container() -> vistas::Container<$elem> {
                let mut c = vistas::Container::new();
                $(c.append(<$elem>::from($input));)*
                c
            }

            // Generate all test functions
            parse_assertions! {@parse $elem, [] $($assertion_fields)*}
        }
    };
}
