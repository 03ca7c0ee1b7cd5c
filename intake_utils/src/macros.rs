/// Like `assert!(matches!(expr, pat))`, but shows the value that did not
/// match.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => {}
            ref val => ::core::panic!(
                "assertion failed: `{:?}` does not match `{}`",
                val,
                ::core::stringify!($pat $(if $guard)?),
            ),
        }
    };
}
