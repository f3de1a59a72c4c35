//! Property-based tests for the flag parser.
//!
//! These tests use proptest to generate random argument lists and verify
//! that the parser's invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::flags::{parse, FlagValue};
    use proptest::prelude::*;

    fn token() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z0-9._]{1,8}",
            "-[a-z]",
            "--[a-z]{1,8}",
        ]
    }

    proptest! {
        /// Property: bare tokens never become keys
        #[test]
        fn bare_tokens_are_not_keys(args in prop::collection::vec(token(), 0..12)) {
            let flags = parse(&args);
            for arg in args.iter().filter(|a| !a.starts_with('-')) {
                prop_assert!(flags.get(arg).is_none(), "bare token {} became a key", arg);
            }
        }

        /// Property: the positional is the first bare token
        #[test]
        fn positional_is_first_bare_token(args in prop::collection::vec(token(), 0..12)) {
            let flags = parse(&args);
            let expected = args.iter().find(|a| !a.starts_with('-')).map(String::as_str);
            prop_assert_eq!(flags.positional(), expected);
        }

        /// Property: every flag token in the input shows up in the map
        #[test]
        fn every_flag_is_recorded(args in prop::collection::vec(token(), 0..12)) {
            let flags = parse(&args);
            for arg in args.iter().filter(|a| a.starts_with('-')) {
                prop_assert!(flags.has(&[arg.as_str()]), "missing {}", arg);
            }
        }

        /// Property: appending `flag value` makes that value win
        #[test]
        fn appended_flag_wins(
            args in prop::collection::vec(token(), 0..12),
            value in "[a-z]{1,8}",
        ) {
            let mut args = args;
            args.push("--name".to_string());
            args.push(value.clone());
            let flags = parse(&args);
            prop_assert_eq!(flags.get("--name"), Some(&FlagValue::Value(value.clone())));
            prop_assert_eq!(flags.value(&["-n", "--name"]), Some(value));
        }

        /// Property: parsing is deterministic
        #[test]
        fn parse_is_deterministic(args in prop::collection::vec(token(), 0..12)) {
            prop_assert_eq!(parse(&args), parse(&args));
        }
    }
}
