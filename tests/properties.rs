use digit_swap::{replace_digit, DecimalInt, DigitError, Side};
use proptest::prelude::*;

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

/// Any integer, including ones far beyond 128 bits.
fn decimal() -> impl Strategy<Value = DecimalInt> {
    prop_oneof![
        any::<i64>().prop_map(DecimalInt::from),
        "-?[0-9]{1,60}".prop_map(|s| s.parse::<DecimalInt>().unwrap()),
    ]
}

/// A number together with an in-range position for it.
fn number_and_position() -> impl Strategy<Value = (DecimalInt, i64)> {
    decimal().prop_flat_map(|number| {
        let len = number.digit_count() as i64;
        (Just(number), 1..=len)
    })
}

proptest! {
    #[test]
    fn deterministic(
        (number, n) in number_and_position(),
        digit in 0i64..=9,
        side in side(),
    ) {
        let first = number.replace_digit(n, digit, side);
        let second = number.replace_digit(n, digit, side);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sign_is_preserved_unless_zero(
        (number, n) in number_and_position(),
        digit in 0i64..=9,
        side in side(),
    ) {
        let out = number.replace_digit(n, digit, side).unwrap();
        if out.is_zero() {
            prop_assert!(!out.is_negative());
            prop_assert_eq!(out.to_string(), "0");
        } else {
            prop_assert_eq!(out.is_negative(), number.is_negative());
        }
    }

    #[test]
    fn digit_count_never_grows(
        (number, n) in number_and_position(),
        digit in 0i64..=9,
        side in side(),
    ) {
        let out = number.replace_digit(n, digit, side).unwrap();
        prop_assert!(out.digit_count() <= number.digit_count());
    }

    #[test]
    fn replacing_with_existing_digit_is_identity(
        (number, n) in number_and_position(),
        side in side(),
    ) {
        let existing = number.digit_at(n, side).unwrap();
        let out = number.replace_digit(n, i64::from(existing), side).unwrap();
        prop_assert_eq!(out, number);
    }

    #[test]
    fn right_one_matches_left_len(number in decimal(), digit in 0i64..=9) {
        let len = number.digit_count() as i64;
        prop_assert_eq!(
            number.replace_digit(1, digit, Side::Right),
            number.replace_digit(len, digit, Side::Left)
        );
    }

    #[test]
    fn sides_mirror_each_other(
        (number, n) in number_and_position(),
        digit in 0i64..=9,
    ) {
        let len = number.digit_count() as i64;
        prop_assert_eq!(
            number.replace_digit(n, digit, Side::Right),
            number.replace_digit(len - n + 1, digit, Side::Left)
        );
    }

    #[test]
    fn positions_past_the_end_are_out_of_range(
        number in decimal(),
        extra in 1i64..1000,
        digit in 0i64..=9,
        side in side(),
    ) {
        let n = number.digit_count() as i64 + extra;
        let result = number.replace_digit(n, digit, side);
        let is_out_of_range = matches!(result, Err(DigitError::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn bad_digits_are_rejected_first(
        number in decimal(),
        n in any::<i64>(),
        digit in prop_oneof![i64::MIN..0, 10i64..=i64::MAX],
        side in side(),
    ) {
        prop_assert_eq!(
            number.replace_digit(n, digit, side),
            Err(DigitError::InvalidDigit { digit })
        );
    }

    #[test]
    fn primitive_wrapper_agrees_with_decimal(
        number in any::<i64>(),
        n in 1i64..=19,
        digit in 0i64..=9,
        side in side(),
    ) {
        let wide = DecimalInt::from(number)
            .replace_digit(n, digit, side)
            .map(|v| i128::try_from(&v).unwrap());
        prop_assert_eq!(replace_digit(i128::from(number), n, digit, side), wide);
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(replace_digit(1545, 1, 9, Side::Right), Ok(1549));
    assert_eq!(replace_digit(1545, 2, 9, Side::Right), Ok(1595));
    assert_eq!(replace_digit(1545, 4, 0, Side::Right), Ok(545));
    assert_eq!(replace_digit(12345, 2, 0, Side::Left), Ok(10345));
    assert_eq!(replace_digit(-9876, 1, 1, Side::Right), Ok(-9871));
    assert_eq!(replace_digit(0, 1, 5, Side::Right), Ok(5));
}

#[test]
fn concrete_error_scenarios() {
    assert!(matches!(
        replace_digit(12, 5, 3, Side::Right),
        Err(DigitError::OutOfRange { .. })
    ));
    assert!(matches!(
        replace_digit(12, 1, 10, Side::Right),
        Err(DigitError::InvalidDigit { .. })
    ));
    assert!(matches!(
        replace_digit(12, 0, 3, Side::Right),
        Err(DigitError::InvalidPosition { .. })
    ));
}
