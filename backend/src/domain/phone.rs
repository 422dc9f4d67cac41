//! Phone number predicate.
//!
//! Numbers are parsed against the Polish numbering plan unless they carry an
//! explicit `+<country>` prefix. A number is accepted only when it parses,
//! has a plausible length and matches a known number pattern.

use phonenumber::country;

/// Region used for numbers written without an international prefix.
pub const DEFAULT_REGION: country::Id = country::Id::PL;

const MIN_NATIONAL_DIGITS: usize = 2;
const MAX_NATIONAL_DIGITS: usize = 17;

/// Report whether `candidate` is a possible and valid phone number.
///
/// Never fails: parse errors and empty input yield `false`.
///
/// # Examples
/// ```
/// use contacts::domain::is_valid_phone_number;
///
/// assert!(is_valid_phone_number("+48123456789"));
/// assert!(!is_valid_phone_number("abc"));
/// ```
pub fn is_valid_phone_number(candidate: &str) -> bool {
    if candidate.trim().is_empty() {
        return false;
    }
    let Ok(number) = phonenumber::parse(Some(DEFAULT_REGION), candidate) else {
        return false;
    };
    is_possible(&number) && phonenumber::is_valid(&number)
}

fn is_possible(number: &phonenumber::PhoneNumber) -> bool {
    let digits = number.national().value().to_string().len();
    (MIN_NATIONAL_DIGITS..=MAX_NATIONAL_DIGITS).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_bdd_macros::{given, then, when};

    #[rstest]
    #[case("+48123456789")]
    #[case("888-999-000")]
    #[case("+48 123 123 123")]
    fn accepts_valid_numbers(#[case] candidate: &str) {
        assert!(is_valid_phone_number(candidate), "{candidate} should pass");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("12")]
    #[case("+48")]
    #[case("123456789012345678901")]
    fn rejects_invalid_numbers(#[case] candidate: &str) {
        assert!(!is_valid_phone_number(candidate), "{candidate} should fail");
    }

    #[given("a locally formatted phone number")]
    fn a_local_number() -> &'static str {
        "888-999-000"
    }

    #[given("a string of letters")]
    fn a_string_of_letters() -> &'static str {
        "not a phone"
    }

    #[when("the number is validated")]
    fn the_number_is_validated(candidate: &str) -> bool {
        is_valid_phone_number(candidate)
    }

    #[then("the number is accepted")]
    fn the_number_is_accepted(outcome: bool) {
        assert!(outcome);
    }

    #[then("the number is rejected")]
    fn the_number_is_rejected(outcome: bool) {
        assert!(!outcome);
    }

    #[rstest]
    fn local_number_without_prefix_is_accepted() {
        let outcome = the_number_is_validated(a_local_number());
        the_number_is_accepted(outcome);
    }

    #[rstest]
    fn letters_are_rejected() {
        let outcome = the_number_is_validated(a_string_of_letters());
        the_number_is_rejected(outcome);
    }
}
