//! Property tests for label formatting and evaluation idempotence.

use proptest::prelude::*;

use intake_form::signup::{self, ids};
use intake_form::{FieldId, NullDisplay, Validity, human_readable};

proptest! {
    #[test]
    fn labels_contain_no_separators(identifier in "[a-z][a-z_-]{0,15}") {
        let label = human_readable(&identifier);
        prop_assert!(!label.contains('-'));
        prop_assert!(!label.contains('_'));
    }

    #[test]
    fn labels_capitalize_only_the_first_letter(identifier in "[a-z][a-z-]{0,15}") {
        let label = human_readable(&identifier);
        let mut chars = label.chars();
        let first = chars.next().expect("non-empty identifier");
        prop_assert!(first.is_ascii_uppercase());
        prop_assert!(chars.all(|c| !c.is_ascii_uppercase()));
    }

    #[test]
    fn labels_preserve_character_count(identifier in "[a-zA-Z][a-zA-Z_-]{0,15}") {
        // Separator replacement and ASCII case-mapping are one-to-one.
        let label = human_readable(&identifier);
        prop_assert_eq!(label.chars().count(), identifier.chars().count());
    }

    #[test]
    fn evaluation_is_a_pure_function_of_current_values(
        email in ".{0,12}",
        country in ".{0,12}",
        zip in ".{0,12}",
        password in ".{0,24}",
        confirm in ".{0,24}",
    ) {
        let mut form = signup::signup_form(|_| Box::new(NullDisplay))
            .expect("well-formed signup form");
        for (field, value) in [
            (ids::EMAIL, &email),
            (ids::COUNTRY, &country),
            (ids::ZIP_CODE, &zip),
            (ids::PASSWORD, &password),
            (ids::PASSWORD_CONFIRM, &confirm),
        ] {
            let field = FieldId::new(field).expect("non-empty");
            form.set_value(&field, value.clone()).expect("registered field");
        }

        let snapshot = |form: &intake_form::FormController| -> Vec<Validity> {
            form.fields().map(|field| field.validity().clone()).collect()
        };

        // Submitting twice with unchanged input yields identical validity
        // state and messages.
        let first_outcome = form.submit();
        let first = snapshot(&form);
        let second_outcome = form.submit();
        prop_assert_eq!(second_outcome, first_outcome);
        prop_assert_eq!(snapshot(&form), first);
    }
}
