//! Properties of the declaration fingerprint and derived names.

use powerenum::base::MemberKind;
use powerenum::{derive_name, fingerprint};
use proptest::prelude::*;

#[test]
fn test_known_values() {
    assert_eq!(fingerprint(""), 5381);
    assert_eq!(fingerprint("abc"), 193_485_963);
    assert_eq!(fingerprint("partial class Colour {}"), 16_629_113_025_525_273_844);
    assert_eq!(
        derive_name(16_629_113_025_525_273_844, MemberKind::SharedMember),
        "86345edd1623ab55"
    );
}

proptest! {
    #[test]
    fn identical_text_identical_fingerprint(text in ".{0,64}") {
        let copy = text.clone();
        prop_assert_eq!(fingerprint(&text), fingerprint(&copy));
    }

    #[test]
    fn single_character_substitution_changes_fingerprint(
        text in "[ -~]{1,64}",
        index in any::<prop::sample::Index>(),
        replacement in prop::char::range(' ', '~'),
    ) {
        let mut chars: Vec<char> = text.chars().collect();
        let at = index.index(chars.len());
        prop_assume!(chars[at] != replacement);
        chars[at] = replacement;
        let mutated: String = chars.into_iter().collect();

        prop_assert_ne!(fingerprint(&text), fingerprint(&mutated));
    }

    #[test]
    fn derived_names_differ_per_kind(text in ".{0,32}") {
        let print = fingerprint(&text);
        let names: Vec<String> =
            MemberKind::ALL.iter().map(|&kind| derive_name(print, kind)).collect();
        for (i, a) in names.iter().enumerate() {
            prop_assert_eq!(a.len(), 16);
            for b in &names[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }
}
