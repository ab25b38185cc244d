//! Title standardization.
//!
//! Wikipedia stores page titles in a canonical underscore-joined form.
//! [`standardize`] converts a human title into that internal key: whitespace
//! runs collapse to a single underscore, then the string is normalized to
//! Unicode NFC. The operation is idempotent.

use unicode_normalization::UnicodeNormalization;

/// Unicode normalization form applied after underscore joining.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalForm {
    /// Canonical composition (the default).
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

/// Standardize a title to the canonical internal key using NFC.
///
/// # Examples
///
/// ```
/// use wikigraph_core::standardize;
///
/// assert_eq!(standardize("List of  postal codes"), "List_of_postal_codes");
/// assert_eq!(standardize("Montreal"), "Montreal");
/// ```
pub fn standardize(title: &str) -> String {
    standardize_with(title, NormalForm::Nfc)
}

/// Standardize a title with an explicit normalization form.
pub fn standardize_with(title: &str, form: NormalForm) -> String {
    let joined = title.split_whitespace().collect::<Vec<_>>().join("_");

    match form {
        NormalForm::Nfc => joined.nfc().collect(),
        NormalForm::Nfd => joined.nfd().collect(),
        NormalForm::Nfkc => joined.nfkc().collect(),
        NormalForm::Nfkd => joined.nfkd().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(standardize("Demographics of Montreal"), "Demographics_of_Montreal");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(standardize("a  b\tc"), "a_b_c");
    }

    #[test]
    fn test_existing_underscores_preserved() {
        assert_eq!(standardize("Category_members list"), "Category_members_list");
    }

    #[test]
    fn test_nfc_composition() {
        // "e" + combining acute accent composes to U+00E9
        let decomposed = "Montre\u{0301}al";
        assert_eq!(standardize(decomposed), "Montr\u{00e9}al");
    }

    #[test]
    fn test_nfd_form() {
        assert_eq!(
            standardize_with("Montr\u{00e9}al", NormalForm::Nfd),
            "Montre\u{0301}al"
        );
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(standardize(""), "");
    }

    proptest! {
        #[test]
        fn standardize_is_idempotent(title in "\\PC{0,40}") {
            let once = standardize(&title);
            let twice = standardize(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
