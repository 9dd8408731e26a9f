//! Name collation for listing order.
//!
//! Product names are ordered with the Unicode root collation at tertiary
//! strength: accents and case only matter once the base letters are equal,
//! and then lower case sorts first. "Éclair" lands between "apple" and
//! "Zebra", as it would in a browser's default locale comparison.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

thread_local! {
    static ROOT: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(
                error = %err,
                "root collation unavailable, sorting names by case-folded text"
            );
            None
        }
    }
}

/// Compare two names for an A-Z listing.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => case_folded(a, b),
    })
}

fn case_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        names.sort_by(|a, b| collate(a, b));
        names
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Banana", "apple"), Ordering::Greater);
        assert_eq!(collate("mechanical keyboard", "Notebook"), Ordering::Less);
    }

    #[test]
    fn test_lower_case_first_on_tie() {
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("Apple", "apple"), Ordering::Greater);
        assert_eq!(collate("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(collate("Desk", "Desk Lamp"), Ordering::Less);
        assert_eq!(collate("", "a"), Ordering::Less);
    }

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Zebra Plush", "\u{00c9}clair Tin", "apple"]),
            vec!["apple", "\u{00c9}clair Tin", "Zebra Plush"]
        );
        assert_eq!(
            sorted(&["\u{00d6}lkanne", "Ofen", "Pfanne", "Nudelholz"]),
            vec!["Nudelholz", "Ofen", "\u{00d6}lkanne", "Pfanne"]
        );
    }

    #[test]
    fn test_accent_breaks_ties_after_base_letters() {
        assert_eq!(collate("cote", "c\u{00f4}te"), Ordering::Less);
        assert_eq!(collate("\u{00e9}clair", "eclairs"), Ordering::Less);
    }

    #[test]
    fn test_case_folded_fallback() {
        assert_eq!(case_folded("apple", "Banana"), Ordering::Less);
        assert_eq!(case_folded("apple", "Apple"), Ordering::Less);
        assert_eq!(case_folded("Desk", "Desk Lamp"), Ordering::Less);
    }
}
