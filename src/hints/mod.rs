// src/hints/mod.rs
pub mod categories;
pub mod rules;
pub mod selector;

pub use rules::{HintRule, HintRules};
pub use selector::HintSelector;

/// Number of hints shown each day. The first is free.
pub const HINTS_PER_DAY: usize = 3;

/// The three hints for a target, in reveal order:
/// related words (free), category sentence, letter count and first letter.
pub fn hint_sheet(target: &str, related: &[String]) -> Vec<String> {
    let first = if related.is_empty() {
        "Think about common English words".to_string()
    } else {
        format!("Think about these related words: {}", related.join(", "))
    };

    let shape = match target.chars().next() {
        Some(c) => format!("{} letters long, starts with '{}'", target.chars().count(), c.to_uppercase()),
        None => "An ordinary word".to_string(),
    };

    vec![first, categories::describe(target), shape]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_has_three_hints_in_order() {
        let sheet = hint_sheet("ocean", &["sea".to_string(), "wave".to_string()]);
        assert_eq!(sheet.len(), HINTS_PER_DAY);
        assert_eq!(sheet[0], "Think about these related words: sea, wave");
        assert!(sheet[1].starts_with("This is a large body of water"));
        assert_eq!(sheet[2], "5 letters long, starts with 'O'");
    }

    #[test]
    fn empty_related_list_falls_back() {
        let sheet = hint_sheet("quilt", &[]);
        assert_eq!(sheet[0], "Think about common English words");
        assert_eq!(sheet[1], categories::GENERIC_DESCRIPTION);
    }
}
