// File: src/hints/rules.rs
//! Rejection rules for hint candidates.
//!
//! Each rule is a plain value so the policy can be listed, tested and
//! swapped without touching the selector.

const COMMON_NAMES: &[&str] = &[
    "john", "james", "mary", "david", "william", "richard", "charles", "joseph", "thomas", "daniel", "paul",
    "mark", "donald", "george", "kenneth", "steven", "edward", "brian", "ronald", "anthony", "kevin", "jason",
    "matthew", "gary", "timothy", "jose", "larry", "frank", "scott", "eric", "stephen", "andrew", "peter",
    "henry", "carl", "arthur", "ryan", "roger", "jack", "albert", "keith", "samuel", "ralph", "roy", "bruce",
    "adam", "harry", "fred", "louis", "victor", "martin", "sean", "chris", "tony", "mike", "nathan", "allen",
    "jacob", "kyle", "ray", "joel", "barry", "mario", "marcus", "ahmed", "ali", "boris", "chen", "igor", "ivan",
    "jorge", "karim", "kim", "lei", "magnus", "pavel", "pedro", "ravi", "sergei", "wei", "yuri", "zhang",
    "smith", "johnson", "jones", "garcia", "miller", "davis", "lopez", "wilson", "anderson", "taylor",
    "moore", "jackson", "lee", "perez", "harris", "clark", "lewis", "walker", "wright", "nguyen", "adams",
    "nelson", "campbell", "mitchell", "carter", "roberts",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintRule {
    /// The candidate is the target.
    Identical,
    /// Either word contains the other.
    Substring,
    /// Length within one, same first letter and same last letter.
    SpellingPattern,
    /// Any uppercase letter suggests a proper noun.
    Capitalized,
    NonAlphabetic,
    NamePrefix(&'static str),
    NameSuffix(&'static str),
    CommonName,
}

impl HintRule {
    pub fn rejects(&self, candidate: &str, target: &str) -> bool {
        match self {
            HintRule::Identical => candidate == target,
            HintRule::Substring => candidate.contains(target) || target.contains(candidate),
            HintRule::SpellingPattern => {
                let same_length = candidate.chars().count().abs_diff(target.chars().count()) <= 1;
                let same_start = candidate.chars().next() == target.chars().next();
                let same_end = candidate.chars().last() == target.chars().last();
                same_length && same_start && same_end
            }
            HintRule::Capitalized => candidate.chars().any(char::is_uppercase),
            HintRule::NonAlphabetic => !candidate.chars().all(|c| c.is_ascii_alphabetic()),
            HintRule::NamePrefix(prefix) => {
                candidate.len() > prefix.len() + 2 && candidate.to_lowercase().starts_with(*prefix)
            }
            HintRule::NameSuffix(suffix) => {
                candidate.len() > suffix.len() + 2 && candidate.to_lowercase().ends_with(*suffix)
            }
            HintRule::CommonName => COMMON_NAMES.contains(&candidate.to_lowercase().as_str()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HintRules {
    rules: Vec<HintRule>,
}

impl Default for HintRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl HintRules {
    pub fn new(rules: Vec<HintRule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        let mut rules = vec![
            HintRule::Identical,
            HintRule::Substring,
            HintRule::SpellingPattern,
            HintRule::Capitalized,
            HintRule::NonAlphabetic,
            HintRule::CommonName,
        ];
        rules.extend(["mc", "von", "ibn", "abd", "abu"].into_iter().map(HintRule::NamePrefix));
        rules.extend(["jr", "sr", "iii"].into_iter().map(HintRule::NameSuffix));
        Self { rules }
    }

    pub fn first_violation(&self, candidate: &str, target: &str) -> Option<&HintRule> {
        self.rules.iter().find(|rule| rule.rejects(candidate, target))
    }

    pub fn accepts(&self, candidate: &str, target: &str) -> bool {
        self.first_violation(candidate, target).is_none()
    }

    pub fn rules(&self) -> &[HintRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_either_direction() {
        assert!(HintRule::Substring.rejects("sea", "seashore"));
        assert!(HintRule::Substring.rejects("seashore", "sea"));
        assert!(!HintRule::Substring.rejects("wave", "ocean"));
    }

    #[test]
    fn spelling_pattern_needs_all_three() {
        assert!(HintRule::SpellingPattern.rejects("brand", "bread"));
        assert!(!HintRule::SpellingPattern.rejects("bloom", "bread"));
        assert!(!HintRule::SpellingPattern.rejects("bed", "bread"));
    }

    #[test]
    fn name_patterns() {
        let rules = HintRules::standard();
        assert_eq!(rules.first_violation("Paris", "city"), Some(&HintRule::Capitalized));
        assert_eq!(rules.first_violation("mcdonald", "food"), Some(&HintRule::NamePrefix("mc")));
        assert_eq!(rules.first_violation("smith", "forge"), Some(&HintRule::CommonName));
        assert!(rules.first_violation("o'neil", "irish").is_some());
        assert!(rules.accepts("wave", "ocean"));
        // a short word that merely starts like a prefix is fine
        assert!(rules.accepts("abut", "touch"));
    }

    #[test]
    fn custom_table_replaces_policy() {
        let only_identical = HintRules::new(vec![HintRule::Identical]);
        assert!(only_identical.accepts("seashore", "sea"));
        assert!(!only_identical.accepts("sea", "sea"));
        assert_eq!(only_identical.rules().len(), 1);
    }
}
