// File: src/core/normalizer.rs
use std::collections::HashMap;

/// British/American spelling pairs. Either side finds the entry.
const SPELLING_EQUIVALENTS: &[(&str, &str)] = &[
    ("colour", "color"),
    ("flavour", "flavor"),
    ("honour", "honor"),
    ("humour", "humor"),
    ("labour", "labor"),
    ("neighbour", "neighbor"),
    ("favour", "favor"),
    ("harbour", "harbor"),
    ("armour", "armor"),
    ("rumour", "rumor"),
    ("vapour", "vapor"),
    ("valour", "valor"),
    ("centre", "center"),
    ("theatre", "theater"),
    ("metre", "meter"),
    ("litre", "liter"),
    ("fibre", "fiber"),
    ("calibre", "caliber"),
    ("grey", "gray"),
    ("jewellery", "jewelry"),
    ("cheque", "check"),
    ("tyre", "tire"),
    ("plough", "plow"),
    ("mould", "mold"),
    ("defence", "defense"),
    ("licence", "license"),
    ("offence", "offense"),
    ("travelled", "traveled"),
    ("cancelled", "canceled"),
    ("organise", "organize"),
    ("realise", "realize"),
    ("analyse", "analyze"),
    ("catalogue", "catalog"),
    ("dialogue", "dialog"),
    ("programme", "program"),
    ("aluminium", "aluminum"),
    ("pyjamas", "pajamas"),
    ("sceptic", "skeptic"),
];

/// Words ending in `s` that are not plurals of a shorter known word.
const INVARIANT_WORDS: &[&str] = &[
    "news", "series", "species", "lens", "bus", "gas", "chaos", "physics", "always", "perhaps", "this", "its",
    "his", "hers", "yes", "less", "glass", "grass", "dress", "boss", "kiss", "moss", "cross", "class", "focus",
    "virus", "bonus", "atlas", "iris", "oasis", "basis", "canvas",
];

/// Canonicalizes surface forms so "colours", "color" and "Colour" compare equal.
/// Every method is total: with no applicable rule the input comes back unchanged.
#[derive(Debug, Clone)]
pub struct WordNormalizer {
    to_american: HashMap<&'static str, &'static str>,
    to_british: HashMap<&'static str, &'static str>,
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordNormalizer {
    pub fn new() -> Self {
        Self {
            to_american: SPELLING_EQUIVALENTS.iter().map(|&(gb, us)| (gb, us)).collect(),
            to_british: SPELLING_EQUIVALENTS.iter().map(|&(gb, us)| (us, gb)).collect(),
        }
    }

    /// Maps a regional spelling to its canonical (American) form.
    pub fn normalize_spelling(&self, word: &str) -> String {
        self.to_american.get(word).map(|s| s.to_string()).unwrap_or_else(|| word.to_string())
    }

    /// The other regional form of `word`, looked up from either side of the table.
    pub fn spelling_variant(&self, word: &str) -> Option<&'static str> {
        self.to_american.get(word).or_else(|| self.to_british.get(word)).copied()
    }

    /// Strips a plural suffix, but only when the stem is itself known.
    pub fn singularize<F>(&self, word: &str, is_known: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        if INVARIANT_WORDS.contains(&word) || word.len() < 3 {
            return word.to_string();
        }

        let mut candidates: Vec<String> = Vec::with_capacity(2);
        if let Some(stem) = word.strip_suffix("ies") {
            if !stem.is_empty() {
                candidates.push(format!("{}y", stem));
            }
        } else if let Some(stem) = word.strip_suffix("es") {
            let sibilant = ["s", "x", "z", "ch", "sh"].iter().any(|end| stem.ends_with(end));
            let drop_s = word[..word.len() - 1].to_string();
            if sibilant {
                candidates.push(stem.to_string());
                candidates.push(drop_s);
            } else {
                candidates.push(drop_s);
                candidates.push(stem.to_string());
            }
        } else if word.ends_with('s') && !word.ends_with("ss") {
            candidates.push(word[..word.len() - 1].to_string());
        }

        candidates
            .into_iter()
            .find(|c| !c.is_empty() && is_known(c))
            .unwrap_or_else(|| word.to_string())
    }

    /// Lowercase, canonical spelling, singular.
    pub fn canonical<F>(&self, word: &str, is_known: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let lowered = word.trim().to_lowercase();
        let spelled = self.normalize_spelling(&lowered);
        // "colours" -> "colour" counts as known when only "color" is in the vocabulary
        let known_any_spelling = |w: &str| is_known(w) || is_known(&self.normalize_spelling(w));
        let singular = self.singularize(&spelled, known_any_spelling);
        self.normalize_spelling(&singular)
    }

    /// Rough morphological stem, used to keep `{run, runs, running}` from
    /// all appearing in one hint list. Not a lookup key.
    pub fn stem(word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 3 {
            return word;
        }
        if let Some(base) = word.strip_suffix("ies") {
            if base.len() >= 2 {
                return format!("{}y", base);
            }
        }

        // at most two layers: "waters" -> "water" -> "wat"
        let mut stem = word.as_str();
        for _ in 0..2 {
            let stripped = ["ing", "ed", "es", "er", "ly", "s"]
                .iter()
                .find_map(|suffix| stem.strip_suffix(suffix).filter(|base| base.len() >= 3));
            match stripped {
                Some(base) => stem = base,
                None => break,
            }
        }

        let mut stem = stem.to_string();
        let bytes = stem.as_bytes();
        let n = bytes.len();
        if n >= 4 && bytes[n - 1] == bytes[n - 2] && !b"aeiousl".contains(&bytes[n - 1]) {
            stem.pop();
        } else if n >= 4 && bytes[n - 1] == b'e' {
            stem.pop();
        }
        stem
    }
}
