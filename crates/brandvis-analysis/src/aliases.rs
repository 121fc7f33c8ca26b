//! Lexical variants of brand names used for text matching.

use regex::Regex;

/// Ordered, deduplicated lowercase aliases for one entity name.
///
/// The first element is always the trimmed, lowercased name itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasSet(Vec<String>);

impl AliasSet {
    /// The lowercased, trimmed original name.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.0[0]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        let lower = name.trim().to_lowercase();
        self.0.iter().any(|a| *a == lower)
    }

    fn push_unique(&mut self, alias: String) {
        if !self.0.contains(&alias) {
            self.0.push(alias);
        }
    }
}

/// Expand a name into its matchable aliases.
///
/// In order, skipping duplicates:
/// 1. the full lowercased name (`"acme corp"`)
/// 2. the words joined (`"acmecorp"`)
/// 3. the first word (`"acme"`)
/// 4. initials, only for two or more words (`"ac"`)
/// 5. the joined form with `-` and `_` removed
///
/// An empty name yields a single empty alias.
#[must_use]
pub fn generate_aliases(name: &str) -> AliasSet {
    let lower = name.trim().to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    let mut aliases = AliasSet(vec![lower.clone()]);

    let joined = words.concat();
    aliases.push_unique(joined.clone());

    if let Some(first) = words.first() {
        aliases.push_unique((*first).to_string());
    }

    if words.len() > 1 {
        let initials: String = words.iter().filter_map(|w| w.chars().next()).collect();
        aliases.push_unique(initials);
    }

    aliases.push_unique(joined.replace(['-', '_'], ""));

    aliases
}

/// An entity name with its aliases and the whole-word matchers built from them.
///
/// Matchers are compiled once and reused across every response in a batch.
/// Empty aliases get no matcher, so they never count as a mention.
#[derive(Debug, Clone)]
pub struct TrackedEntity {
    name: String,
    aliases: AliasSet,
    matchers: Vec<Regex>,
}

impl TrackedEntity {
    #[must_use]
    pub fn new(name: &str) -> Self {
        let aliases = generate_aliases(name);
        let matchers = aliases
            .iter()
            .filter(|alias| !alias.is_empty())
            .filter_map(|alias| {
                let pattern = format!(r"\b{}\b", regex::escape(alias));
                match Regex::new(&pattern) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        tracing::warn!(entity = name, alias, error = %e, "skipping unmatchable alias");
                        None
                    }
                }
            })
            .collect();

        Self {
            name: name.to_string(),
            aliases,
            matchers,
        }
    }

    /// The name exactly as supplied; used as the key in mention counts.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn aliases(&self) -> &AliasSet {
        &self.aliases
    }

    pub(crate) fn matchers(&self) -> &[Regex] {
        &self.matchers
    }
}
