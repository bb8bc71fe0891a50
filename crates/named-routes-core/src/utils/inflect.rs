//! English noun inflection.
//!
//! Resource registration needs the singular form of a plural resource name
//! (`users` -> `user`). The [`Inflector`] trait is the seam for that; the
//! bundled [`EnglishInflector`] applies ordered regex suffix rules after
//! checking uncountable and irregular nouns.
//!
//! Compound identifiers are inflected on their last `_`-separated word only,
//! so `blog_categories` becomes `blog_category`.

use regex::Regex;
use std::sync::OnceLock;

/// Turns nouns into their singular or plural form.
pub trait Inflector: Send + Sync {
    /// Returns the singular form of a plural noun.
    fn singularize(&self, word: &str) -> String;

    /// Returns the plural form of a singular noun.
    fn pluralize(&self, word: &str) -> String;
}

/// `(plural, singular)` pairs that don't follow any suffix rule.
const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("sexes", "sex"),
    ("moves", "move"),
    ("waves", "wave"),
    ("cookies", "cookie"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// First match wins.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)^(.*)(menu)s$", "${1}${2}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(i|us)$", "${1}us"),
    (r"(?i)([ftw]ax)es$", "${1}"),
    (r"(?i)(cris|ax|test)es$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)ouses$", "ouse"),
    (r"(?i)([^a])uses$", "${1}us"),
    (r"(?i)([ml])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)(drive)s$", "${1}"),
    (r"(?i)([^fo])ves$", "${1}fe"),
    (r"(?i)(^analy)ses$", "${1}sis"),
    (r"(?i)((a)naly|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$", "${1}sis"),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)eaus$", "eau"),
    (r"(?i)^(.*us)$", "${1}"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

/// First match wins.
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(s)tatus$", "${1}tatuses"),
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)([ml])ouse$", "${1}ice"),
    (r"(?i)(matr|vert|ind)(ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat|her|potat)o$", "${1}oes"),
    (r"(?i)(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|vir)us$", "${1}i"),
    (r"(?i)us$", "uses"),
    (r"(?i)(alias)$", "${1}es"),
    (r"(?i)(ax|cris|test)is$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

fn compile(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("inflection rule must be a valid regex"),
                *replacement,
            )
        })
        .collect()
}

fn singular_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| compile(SINGULAR_RULES))
}

fn plural_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| compile(PLURAL_RULES))
}

/// Rule-based English inflector.
///
/// # Examples
///
/// ```
/// use named_routes_core::utils::inflect::{EnglishInflector, Inflector};
///
/// let inflector = EnglishInflector;
/// assert_eq!(inflector.singularize("users"), "user");
/// assert_eq!(inflector.singularize("categories"), "category");
/// assert_eq!(inflector.singularize("people"), "person");
/// assert_eq!(inflector.pluralize("address"), "addresses");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    fn inflect(
        word: &str,
        rules: &[(Regex, &'static str)],
        irregular: impl Fn(&str) -> Option<&'static str>,
    ) -> String {
        if word.is_empty() {
            return String::new();
        }

        let (head, last) = word.rsplit_once('_').unwrap_or(("", word));
        let lower = last.to_lowercase();

        if UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }

        if let Some(replacement) = irregular(&lower) {
            let mut out = String::with_capacity(word.len());
            if !head.is_empty() {
                out.push_str(head);
                out.push('_');
            }
            out.push_str(&match_first_case(last, replacement));
            return out;
        }

        for (regex, replacement) in rules {
            if regex.is_match(word) {
                return regex.replace(word, *replacement).into_owned();
            }
        }
        word.to_string()
    }
}

impl Inflector for EnglishInflector {
    fn singularize(&self, word: &str) -> String {
        Self::inflect(word, singular_rules(), |lower| {
            IRREGULAR
                .iter()
                .find(|(plural, _)| *plural == lower)
                .map(|(_, singular)| *singular)
        })
    }

    fn pluralize(&self, word: &str) -> String {
        Self::inflect(word, plural_rules(), |lower| {
            IRREGULAR
                .iter()
                .find(|(_, singular)| *singular == lower)
                .map(|(plural, _)| *plural)
        })
    }
}

/// Copies the case of `original`'s first character onto `replacement`.
fn match_first_case(original: &str, replacement: &str) -> String {
    let upper = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}
