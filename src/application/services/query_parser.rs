use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::{MatchType, ParsedQuery};

static EMI_HELP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        concat!(
            r"(?i)emi help(?: me)? look for an? ([A-Za-z0-9_\s]+?)",
            r"(?: in| at| near| around) ([A-Za-z0-9_\s,]+)",
        ),
    )
    .unwrap()
});

/// Vernacular phrasings in priority order.
static REGIONAL_RULES: LazyLock<Vec<RegionalRule>> = LazyLock::new(|| {
    vec![
        RegionalRule::new("pidgin", r"(?i)abeg find ([A-Za-z0-9_\s]+) for ([A-Za-z0-9_\s,]+)"),
        RegionalRule::new("swahili", r"(?i)tafuta ([A-Za-z0-9_\s]+) katika ([A-Za-z0-9_\s,]+)"),
        RegionalRule::new("yoruba", r"(?i)wa ([A-Za-z0-9_\s]+) ni ([A-Za-z0-9_\s,]+)"),
        RegionalRule::new(
            "french",
            concat!(
                r"(?i)cherche(?:r|z)? (?:un|une) ([A-Za-z0-9_\s]+) ",
                r"(?:à|a|en|dans|pres de) ([A-Za-z0-9_\s,]+)",
            ),
        ),
    ]
});

/// Professions recognised by the keyword fallback, scanned in this order.
pub const KNOWN_PROFESSIONS: &[&str] = &[
    "plumber",
    "developer",
    "carpenter",
    "electrician",
    "vulcanizer",
    "mechanic",
    "car electrician",
    "hvac",
    "painter",
    "fashion designer",
    "bricklayer",
    "panel beater",
    "scaffolder",
    "cook",
    "driver",
    "rigger",
    "climber",
];

static PROFESSION_LOCATIONS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    KNOWN_PROFESSIONS
        .iter()
        .map(|profession| {
            let pattern = format!(
                r"(?i){}.*?(in|at|near|around) ([A-Za-z0-9_\s,]+)",
                regex::escape(profession)
            );
            (*profession, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:in|at|near|around|from) ([A-Za-z0-9_\s,]+)(?:\.|$)",
        r"(?i)(?:à|a|en|dans|près de|autour de) ([A-Za-z0-9_\s,]+)(?:\.|$)",
        r"(?i)(?:katika|karibu na) ([A-Za-z0-9_\s,]+)(?:\.|$)",
        r"(?i)(?:ni|ninu) ([A-Za-z0-9_\s,]+)(?:\.|$)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

struct RegionalRule {
    dialect: &'static str,
    pattern: Regex,
}

impl RegionalRule {
    fn new(dialect: &'static str, pattern: &str) -> Self {
        Self {
            dialect,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

/// Extracts a profession and location from a free-form request.
///
/// Rules are tried in a fixed order and the first one that matches wins:
/// the formal "emi help me look for ..." command, then the vernacular
/// phrasings, then a scan for a known profession name. Values captured by the
/// first two keep the caller's casing; the keyword scan works on the
/// lowercased query and returns lowercase values.
pub fn process_regional_query(query: &str) -> ParsedQuery {
    if let Some(caps) = EMI_HELP.captures(query) {
        return ParsedQuery::new(group(&caps, 1), group(&caps, 2), MatchType::EmiHelp);
    }

    for rule in REGIONAL_RULES.iter() {
        if let Some(caps) = rule.pattern.captures(query) {
            tracing::debug!(dialect = rule.dialect, "Regional query pattern matched");
            return ParsedQuery::new(group(&caps, 1), group(&caps, 2), MatchType::Regional);
        }
    }

    let lower = query.to_lowercase();
    for (profession, location_pattern) in PROFESSION_LOCATIONS.iter() {
        if lower.contains(profession) {
            let location = location_pattern
                .captures(&lower)
                .and_then(|caps| group(&caps, 2));
            return ParsedQuery::new(Some(profession.to_string()), location, MatchType::Standard);
        }
    }

    ParsedQuery::default()
}

/// Finds a place name introduced by a preposition in any supported language,
/// falling back to whatever location the query parser extracts.
pub fn extract_location(query: &str) -> Option<String> {
    LOCATION_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(query).and_then(|caps| group(&caps, 1)))
        .or_else(|| process_regional_query(query).location)
}

fn group(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
