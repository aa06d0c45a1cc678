//! Slot extraction.
//!
//! A fixed table of regex rules pulls structured fields out of the raw
//! message. Each slot takes the first rule that matches; a rule whose
//! capture cannot be normalized counts as no match.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named fields collected during a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotName {
    ServiceType,
    Quantity,
    Room,
    LocationType,
    Location,
    Phone,
    Email,
    TimePreference,
    DatePreference,
    Urgency,
    Name,
    PreferredTime,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::ServiceType => "service_type",
            SlotName::Quantity => "quantity",
            SlotName::Room => "room",
            SlotName::LocationType => "location_type",
            SlotName::Location => "location",
            SlotName::Phone => "phone",
            SlotName::Email => "email",
            SlotName::TimePreference => "time_preference",
            SlotName::DatePreference => "date_preference",
            SlotName::Urgency => "urgency",
            SlotName::Name => "name",
            SlotName::PreferredTime => "preferred_time",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An extracted value. Only `quantity` is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Number(u32),
    Text(String),
}

impl SlotValue {
    pub fn text(value: impl Into<String>) -> Self {
        SlotValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SlotValue::Text(text) => Some(text),
            SlotValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            SlotValue::Number(n) => Some(*n),
            SlotValue::Text(_) => None,
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Number(n) => write!(f, "{}", n),
            SlotValue::Text(text) => f.write_str(text),
        }
    }
}

/// Slots extracted from one message.
pub type ExtractedSlots = BTreeMap<SlotName, SlotValue>;

enum SlotRule {
    /// The first capture group, normalized.
    Capture {
        slot: SlotName,
        pattern: Regex,
        normalize: fn(&str) -> Option<SlotValue>,
    },
    /// Any match sets a fixed value.
    Keyword {
        slot: SlotName,
        pattern: Regex,
        value: &'static str,
    },
}

impl SlotRule {
    fn slot(&self) -> SlotName {
        match self {
            SlotRule::Capture { slot, .. } | SlotRule::Keyword { slot, .. } => *slot,
        }
    }

    fn apply(&self, message: &str) -> Option<SlotValue> {
        match self {
            SlotRule::Capture {
                pattern, normalize, ..
            } => pattern
                .captures(message)
                .and_then(|caps| caps.get(1))
                .and_then(|m| normalize(m.as_str())),
            SlotRule::Keyword { pattern, value, .. } => {
                pattern.is_match(message).then(|| SlotValue::text(*value))
            }
        }
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in slot pattern compiles")
}

fn capture(slot: SlotName, pattern: &str, normalize: fn(&str) -> Option<SlotValue>) -> SlotRule {
    SlotRule::Capture {
        slot,
        pattern: regex(pattern),
        normalize,
    }
}

fn keyword(slot: SlotName, pattern: &str, value: &'static str) -> SlotRule {
    SlotRule::Keyword {
        slot,
        pattern: regex(pattern),
        value,
    }
}

/// Cities recognised for the `location` slot.
pub const KNOWN_LOCATIONS: &[&str] = &[
    "stockholm", "göteborg", "malmö", "uppsala", "västerås", "örebro", "linköping",
    "helsingborg", "jönköping", "norrköping", "lund", "umeå", "gävle", "södertälje",
    "eskilstuna", "solna", "nacka", "täby", "sollentuna", "huddinge", "järfälla", "lidingö",
    "danderyd", "sundbyberg", "haninge", "botkyrka", "tyresö", "värmdö", "mölndal", "partille",
    "kungsbacka",
];

static SLOT_RULES: Lazy<Vec<SlotRule>> = Lazy::new(|| {
    let locations = format!(r"(?i)\b({})\b", KNOWN_LOCATIONS.join("|"));

    vec![
        capture(
            SlotName::Quantity,
            r"(?i)\b(\d{1,4})\s*(?:st|stycken|styck|spotlights?|spottar|uttag|eluttag|lampor|fönster|element|dörrar|kvm|kvadratmeter|m2|m²|meter|timmar|tim)",
            normalize_quantity,
        ),
        keyword(SlotName::Room, r"(?i)\bkök(?:et|en)?\b", "kök"),
        keyword(SlotName::Room, r"(?i)\bbadrum(?:met)?\b", "badrum"),
        keyword(SlotName::Room, r"(?i)\bvardagsrum(?:met)?\b", "vardagsrum"),
        keyword(SlotName::Room, r"(?i)\bsovrum(?:met)?\b", "sovrum"),
        keyword(SlotName::Room, r"(?i)\bhall(?:en)?\b", "hall"),
        keyword(SlotName::Room, r"(?i)\btvättstuga(?:n)?\b", "tvättstuga"),
        keyword(SlotName::Room, r"(?i)\bkällare(?:n)?\b", "källare"),
        keyword(SlotName::Room, r"(?i)\bgarage(?:t)?\b", "garage"),
        keyword(SlotName::LocationType, r"(?i)\b(inomhus|inne|invändig\w*)\b", "inomhus"),
        keyword(
            SlotName::LocationType,
            r"(?i)\b(utomhus|ute|utvändig\w*|fasad\w*|trädgård\w*|altan\w*|tomt\w*)\b",
            "utomhus",
        ),
        capture(SlotName::Location, &locations, normalize_location),
        capture(
            SlotName::Phone,
            r"((?:\+46|\b0)[\s-]?(?:\d[\s-]?){6,8}\d)",
            normalize_phone,
        ),
        capture(
            SlotName::Email,
            r"(?i)\b([a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,})\b",
            normalize_lowercase,
        ),
        keyword(
            SlotName::TimePreference,
            r"(?i)\b(förmiddag\w*|morgonen|tidigt)\b",
            "förmiddag",
        ),
        keyword(SlotName::TimePreference, r"(?i)\beftermiddag\w*", "eftermiddag"),
        keyword(SlotName::TimePreference, r"(?i)\bkväll\w*", "kväll"),
        capture(
            SlotName::DatePreference,
            r"(?i)\b(idag|i dag|imorgon|i morgon|övermorgon|måndag|tisdag|onsdag|torsdag|fredag|lördag|söndag|nästa vecka|i helgen|denna vecka|den här veckan)\b",
            normalize_date,
        ),
        keyword(
            SlotName::Urgency,
            r"(?i)\b(ingen brådska|inte bråttom|inte akut|ingen stress|när som helst|flexibel)\b",
            "low",
        ),
        keyword(
            SlotName::Urgency,
            r"(?i)\b(akut\w*|brådskande|omedelbart|genast|nu direkt|så fort som möjligt|så snart som möjligt|asap|idag)\b",
            "high",
        ),
        keyword(
            SlotName::Urgency,
            r"(?i)\b(snart|inom kort|denna vecka|den här veckan|nästa vecka|inom en vecka)\b",
            "medium",
        ),
        capture(
            SlotName::Name,
            r"(?:[Jj]ag heter|[Mm]itt namn är|[Hh]ej,? jag är)\s+([A-ZÅÄÖ][a-zåäöé]+(?:[ -][A-ZÅÄÖ][a-zåäöé]+)?)",
            normalize_text,
        ),
    ]
});

/// Service keywords mapped to catalog category slugs, in priority order.
static SERVICE_TYPES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("elektriker", regex(r"(?i)\b(elektriker\w*|el|elarbete\w*|eluttag\w*|uttag\w*|spotlight\w*|spottar|belysning\w*|lamp\w*|laddbox\w*|elcentral\w*|jordfelsbrytare|strömbrytare)\b")),
        ("vvs", regex(r"(?i)\b(vvs|rörmokare\w*|rör|blandare\w*|kran\w*|toalett\w*|wc|läck\w*|avlopp\w*|element\w*|dusch\w*)\b")),
        ("stadning", regex(r"(?i)(städ\w*)")),
        ("fonsterputs", regex(r"(?i)\b(fönsterputs\w*|fönstertvätt\w*|fönster)\b")),
        ("malare", regex(r"(?i)\b(målare\w*|måla\w*|målning\w*|tapet\w*|spackl\w*|fasad\w*)\b")),
        ("snickare", regex(r"(?i)\b(snickare\w*|snickeri\w*|kök\w*|golv\w*|parkett|laminat|dörr\w*|altan\w*|trädäck)\b")),
        ("tradgard", regex(r"(?i)\b(trädgård\w*|häck\w*|gräs\w*|buskar)\b")),
        ("flytt", regex(r"(?i)\b(flytt\w*|bärhjälp)\b")),
    ]
});

static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)\b(?:kl(?:ockan|\.)?\s*)?([01]?\d|2[0-3])[:.]([0-5]\d)\b"));

static HOUR_ONLY: Lazy<Regex> = Lazy::new(|| regex(r"(?i)\bkl(?:ockan|\.)?\s*([01]?\d|2[0-3])\b"));

/// Runs the general slot table over `message`.
pub fn extract_slots(message: &str) -> ExtractedSlots {
    let mut slots = ExtractedSlots::new();
    for rule in SLOT_RULES.iter() {
        if slots.contains_key(&rule.slot()) {
            continue;
        }
        if let Some(value) = rule.apply(message) {
            slots.insert(rule.slot(), value);
        }
    }
    slots
}

/// Catalog category slug mentioned in `message`.
pub fn extract_service_type(message: &str) -> Option<SlotValue> {
    SERVICE_TYPES
        .iter()
        .find(|(_, pattern)| pattern.is_match(message))
        .map(|(slug, _)| SlotValue::text(*slug))
}

/// Clock time such as "14:30", "kl 9" or "13.15", as `HH:MM`.
pub fn extract_preferred_time(message: &str) -> Option<SlotValue> {
    if let Some(caps) = CLOCK_TIME.captures(message) {
        let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
        let minute = caps.get(2)?.as_str();
        return Some(SlotValue::Text(format!("{:02}:{}", hour, minute)));
    }

    let caps = HOUR_ONLY.captures(message)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    Some(SlotValue::Text(format!("{:02}:00", hour)))
}

fn normalize_quantity(raw: &str) -> Option<SlotValue> {
    raw.parse::<u32>().ok().filter(|q| *q > 0).map(SlotValue::Number)
}

fn normalize_phone(raw: &str) -> Option<SlotValue> {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    Some(SlotValue::Text(digits))
}

fn normalize_location(raw: &str) -> Option<SlotValue> {
    let lower = raw.to_lowercase();
    let mut chars = lower.chars();
    let first = chars.next()?;
    Some(SlotValue::Text(first.to_uppercase().chain(chars).collect()))
}

fn normalize_date(raw: &str) -> Option<SlotValue> {
    let value = match raw.to_lowercase().as_str() {
        "i dag" => "idag".to_string(),
        "i morgon" => "imorgon".to_string(),
        "den här veckan" => "denna vecka".to_string(),
        other => other.to_string(),
    };
    Some(SlotValue::Text(value))
}

fn normalize_lowercase(raw: &str) -> Option<SlotValue> {
    Some(SlotValue::Text(raw.to_lowercase()))
}

fn normalize_text(raw: &str) -> Option<SlotValue> {
    Some(SlotValue::text(raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(slots: &ExtractedSlots, name: SlotName) -> Option<&str> {
        slots.get(&name).and_then(SlotValue::as_text)
    }

    #[test]
    fn extracts_quantity_and_room() {
        let slots = extract_slots("Jag vill byta 6 spotlights i köket");
        assert_eq!(slots.get(&SlotName::Quantity), Some(&SlotValue::Number(6)));
        assert_eq!(text(&slots, SlotName::Room), Some("kök"));
    }

    #[test]
    fn bare_numbers_are_not_quantities() {
        let slots = extract_slots("Vi bor på våning 3");
        assert!(!slots.contains_key(&SlotName::Quantity));
    }

    #[test]
    fn normalizes_swedish_phone_numbers() {
        for (input, expected) in [
            ("Ring mig på 070-123 45 67", "0701234567"),
            ("Mitt nummer är 0701234567", "0701234567"),
            ("Nås på +46 70 123 45 67", "+46701234567"),
            ("Hemnummer 08-123 456 78", "0812345678"),
        ] {
            let slots = extract_slots(input);
            assert_eq!(text(&slots, SlotName::Phone), Some(expected), "{input}");
        }
    }

    #[test]
    fn location_is_whitelisted_and_capitalized() {
        let slots = extract_slots("jag bor i uppsala");
        assert_eq!(text(&slots, SlotName::Location), Some("Uppsala"));

        let slots = extract_slots("jag bor i Göteborg");
        assert_eq!(text(&slots, SlotName::Location), Some("Göteborg"));

        let slots = extract_slots("jag bor i Atlantis");
        assert!(!slots.contains_key(&SlotName::Location));
    }

    #[test]
    fn extracts_email_lowercased() {
        let slots = extract_slots("Maila Anna.Svensson@Example.se tack");
        assert_eq!(text(&slots, SlotName::Email), Some("anna.svensson@example.se"));
    }

    #[test]
    fn urgency_prefers_low_then_high() {
        let low = extract_slots("Det är inte akut, ingen brådska");
        assert_eq!(text(&low, SlotName::Urgency), Some("low"));

        let high = extract_slots("Det är akut!");
        assert_eq!(text(&high, SlotName::Urgency), Some("high"));

        let medium = extract_slots("Gärna snart");
        assert_eq!(text(&medium, SlotName::Urgency), Some("medium"));
    }

    #[test]
    fn name_requires_capitalized_words() {
        let slots = extract_slots("Hej, jag heter Anna Svensson och bor i Solna");
        assert_eq!(text(&slots, SlotName::Name), Some("Anna Svensson"));
        assert_eq!(text(&slots, SlotName::Location), Some("Solna"));

        let slots = extract_slots("jag heter anna");
        assert!(!slots.contains_key(&SlotName::Name));
    }

    #[test]
    fn date_and_time_preferences() {
        let slots = extract_slots("Passar i morgon på eftermiddagen?");
        assert_eq!(text(&slots, SlotName::DatePreference), Some("imorgon"));
        assert_eq!(text(&slots, SlotName::TimePreference), Some("eftermiddag"));
    }

    #[test]
    fn location_type() {
        let slots = extract_slots("Det gäller fasaden");
        assert_eq!(text(&slots, SlotName::LocationType), Some("utomhus"));
    }

    #[test]
    fn service_type_keyword_list_in_priority_order() {
        let slug = |m: &str| extract_service_type(m).map(|v| v.to_string());
        assert_eq!(slug("Jag vill byta 6 spotlights i köket").as_deref(), Some("elektriker"));
        assert_eq!(slug("Behöver flyttstädning").as_deref(), Some("stadning"));
        assert_eq!(slug("Hjälp med flytten").as_deref(), Some("flytt"));
        assert_eq!(slug("Toaletten läcker").as_deref(), Some("vvs"));
        assert_eq!(slug("Hej där"), None);
    }

    #[test]
    fn preferred_time_formats() {
        let time = |m: &str| extract_preferred_time(m).map(|v| v.to_string());
        assert_eq!(time("Går det kl 14:30?").as_deref(), Some("14:30"));
        assert_eq!(time("runt 9.15").as_deref(), Some("09:15"));
        assert_eq!(time("klockan 8").as_deref(), Some("08:00"));
        assert_eq!(time("någon gång i veckan"), None);
    }

    #[test]
    fn slot_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&SlotValue::Number(6)).unwrap(), "6");
        let back: SlotValue = serde_json::from_str("\"Uppsala\"").unwrap();
        assert_eq!(back, SlotValue::text("Uppsala"));
    }
}
