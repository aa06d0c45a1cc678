//! Data-driven intent pattern bank.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::errors::IntentError;
use super::kind::IntentKind;

/// Built-in Swedish trigger vocabulary. Patterns run on lower-cased text.
pub const BUILTIN_PATTERNS: &[(IntentKind, &[&str])] = &[
    (
        IntentKind::Emergency,
        &[
            r"\b(akut\w*|nödsituation|nödfall|katastrof)",
            r"\b(läck\w*|översvämn\w*|vattenskada|strömavbrott|kortslutning|brinner|brand|rökutveckling|gnist\w*)",
            r"\b(omedelbart|genast|direkt|nu|snabbt|asap)\b.*\b(hjälp|kom\w*|skicka)",
            r"\b(stopp i avlopp\w*|avloppet är stopp\w*|inget vatten|ingen ström|strömmen har gått)",
        ],
    ),
    (
        IntentKind::ServiceRequest,
        &[
            r"\b(behöver|vill|önskar|skulle vilja|söker|letar efter)\b.*\b(hjälp|byt\w*|install\w*|monter\w*|fixa\w*|laga\w*|renover\w*|måla\w*|städ\w*|repar\w*|bygg\w*|lägg\w*|sätta upp|klipp\w*|putsa\w*|flytta\w*)",
            r"\b(elektriker|rörmokare|snickare|målare|städ\w*|vvs|spotlight\w*|eluttag|uttag|blandare|toalett\w*|laddbox\w*|elcentral\w*|golv\w*|fönster\w*|kök\w*|badrum\w*|altan\w*|tapet\w*|häck\w*|flytt\w*)",
            r"\b(kan ni|kan du|utför ni|gör ni|hjälper ni|jobbar ni med)\b",
        ],
    ),
    (
        IntentKind::PricingInquiry,
        &[
            r"\b(pris\w*|kost\w*|offert\w*|timpris|timkostnad)",
            r"\b(hur mycket|vad tar ni|vad blir det|vad landar)",
            r"\b(billig\w*|dyr\w*|budget|kr|kronor|sek)\b",
        ],
    ),
    (
        IntentKind::RotRutQuestion,
        &[
            r"\b(rot|rut)\b",
            r"\b(rotavdrag\w*|rutavdrag\w*|skatteavdrag\w*|skattereduktion\w*)",
            r"\b(avdrag\w*|skatteverket|dra av)",
        ],
    ),
    (
        IntentKind::BookingRequest,
        &[
            r"\b(boka\w*|bokning\w*|reserver\w*)",
            r"\b(ledig\w* tid\w*|när kan ni|när har ni|har ni tid|kan ni komma|passar det)",
            r"\b(besök|hembesök|komma hit|komma förbi|träff\w*|möte)\b",
        ],
    ),
    (
        IntentKind::GeneralFaq,
        &[
            r"\b(hur fungerar|vad är|vilka|vad gäller|hur gör|information|info)\b",
            r"\b(garanti\w*|försäkr\w*|certifi\w*|behörig\w*|betal\w*|faktur\w*|område\w*|täcker ni|avbok\w*|ombok\w*|material)",
            r"\b(öppettider|öppet|helg\w*|kvällar)\b",
        ],
    ),
    (
        IntentKind::Handoff,
        &[
            r"\b(prata med|tala med|ring mig|ringa upp|kontakta mig|bli kontaktad)",
            r"\b(riktig person|människa|mänsklig|handläggare|kundtjänst|säljare)",
            r"\b(mejl\w*|e-post|email|whatsapp)\b",
        ],
    ),
];

/// Compiled patterns for one intent.
#[derive(Debug, Clone)]
pub struct IntentPatterns {
    pub kind: IntentKind,
    pub patterns: Vec<Regex>,
}

impl IntentPatterns {
    /// Number of patterns matching `normalized`.
    pub fn match_count(&self, normalized: &str) -> usize {
        self.patterns.iter().filter(|p| p.is_match(normalized)).count()
    }
}

/// Pattern table keyed by intent, kept in classification order.
#[derive(Debug, Clone)]
pub struct IntentPatternBank {
    entries: Vec<IntentPatterns>,
}

static BUILTIN: Lazy<IntentPatternBank> = Lazy::new(|| {
    IntentPatternBank::from_table(BUILTIN_PATTERNS).expect("built-in intent patterns compile")
});

impl IntentPatternBank {
    /// Compiles a table of intent patterns.
    ///
    /// Entries are reordered into [`IntentKind`] order; intents without an
    /// entry never score from patterns.
    pub fn from_table(table: &[(IntentKind, &[&str])]) -> Result<Self, IntentError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(table.len());

        for (kind, patterns) in table {
            if !seen.insert(*kind) {
                return Err(IntentError::DuplicateIntent(*kind));
            }
            if patterns.is_empty() {
                return Err(IntentError::EmptyPatterns(*kind));
            }

            let compiled = patterns
                .iter()
                .map(|pattern| {
                    Regex::new(pattern).map_err(|source| IntentError::InvalidPattern {
                        intent: *kind,
                        pattern: (*pattern).to_string(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            entries.push(IntentPatterns {
                kind: *kind,
                patterns: compiled,
            });
        }

        entries.sort_by_key(|entry| entry.kind);
        Ok(Self { entries })
    }

    /// The shared built-in bank.
    pub fn builtin() -> &'static IntentPatternBank {
        &BUILTIN
    }

    pub fn entries(&self) -> &[IntentPatterns] {
        &self.entries
    }

    /// Pattern matches for `kind`, zero when the intent has no entry.
    pub fn match_count(&self, kind: IntentKind, normalized: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map_or(0, |entry| entry.match_count(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(kind: IntentKind, text: &str) -> usize {
        IntentPatternBank::builtin().match_count(kind, &text.to_lowercase())
    }

    #[test]
    fn builtin_bank_covers_every_intent() {
        let bank = IntentPatternBank::builtin();
        let kinds: Vec<IntentKind> = bank.entries().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, IntentKind::ALL.to_vec());
        for entry in bank.entries() {
            assert!((2..=4).contains(&entry.patterns.len()), "{}", entry.kind);
        }
    }

    #[test]
    fn emergency_vocabulary() {
        assert_eq!(count(IntentKind::Emergency, "Det läcker vatten, akut!"), 2);
        assert!(count(IntentKind::Emergency, "Strömavbrott i hela huset") >= 1);
        assert_eq!(count(IntentKind::Emergency, "Jag vill måla om"), 0);
    }

    #[test]
    fn service_request_vocabulary() {
        assert_eq!(count(IntentKind::ServiceRequest, "Jag vill byta 6 spotlights i köket"), 2);
        assert!(count(IntentKind::ServiceRequest, "Kan ni lägga nytt golv?") >= 2);
    }

    #[test]
    fn pricing_and_rot_rut_vocabulary() {
        assert_eq!(count(IntentKind::PricingInquiry, "Vad kostar det?"), 1);
        assert_eq!(count(IntentKind::PricingInquiry, "Hur mycket kostar det i kronor?"), 3);
        assert!(count(IntentKind::RotRutQuestion, "Gäller rot-avdraget?") >= 2);
        assert_eq!(count(IntentKind::RotRutQuestion, "Jag vill ha en rotfruktssallad"), 0);
    }

    #[test]
    fn booking_faq_and_handoff_vocabulary() {
        assert!(count(IntentKind::BookingRequest, "Kan jag boka ett hembesök?") >= 2);
        assert!(count(IntentKind::GeneralFaq, "Har ni garanti?") >= 1);
        assert!(count(IntentKind::Handoff, "Jag vill prata med en människa") >= 2);
    }

    #[test]
    fn table_entries_are_sorted_and_validated() {
        let bank = IntentPatternBank::from_table(&[
            (IntentKind::Handoff, &[r"\bring\b"]),
            (IntentKind::Emergency, &[r"\bakut\b"]),
        ])
        .unwrap();
        assert_eq!(bank.entries()[0].kind, IntentKind::Emergency);
        assert_eq!(bank.match_count(IntentKind::PricingInquiry, "pris"), 0);

        let err = IntentPatternBank::from_table(&[(IntentKind::Emergency, &[r"(unclosed"])])
            .unwrap_err();
        assert!(matches!(err, IntentError::InvalidPattern { intent: IntentKind::Emergency, .. }));

        let err = IntentPatternBank::from_table(&[
            (IntentKind::Emergency, &[r"a"]),
            (IntentKind::Emergency, &[r"b"]),
        ])
        .unwrap_err();
        assert!(matches!(err, IntentError::DuplicateIntent(IntentKind::Emergency)));

        let err = IntentPatternBank::from_table(&[(IntentKind::GeneralFaq, &[])]).unwrap_err();
        assert!(matches!(err, IntentError::EmptyPatterns(IntentKind::GeneralFaq)));
    }
}
