//! Domain synonym table and the cheap matching helpers used by search.

/// Domain term to synonyms. Terms and synonyms are single lower-case words.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("toalett", &["wc", "toalettstol", "klosett", "toalettskål"]),
    ("spotlights", &["spotlight", "spottar", "spotlampor", "downlights", "takspotlights"]),
    ("eluttag", &["uttag", "vägguttag", "kontakt", "stickkontakt"]),
    ("blandare", &["kran", "vattenkran", "duschblandare", "köksblandare"]),
    ("elektriker", &["elinstallatör", "elfirma", "elarbete", "elinstallation"]),
    ("rörmokare", &["vvs", "rörläggare", "rör", "vvsmontör"]),
    ("städning", &["städ", "städa", "städhjälp", "hemstäd", "lokalvård"]),
    ("målning", &["måla", "målare", "målningsarbete"]),
    ("läcka", &["läckage", "läcker", "vattenläcka", "vattenskada"]),
    ("laddbox", &["laddboxar", "elbilsladdare", "laddstation", "billaddare"]),
    ("elcentral", &["elcentraler", "proppskåp", "säkringsskåp", "jordfelsbrytare"]),
    ("golv", &["golvläggning", "parkett", "laminat", "trägolv"]),
    ("fönster", &["fönsterputs", "fönsterputsning", "fönstertvätt"]),
    ("flytt", &["flytta", "flytthjälp", "bärhjälp", "flyttfirma"]),
    ("kök", &["köksmontering", "köksrenovering", "köksskåp"]),
    ("badrum", &["badrumsrenovering", "våtrum", "dusch"]),
    ("trädgård", &["trädgårdsskötsel", "häck", "gräsmatta", "gräsklippning"]),
];

/// Synonyms listed for `word`. Only table keys have entries; a word that
/// merely appears as someone else's synonym has none.
pub fn synonyms_for(word: &str) -> Option<&'static [&'static str]> {
    SYNONYMS
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, synonyms)| *synonyms)
}

/// Filler words never used as keywords.
pub const STOP_WORDS: &[&str] = &[
    "och", "med", "för", "till", "från", "inom", "samt", "eller", "som", "ditt", "din", "per",
];

/// Lower-cased words of `text`, split on anything that is not alphanumeric.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Words worth indexing: three characters or more and not filler.
pub fn index_words(text: &str) -> impl Iterator<Item = String> + '_ {
    words(text).filter(|w| w.chars().count() >= 3 && !STOP_WORDS.contains(&w.as_str()))
}

/// True when both strings have at least three characters, differ in length by
/// at most two and one contains the other.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a < 3 || len_b < 3 || len_a.abs_diff(len_b) > 2 {
        return false;
    }
    a.contains(b) || b.contains(a)
}
