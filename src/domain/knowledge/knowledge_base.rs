//! In-memory knowledge index with weighted keyword search.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::faq::{COVERAGE_REGIONS, FAQ_ENTRIES};
use super::item::{ItemMetadata, KnowledgeItem, KnowledgeKind};
use super::synonyms::{fuzzy_match, index_words, synonyms_for, words, SYNONYMS};
use crate::domain::catalog::{PriceUnit, ServiceCatalog, ServiceCategory, SubService};
use crate::domain::pricing::{format_amount, DeductionKind, TaxPolicy};

/// Score gap below which relevance decides the order.
const TIE_BREAK_WINDOW: u32 = 10;

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub item: KnowledgeItem,
    pub score: u32,
    pub relevance: f64,
}

/// Read-only corpus of services, tax rules, FAQ entries and coverage policy.
///
/// Built once at startup and shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    items: Vec<KnowledgeItem>,
}

impl KnowledgeBase {
    /// Indexes the catalog together with the ROT/RUT rules of `policy`, the
    /// built-in FAQ and the coverage policy.
    pub fn build(catalog: &ServiceCatalog, policy: &TaxPolicy) -> Self {
        let mut items = Vec::new();

        for category in &catalog.categories {
            items.push(category_item(category));
            items.extend(
                category
                    .sub_services
                    .iter()
                    .map(|sub| sub_service_item(category, sub)),
            );
        }

        items.push(rule_item(DeductionKind::Rot, policy));
        items.push(rule_item(DeductionKind::Rut, policy));
        items.extend(faq_items());
        items.push(coverage_item());

        tracing::debug!(items = items.len(), "Built knowledge base");
        Self { items }
    }

    /// Wraps a prepared item list.
    pub fn from_items(items: Vec<KnowledgeItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[KnowledgeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ranked search over every item.
    ///
    /// Empty queries and misses give an empty list.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        self.ranked(query, limit, |_| true)
    }

    /// Ranked search restricted to one kind, filtered before the limit.
    pub fn search_kind(&self, query: &str, kind: KnowledgeKind, limit: usize) -> Vec<SearchHit> {
        self.ranked(query, limit, |item| item.kind == kind)
    }

    /// A service item by id (category slug or sub-service id).
    pub fn get_service(&self, id: &str) -> Option<&KnowledgeItem> {
        self.items
            .iter()
            .find(|item| item.kind == KnowledgeKind::Service && item.id == id)
    }

    /// Service items in a category, category item first.
    pub fn get_services_by_category(&self, category: &str) -> Vec<&KnowledgeItem> {
        self.items
            .iter()
            .filter(|item| item.kind == KnowledgeKind::Service && item.category == category)
            .collect()
    }

    /// The rule item for a deduction scheme.
    pub fn get_rot_rut_info(&self, kind: DeductionKind) -> Option<&KnowledgeItem> {
        self.items.iter().find(|item| {
            matches!(&item.metadata, ItemMetadata::Rule { deduction, .. } if *deduction == kind)
        })
    }

    fn ranked(
        &self,
        query: &str,
        limit: usize,
        predicate: impl Fn(&KnowledgeItem) -> bool,
    ) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let query_words: Vec<String> = words(&query).filter(|w| w.chars().count() >= 2).collect();

        let mut hits: Vec<SearchHit> = Vec::new();
        for item in self.items.iter().filter(|item| predicate(*item)) {
            let (score, relevance) = score_item(item, &query, &query_words);
            if score > 0 {
                insert_ranked(
                    &mut hits,
                    SearchHit {
                        item: item.clone(),
                        score,
                        relevance,
                    },
                );
            }
        }

        hits.truncate(limit);
        hits
    }
}

fn score_item(item: &KnowledgeItem, query: &str, query_words: &[String]) -> (u32, f64) {
    let mut score = 0u32;
    let mut relevance = 0.0;

    if item.title.to_lowercase().contains(query) {
        score += 100;
        relevance += 0.9;
    }
    if item.content.to_lowercase().contains(query) {
        score += 50;
        relevance += 0.7;
    }

    let keyword_hits = item
        .keywords
        .iter()
        .filter(|k| query.contains(k.as_str()) || k.contains(query))
        .count() as u32;
    score += 30 * keyword_hits;
    relevance += 0.2 * f64::from(keyword_hits);

    for word in query_words {
        if item.keywords.iter().any(|k| k.contains(word.as_str())) {
            score += 20;
            relevance += 0.3;
        }

        if let Some(synonyms) = synonyms_for(word) {
            let synonym_hit = synonyms
                .iter()
                .any(|syn| item.keywords.iter().any(|k| k.contains(*syn)));
            if synonym_hit {
                score += 25;
                relevance += 0.4;
            }
        }

        let fuzzy_hits = item.keywords.iter().filter(|k| fuzzy_match(word, k)).count() as u32;
        score += 10 * fuzzy_hits;
        relevance += 0.1 * f64::from(fuzzy_hits);
    }

    (score, relevance)
}

/// Orders by score unless the scores are within the tie-break window, in
/// which case relevance decides.
fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    if a.score.abs_diff(b.score) < TIE_BREAK_WINDOW {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    } else {
        b.score.cmp(&a.score)
    }
}

// `compare_hits` is not a total order; inserting one hit at a time keeps
// equally ranked hits in corpus order.
fn insert_ranked(hits: &mut Vec<SearchHit>, hit: SearchHit) {
    let position = hits
        .iter()
        .position(|existing| compare_hits(&hit, existing) == Ordering::Less)
        .unwrap_or(hits.len());
    hits.insert(position, hit);
}

fn category_item(category: &ServiceCategory) -> KnowledgeItem {
    // Categories only take synonyms from their own name; their descriptions
    // enumerate sub-services, which carry those terms themselves.
    let mut keywords = keywords_for(&category.title, &category.title);
    keywords.insert(category.slug.clone());

    KnowledgeItem {
        id: category.slug.clone(),
        kind: KnowledgeKind::Service,
        title: category.title.clone(),
        content: format!(
            "{} Från {} {}.",
            category.description,
            format_amount(i64::from(category.base_price)),
            PriceUnit::Hour.label()
        ),
        category: category.slug.clone(),
        keywords,
        metadata: ItemMetadata::Service {
            base_price: category.base_price,
            price_unit: PriceUnit::Hour,
            eligible: category.eligible,
            category_slug: category.slug.clone(),
            sub_service_id: None,
        },
    }
}

fn sub_service_item(category: &ServiceCategory, sub: &SubService) -> KnowledgeItem {
    let mut keywords = keywords_for(&sub.title, &sub.description);
    keywords.insert(category.slug.clone());

    KnowledgeItem {
        id: sub.id.clone(),
        kind: KnowledgeKind::Service,
        title: sub.title.clone(),
        content: format!(
            "{} Pris {} {}.",
            sub.description,
            format_amount(i64::from(sub.base_price)),
            sub.price_unit.label()
        ),
        category: category.slug.clone(),
        keywords,
        metadata: ItemMetadata::Service {
            base_price: sub.base_price,
            price_unit: sub.price_unit,
            eligible: category.eligible,
            category_slug: category.slug.clone(),
            sub_service_id: Some(sub.id.clone()),
        },
    }
}

/// Title words plus every synonym group whose term occurs as a whole word in
/// the title or description.
fn keywords_for(title: &str, description: &str) -> BTreeSet<String> {
    let mut keywords: BTreeSet<String> = index_words(title).collect();
    let text_words: BTreeSet<String> = words(title).chain(words(description)).collect();

    for (key, synonyms) in SYNONYMS {
        let mentioned = std::iter::once(key)
            .chain(synonyms.iter())
            .any(|term| text_words.contains(*term));
        if mentioned {
            keywords.insert((*key).to_string());
            keywords.extend(synonyms.iter().map(|s| (*s).to_string()));
        }
    }

    keywords
}

fn rule_item(kind: DeductionKind, policy: &TaxPolicy) -> KnowledgeItem {
    let rate = policy.rate_for(kind);
    let annual_cap = policy.annual_cap(kind);

    let (title, content, terms): (&str, String, &[&str]) = match kind {
        DeductionKind::Rot => (
            "ROT-avdrag",
            format!(
                "ROT-avdraget ger {} skattereduktion på arbetskostnaden inklusive moms vid \
                 reparation, underhåll, om- och tillbyggnad av bostaden. Avdraget får vara högst \
                 {} kr per person och år. Material och resor ger inget avdrag. Nivån {} gäller \
                 för arbete som betalas till och med {}, därefter {}.",
                rate,
                format_amount(i64::from(annual_cap)),
                rate,
                policy.rot_rate_valid_through.format("%Y-%m-%d"),
                policy.rot_rate_after
            ),
            &[
                "rot", "rotavdrag", "avdrag", "skatteavdrag", "skattereduktion", "renovering",
                "reparation", "hantverkare",
            ],
        ),
        DeductionKind::Rut => (
            "RUT-avdrag",
            format!(
                "RUT-avdraget ger {} skattereduktion på arbetskostnaden för hushållsnära tjänster \
                 som städning, fönsterputs, trädgårdsskötsel och flytthjälp. ROT och RUT får \
                 tillsammans uppgå till högst {} kr per person och år.",
                rate,
                format_amount(i64::from(annual_cap))
            ),
            &[
                "rut", "rutavdrag", "avdrag", "skatteavdrag", "skattereduktion", "hushållsnära",
                "städning", "trädgård",
            ],
        ),
    };

    KnowledgeItem {
        id: format!("rule-{}", kind.to_string().to_lowercase()),
        kind: KnowledgeKind::Rule,
        title: title.to_string(),
        content,
        category: "skatteavdrag".to_string(),
        keywords: terms.iter().map(|t| (*t).to_string()).collect(),
        metadata: ItemMetadata::Rule {
            deduction: kind,
            rate,
            annual_cap,
        },
    }
}

fn faq_items() -> impl Iterator<Item = KnowledgeItem> {
    FAQ_ENTRIES.iter().enumerate().map(|(i, entry)| {
        let mut keywords: BTreeSet<String> = index_words(entry.question).collect();
        keywords.extend(entry.keywords.iter().map(|k| (*k).to_string()));

        KnowledgeItem {
            id: format!("faq-{}", i + 1),
            kind: KnowledgeKind::Faq,
            title: entry.question.to_string(),
            content: entry.answer.to_string(),
            category: "faq".to_string(),
            keywords,
            metadata: ItemMetadata::Faq {
                question: entry.question.to_string(),
                answer: entry.answer.to_string(),
            },
        }
    })
}

fn coverage_item() -> KnowledgeItem {
    let regions: Vec<String> = COVERAGE_REGIONS.iter().map(|r| (*r).to_string()).collect();
    let mut keywords: BTreeSet<String> = ["område", "områden", "täckning", "region", "kommun"]
        .iter()
        .map(|k| (*k).to_string())
        .collect();
    keywords.extend(regions.iter().map(|r| r.to_lowercase()));

    KnowledgeItem {
        id: "policy-coverage".to_string(),
        kind: KnowledgeKind::Policy,
        title: "Serviceområde".to_string(),
        content: format!(
            "Vi utför uppdrag i {} med närliggande kommuner.",
            regions.join(", ")
        ),
        category: "policy".to_string(),
        keywords,
        metadata: ItemMetadata::Policy { regions },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kb() -> KnowledgeBase {
        let catalog = ServiceCatalog::bundled().unwrap();
        KnowledgeBase::build(&catalog, &TaxPolicy::default())
    }

    #[test]
    fn build_indexes_every_source() {
        let kb = kb();
        let catalog = ServiceCatalog::bundled().unwrap();
        let services: usize = catalog
            .categories
            .iter()
            .map(|c| 1 + c.sub_services.len())
            .sum();

        assert_eq!(kb.len(), services + 2 + FAQ_ENTRIES.len() + 1);
        assert!(kb.get_service("el-spotlights").is_some());
        assert!(kb.get_service("elektriker").is_some());
        assert!(kb.get_service("faq-1").is_none());
    }

    #[test]
    fn synonyms_are_attached_by_whole_word() {
        let kb = kb();
        let toilet = kb.get_service("vvs-toalett").unwrap();
        assert!(toilet.keywords.contains("wc"));
        assert!(toilet.keywords.contains("klosett"));

        let spots = kb.get_service("el-spotlights").unwrap();
        assert!(spots.keywords.contains("downlights"));
        assert!(!spots.keywords.contains("wc"));
    }

    #[test]
    fn spotlight_request_ranks_spotlight_service_first() {
        let hits = kb().search("Jag vill byta 6 spotlights i köket", 3);
        assert_eq!(hits[0].item.id, "el-spotlights");
        assert!(hits.len() <= 3);
    }

    #[test]
    fn synonym_query_finds_service() {
        let hits = kb().search("wc", 3);
        assert_eq!(hits[0].item.id, "vvs-toalett");
    }

    #[test]
    fn synonym_signal_applies_to_table_keys_only() {
        let mut item = kb().get_service("vvs-toalett").unwrap().clone();
        item.title = "Byte".to_string();
        item.content = "Montering".to_string();
        item.keywords = ["klosett", "toalett"].iter().map(|k| k.to_string()).collect();

        // keyword hit 30 + word in keyword 20 + fuzzy 10, no synonym boost
        let (score, _) = score_item(&item, "klosett", &["klosett".to_string()]);
        assert_eq!(score, 60);

        // "toalett" is a key whose synonym "klosett" is a keyword: +25
        let (score, _) = score_item(&item, "toalett", &["toalett".to_string()]);
        assert_eq!(score, 85);
    }

    #[test]
    fn title_match_scores_highest() {
        let hits = kb().search("Flyttstädning", 5);
        assert_eq!(hits[0].item.id, "stad-flyttstad");
        assert!(hits[0].score >= 100);
    }

    #[test]
    fn empty_query_and_misses_give_empty_results() {
        let kb = kb();
        assert!(kb.search("", 5).is_empty());
        assert!(kb.search("   ", 5).is_empty());
        assert!(kb.search("xyzzy", 5).is_empty());
    }

    #[test]
    fn search_kind_filters_before_limit() {
        let hits = kb().search_kind("garanti", KnowledgeKind::Faq, 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item.kind, KnowledgeKind::Faq);
        assert_eq!(hits[0].item.faq().unwrap().0, "Har ni garanti på arbetet?");
    }

    #[test]
    fn category_lookup_returns_category_and_sub_services() {
        let kb = kb();
        let electrical = kb.get_services_by_category("elektriker");
        assert_eq!(electrical.len(), 6);
        assert_eq!(electrical[0].id, "elektriker");
        assert!(kb.get_services_by_category("finns-inte").is_empty());
    }

    #[test]
    fn rule_items_carry_policy_parameters() {
        let kb = kb();
        let rot = kb.get_rot_rut_info(DeductionKind::Rot).unwrap();
        assert_eq!(rot.id, "rule-rot");
        assert!(rot.content.contains("50%"));
        assert!(rot.content.contains("50 000 kr"));
        assert!(rot.content.contains("2025-12-31"));

        let rut = kb.get_rot_rut_info(DeductionKind::Rut).unwrap();
        match &rut.metadata {
            ItemMetadata::Rule { annual_cap, .. } => assert_eq!(*annual_cap, 75_000),
            other => panic!("unexpected metadata {other:?}"),
        }
    }

    #[test]
    fn priced_service_view_uses_category_eligibility() {
        let kb = kb();
        let cleaning = kb.get_service("stad-hemstad").unwrap().priced_service().unwrap();
        assert!(cleaning.eligible.rut);
        assert_eq!(cleaning.unit, PriceUnit::Hour);
        assert!(kb.get_rot_rut_info(DeductionKind::Rot).unwrap().priced_service().is_none());
    }

    #[test]
    fn near_ties_are_broken_by_relevance() {
        let make = |score, relevance| SearchHit {
            item: kb().items()[0].clone(),
            score,
            relevance,
        };
        let mut hits = Vec::new();
        insert_ranked(&mut hits, make(100, 0.5));
        insert_ranked(&mut hits, make(105, 0.2));
        insert_ranked(&mut hits, make(130, 0.1));

        let scores: Vec<u32> = hits.iter().map(|h| h.score).collect();
        assert_eq!(scores, vec![130, 100, 105]);
    }

    proptest! {
        #[test]
        fn search_is_deterministic(query in "[a-zåäö ]{0,24}", limit in 1usize..8) {
            let kb = kb();
            let first = kb.search(&query, limit);
            let second = kb.search(&query, limit);
            prop_assert_eq!(first, second);
        }
    }
}
