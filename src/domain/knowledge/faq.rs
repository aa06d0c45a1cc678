//! Static FAQ and coverage content.

/// One FAQ entry with its extra match terms.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub keywords: &'static [&'static str],
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Hur snabbt kan ni komma?",
        answer: "Vi återkommer normalt inom 24 timmar och kan ofta utföra jobbet inom en vecka. Vid akuta ärenden försöker vi vara på plats samma dag.",
        keywords: &["snabbt", "snabb", "väntetid", "komma", "ledig"],
    },
    FaqEntry {
        question: "Vilka områden täcker ni?",
        answer: "Vi utför uppdrag i Stockholm, Göteborg, Malmö och Uppsala med närliggande kommuner. Hör av dig om du bor utanför, vi hjälper ofta till ändå.",
        keywords: &["område", "områden", "täcker", "kommun", "stad", "ort"],
    },
    FaqEntry {
        question: "Har ni garanti på arbetet?",
        answer: "Ja, allt arbete omfattas av vår nöjd-kund-garanti och konsumenttjänstlagen. Fel som beror på vårt arbete åtgärdar vi kostnadsfritt.",
        keywords: &["garanti", "reklamation", "fel", "nöjd"],
    },
    FaqEntry {
        question: "Är era hantverkare behöriga och försäkrade?",
        answer: "Alla våra elektriker är auktoriserade och våra VVS-montörer är certifierade enligt Säker Vatten. Samtliga uppdrag täcks av ansvarsförsäkring.",
        keywords: &["behörig", "behöriga", "certifierad", "auktoriserad", "försäkring", "försäkrade", "säker"],
    },
    FaqEntry {
        question: "Hur betalar jag?",
        answer: "Du betalar mot faktura med 30 dagars betalningstid efter utfört arbete. ROT- eller RUT-avdraget dras direkt på fakturan.",
        keywords: &["betala", "betalning", "faktura", "swish", "kort"],
    },
    FaqEntry {
        question: "Kan jag avboka eller ändra min tid?",
        answer: "Ja, du kan avboka eller omboka kostnadsfritt fram till 24 timmar före avtalad tid.",
        keywords: &["avboka", "avbokning", "omboka", "ändra", "ombokning"],
    },
    FaqEntry {
        question: "Ingår material i priset?",
        answer: "Våra priser avser arbete. Material debiteras separat till inköpspris och specificeras i offerten.",
        keywords: &["material", "ingår", "inköp"],
    },
    FaqEntry {
        question: "Jobbar ni på helger och kvällar?",
        answer: "Ordinarie uppdrag utförs vardagar 07-17. Akuta ärenden hanterar vi även kvällar och helger.",
        keywords: &["helg", "helger", "helgen", "kväll", "kvällar", "lördag", "söndag", "öppettider"],
    },
];

/// Regions listed by the coverage policy item.
pub const COVERAGE_REGIONS: &[&str] = &["Stockholm", "Göteborg", "Malmö", "Uppsala"];
