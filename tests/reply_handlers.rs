//! Reply texts, data and actions per intent.
//!
//! Each test drives one reply branch through a real session on the bundled
//! catalog with the clock pinned to a weekday morning.

use chrono::{TimeZone, Utc};
use std::sync::Arc;

use hemservice_assistant::adapters::{FixedClock, ScriptedAvailability};
use hemservice_assistant::config::AssistantConfig;
use hemservice_assistant::domain::catalog::ServiceCatalog;
use hemservice_assistant::domain::conversation::{ChatAction, ChatReply, LeadUpdate, ReplyData};
use hemservice_assistant::domain::foundation::SessionId;
use hemservice_assistant::domain::intent::{IntentTuning, SlotName};
use hemservice_assistant::domain::pricing::{DeductionKind, PriceBreakdown, TaxPolicy};
use hemservice_assistant::{Assistant, ConversationManager};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn assistant() -> Assistant {
    Assistant::new(
        ServiceCatalog::bundled().expect("bundled catalog"),
        TaxPolicy::default(),
        IntentTuning::default(),
        AssistantConfig::default(),
    )
    .with_availability(Arc::new(ScriptedAvailability::always_free()))
    // Tuesday 3 June 2025, 10:00 in Stockholm
    .with_clock(Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2025, 6, 3, 8, 0, 0).unwrap(),
    )))
}

fn session() -> ConversationManager {
    assistant().open_session(SessionId::new())
}

fn breakdown(reply: &ChatReply) -> &PriceBreakdown {
    match reply.data {
        Some(ReplyData::PriceBreakdown(ref breakdown)) => breakdown,
        ref other => panic!("expected a price breakdown, got {:?}", other),
    }
}

// =============================================================================
// Service Requests
// =============================================================================

#[tokio::test]
async fn quantity_does_not_carry_over_to_another_service() {
    let mut chat = session();

    let reply = chat
        .process_message("Jag vill byta 6 spotlights i köket")
        .await
        .unwrap();
    assert_eq!(breakdown(&reply).quantity, 6);

    let reply = chat.process_message("Kan ni laga min toalett?").await.unwrap();
    let priced = breakdown(&reply);
    assert_eq!(priced.service.id, "vvs-toalett");
    assert_eq!(priced.quantity, 1);
    assert!(!reply.response.contains("6 st"), "{}", reply.response);
}

#[tokio::test]
async fn quantity_carries_over_for_the_same_service() {
    let mut chat = session();
    chat.select_service("el-spotlights", 6).await.unwrap();

    let reply = chat
        .process_message("Jag vill byta spotlights i taket")
        .await
        .unwrap();

    let priced = breakdown(&reply);
    assert_eq!(priced.service.id, "el-spotlights");
    assert_eq!(priced.quantity, 6);
}

// =============================================================================
// Pricing
// =============================================================================

#[tokio::test]
async fn price_question_without_selection_gives_hourly_range() {
    let mut chat = session();

    let reply = chat.process_message("Vad kostar det?").await.unwrap();

    assert!(
        reply.response.starts_with("Våra timpriser ligger mellan"),
        "{}",
        reply.response
    );
    assert!(reply.response.contains("Med ROT-avdrag får du 50%"));
    assert_eq!(reply.mode_change, None);
    assert_eq!(reply.data, None);
    assert!(reply.actions.is_empty());
}

#[tokio::test]
async fn price_question_after_selection_gives_breakdown() {
    let mut chat = session();
    chat.select_service("el-spotlights", 6).await.unwrap();

    let reply = chat.process_message("Vad kostar det?").await.unwrap();

    assert!(
        reply.response.starts_with("Prisuppgift för"),
        "{}",
        reply.response
    );
    assert!(reply.response.contains("• Ordinarie pris:"));
    assert!(reply.response.contains("• Med ROT-avdrag:"));
    assert_eq!(breakdown(&reply).quantity, 6);
    assert!(reply.actions.contains(&ChatAction::ShowCalculator));
}

// =============================================================================
// ROT and RUT
// =============================================================================

#[tokio::test]
async fn rot_question_returns_the_rot_rule() {
    let assistant = assistant();
    let rule = assistant
        .knowledge
        .get_rot_rut_info(DeductionKind::Rot)
        .unwrap()
        .content
        .clone();
    let mut chat = assistant.open_session(SessionId::new());

    let reply = chat
        .process_message("Gäller ROT-avdrag för badrumsrenovering?")
        .await
        .unwrap();

    assert!(reply.response.starts_with(&rule), "{}", reply.response);
    assert!(reply
        .response
        .ends_with("Vi sköter ansökan åt dig och drar av beloppet direkt på fakturan."));
}

#[tokio::test]
async fn rut_question_returns_the_rut_rule() {
    let assistant = assistant();
    let rule = assistant
        .knowledge
        .get_rot_rut_info(DeductionKind::Rut)
        .unwrap()
        .content
        .clone();
    let mut chat = assistant.open_session(SessionId::new());

    let reply = chat
        .process_message("Får jag RUT-avdrag för städning?")
        .await
        .unwrap();

    assert!(reply.response.starts_with(&rule), "{}", reply.response);
}

#[tokio::test]
async fn question_naming_both_schemes_compares_them() {
    let mut chat = session();

    let reply = chat
        .process_message("Rot eller rut, vilket avdrag gäller?")
        .await
        .unwrap();

    assert!(reply
        .response
        .starts_with("Det finns två skatteavdrag för tjänster i hemmet:"));
    assert!(reply.response.contains("• ROT: 50%"));
    assert!(reply.response.contains("• RUT: 50%"));
    assert!(reply.response.contains("högst 75 000 kr"));
    assert_eq!(reply.data, None);
}

// =============================================================================
// Emergency
// =============================================================================

#[tokio::test]
async fn emergency_with_known_phone_promises_a_callback() {
    let mut chat = session();
    let lead = chat
        .update_lead(LeadUpdate::default().with_phone("070-987 65 43"))
        .await;
    let phone = lead.phone.clone().unwrap();

    let reply = chat
        .process_message("Akut! Vattnet läcker i badrummet")
        .await
        .unwrap();

    assert!(reply.response.contains(&phone), "{}", reply.response);
    assert!(reply.response.contains("inom 15 minuter"));
    assert!(reply.response.contains("070-123 45 67"));
    assert_eq!(reply.data, None);
    assert_eq!(
        reply.actions,
        vec![ChatAction::HighlightPhone {
            phone: "070-123 45 67".to_string()
        }]
    );
}

#[tokio::test]
async fn emergency_without_phone_asks_for_one() {
    let mut chat = session();

    let reply = chat
        .process_message("Akut! Vattnet läcker i badrummet")
        .await
        .unwrap();

    assert_eq!(
        reply.data,
        Some(ReplyData::MissingFields {
            fields: vec![SlotName::Phone]
        })
    );
    assert!(reply.actions.contains(&ChatAction::CallPhone {
        phone: "070-123 45 67".to_string()
    }));
}

// =============================================================================
// FAQ and Handoff
// =============================================================================

#[tokio::test]
async fn faq_hit_returns_the_answer() {
    let mut chat = session();

    let reply = chat.process_message("Har ni garanti?").await.unwrap();

    match reply.data {
        Some(ReplyData::Faq {
            ref question,
            ref answer,
        }) => {
            assert_eq!(question, "Har ni garanti på arbetet?");
            assert_eq!(&reply.response, answer);
        }
        ref other => panic!("expected an FAQ answer, got {:?}", other),
    }
}

#[tokio::test]
async fn faq_miss_describes_the_company() {
    let mut chat = session();

    let reply = chat.process_message("Info?").await.unwrap();

    assert!(reply.response.starts_with("Lite om oss:"), "{}", reply.response);
    assert!(reply
        .response
        .contains("Stockholm, Göteborg, Malmö, Uppsala"));
    assert_eq!(reply.data, None);
}

#[tokio::test]
async fn handoff_lists_every_contact_channel() {
    let mut chat = session();

    let reply = chat
        .process_message("Jag vill prata med en människa")
        .await
        .unwrap();

    assert!(reply.response.contains("• Telefon: 08-123 456 78"));
    assert!(reply.response.contains("• WhatsApp: https://wa.me/46701234567"));
    assert!(reply.response.contains("• E-post: info@hemservice.se"));
    assert!(reply.response.ends_with("Vi svarar inom 2 timmar på vardagar."));
    assert_eq!(
        reply.data,
        Some(ReplyData::Contact {
            phone: "08-123 456 78".to_string(),
            email: "info@hemservice.se".to_string(),
            whatsapp_url: "https://wa.me/46701234567".to_string(),
            response_time: "inom 2 timmar på vardagar".to_string(),
        })
    );
    assert_eq!(
        reply.actions,
        vec![
            ChatAction::CallPhone {
                phone: "08-123 456 78".to_string()
            },
            ChatAction::OpenWhatsapp {
                url: "https://wa.me/46701234567".to_string()
            },
            ChatAction::SendEmail {
                email: "info@hemservice.se".to_string()
            },
        ]
    );
}
