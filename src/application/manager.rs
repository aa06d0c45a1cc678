//! Per-session conversation orchestration.

use super::assistant::Assistant;
use super::errors::ConversationError;
use super::handlers::{self, Turn};
use crate::domain::conversation::{
    Attachment, ChatAction, ChatMode, ChatReply, ChatTurnProcessed, ConversationState, LeadData,
    LeadUpdate, Message, SessionSnapshot,
};
use crate::domain::foundation::{EventEnvelope, EventId, SessionId, StateMachine};
use crate::domain::intent::{ChatIntent, SlotName, SlotValue};

/// Owns the dialogue state of one chat session.
///
/// Never share a manager between sessions; open one per session through
/// [`Assistant::open_session`] or [`Assistant::resume_session`].
pub struct ConversationManager {
    assistant: Assistant,
    session_id: SessionId,
    state: ConversationState,
    messages: Vec<Message>,
}

impl ConversationManager {
    pub fn new(assistant: Assistant, session_id: SessionId) -> Self {
        Self {
            assistant,
            session_id,
            state: ConversationState::default(),
            messages: Vec::new(),
        }
    }

    /// Restores the session from the store.
    ///
    /// Falls back to an empty conversation when nothing is stored or the
    /// stored blob cannot be read.
    pub async fn resume(assistant: Assistant, session_id: SessionId) -> Self {
        let mut manager = Self::new(assistant, session_id);
        let key = manager.storage_key();

        match manager.assistant.store.get(&key).await {
            Ok(Some(raw)) => match SessionSnapshot::decode(&raw) {
                Ok(snapshot) => {
                    tracing::debug!(
                        session_id = %session_id,
                        messages = snapshot.messages.len(),
                        "Restored conversation"
                    );
                    manager.state = snapshot.state;
                    manager.messages = snapshot.messages;
                }
                Err(e) => tracing::warn!("Discarding unreadable session {}: {}", session_id, e),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to load session {}: {}", session_id, e),
        }

        manager
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Processes one user utterance.
    pub async fn process_message(&mut self, text: &str) -> Result<ChatReply, ConversationError> {
        self.process_message_with_attachments(text, Vec::new()).await
    }

    /// Processes one user utterance carrying image attachments.
    ///
    /// Rejects empty and over-long input; everything else yields a reply.
    /// Persistence and analytics failures are logged and never fail the turn.
    pub async fn process_message_with_attachments(
        &mut self,
        text: &str,
        attachments: Vec<Attachment>,
    ) -> Result<ChatReply, ConversationError> {
        let text = text.trim();
        if text.is_empty() && attachments.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }
        let max = self.assistant.settings.max_message_length;
        let length = text.chars().count();
        if length > max {
            return Err(ConversationError::MessageTooLong { length, max });
        }

        let assistant = self.assistant.clone();
        let now = assistant.clock.timestamp();

        self.state
            .refresh_context(&self.messages, text, assistant.settings.context_window);
        let intent_context = self.state.context.intent_context(assistant.clock.local_hour());
        let intent = assistant.engine.detect_intent(text, &intent_context);

        self.state.merge_intent(&intent);
        let user_message = Message::user(text, now)
            .with_intent(intent.kind)
            .with_attachments(attachments);
        let correlation_id = user_message.id.to_string();
        self.messages.push(user_message);

        let mut reply = handlers::dispatch(Turn {
            assistant: &assistant,
            state: &mut self.state,
            message: text,
            intent: &intent,
        })
        .await;
        reply.mode_change = reply.mode_change.and_then(|mode| self.apply_mode(mode));

        tracing::info!(
            session_id = %self.session_id,
            intent = %intent.kind,
            confidence = intent.confidence,
            mode = %self.state.mode,
            "Processed chat turn"
        );

        self.push_bot_message(&reply);
        self.persist().await;
        self.publish_turn(&intent, &correlation_id).await;

        Ok(reply)
    }

    /// The calculator panel picks a service.
    pub async fn select_service(
        &mut self,
        service_id: &str,
        quantity: u32,
    ) -> Result<ChatReply, ConversationError> {
        let item = self
            .assistant
            .knowledge
            .get_service(service_id)
            .ok_or_else(|| ConversationError::UnknownService(service_id.to_string()))?;
        let service = item
            .priced_service()
            .ok_or_else(|| ConversationError::UnknownService(service_id.to_string()))?;
        let category = item.category.clone();

        self.state
            .fill_slot(SlotName::ServiceType, SlotValue::text(category), 1.0, true);
        self.state
            .fill_slot(SlotName::Quantity, SlotValue::Number(quantity.max(1)), 1.0, false);
        let breakdown = self
            .state
            .select_service(service, quantity, &self.assistant.policy)
            .clone();

        let mut reply = handlers::calculator_reply(handlers::price_lines(&breakdown), breakdown);
        reply.mode_change = reply.mode_change.and_then(|mode| self.apply_mode(mode));

        self.push_bot_message(&reply);
        self.persist().await;
        Ok(reply)
    }

    /// "Book now" from the calculator: opens the lead form.
    pub async fn request_booking_form(&mut self) -> Result<ChatReply, ConversationError> {
        self.require_reachable(ChatMode::Form)?;

        let mut reply = handlers::missing_contact_reply(&self.state);
        if self.state.has_booking_contact() {
            reply = ChatReply::text(
                "Kontrollera dina kontaktuppgifter och gå vidare för att välja en tid.",
            )
            .with_mode(ChatMode::Form)
            .with_action(ChatAction::ShowForm);
        }
        reply.mode_change = reply.mode_change.and_then(|mode| self.apply_mode(mode));

        self.push_bot_message(&reply);
        self.persist().await;
        Ok(reply)
    }

    /// Writes a lead form submission into the conversation.
    pub async fn update_lead(&mut self, update: LeadUpdate) -> LeadData {
        self.state.apply_lead_update(&update);
        self.persist().await;
        self.state.lead_data.clone()
    }

    /// Form submitted: offers appointments once phone and location are known.
    pub async fn continue_to_booking(&mut self) -> Result<ChatReply, ConversationError> {
        self.require_reachable(ChatMode::Booking)?;

        let mut reply = if self.state.has_booking_contact() {
            let assistant = self.assistant.clone();
            handlers::offer_appointments(&assistant, &mut self.state).await
        } else {
            handlers::missing_contact_reply(&self.state)
        };
        reply.mode_change = reply.mode_change.and_then(|mode| self.apply_mode(mode));

        self.push_bot_message(&reply);
        self.persist().await;
        Ok(reply)
    }

    /// Confirms one of the offered appointment slots.
    pub async fn confirm_booking(&mut self, slot_id: &str) -> Result<ChatReply, ConversationError> {
        let slot = self
            .state
            .booking_data
            .find_offered(slot_id)
            .cloned()
            .ok_or_else(|| ConversationError::UnknownBookingSlot(slot_id.to_string()))?;

        self.state.booking_data.confirmed_slot = Some(slot.clone());
        let reply = handlers::confirmation(&self.state, slot);

        tracing::info!(
            session_id = %self.session_id,
            slot = %slot_id,
            "Booking confirmed"
        );

        self.push_bot_message(&reply);
        self.persist().await;
        Ok(reply)
    }

    /// Resets to an empty chat and removes the stored session.
    pub async fn clear_conversation(&mut self) {
        self.state = ConversationState::default();
        self.messages.clear();

        let key = self.storage_key();
        if let Err(e) = self.assistant.store.clear(&key).await {
            tracing::warn!("Failed to clear session {}: {}", self.session_id, e);
        }
    }

    fn storage_key(&self) -> String {
        self.assistant.settings.storage_key(self.session_id)
    }

    fn apply_mode(&mut self, requested: ChatMode) -> Option<ChatMode> {
        let from = self.state.mode;
        let changed = self.state.apply_mode(requested);
        if let Some(to) = changed {
            tracing::info!(session_id = %self.session_id, %from, %to, "Mode changed");
        }
        changed
    }

    /// Errors when `target` lies behind the current mode.
    fn require_reachable(&self, target: ChatMode) -> Result<(), ConversationError> {
        let current = self.state.mode;
        if current == target || current.can_transition_to(&target) {
            Ok(())
        } else {
            Err(ConversationError::InvalidModeTransition {
                from: current,
                to: target,
            })
        }
    }

    fn push_bot_message(&mut self, reply: &ChatReply) {
        let message = Message::bot(reply.response.clone(), self.assistant.clock.timestamp())
            .with_metadata(reply.data.clone());
        self.messages.push(message);
    }

    async fn persist(&self) {
        let snapshot = SessionSnapshot::capture(
            &self.state,
            &self.messages,
            self.assistant.settings.persisted_messages,
        );
        let raw = match snapshot.encode() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to encode session {}: {}", self.session_id, e);
                return;
            }
        };

        if let Err(e) = self.assistant.store.set(&self.storage_key(), &raw).await {
            tracing::warn!("Failed to persist session {}: {}", self.session_id, e);
        }
    }

    async fn publish_turn(&self, intent: &ChatIntent, correlation_id: &str) {
        let event = ChatTurnProcessed {
            event_id: EventId::new(),
            session_id: self.session_id,
            intent: intent.kind,
            confidence: intent.confidence,
            slots_filled: !intent.slots.is_empty(),
            mode: self.state.mode,
            occurred_at: self.assistant.clock.timestamp(),
        };

        let envelope = match EventEnvelope::from_event(&event) {
            Ok(envelope) => envelope.with_correlation_id(correlation_id),
            Err(e) => {
                tracing::warn!("Failed to serialize turn event: {}", e);
                return;
            }
        };

        if let Err(e) = self.assistant.publisher.publish(envelope).await {
            tracing::warn!("Failed to publish turn event: {}", e);
        }
    }
}
