//! DiscoveryChat - Phase 1 conversation controller
//!
//! Turns free-text answers into store mutations. Replies are static and
//! appended immediately; there is no language understanding here.

use crate::storage::SlotStorage;
use crate::store::AgentSpecStore;
use shared::{section_name, ChatMessage, IdentityPatch, SECTION_COUNT};
use tracing::debug;
use uuid::Uuid;

/// Static acknowledgement sent after every user answer
pub const BOT_ACKNOWLEDGEMENT: &str = "Got it! Let's move on to the next section.";

/// Messages produced by one call to [`DiscoveryChat::send`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub user_message_id: String,
    pub bot_message_id: String,
    /// The answer was taken as the agent's name
    pub named_agent: bool,
}

/// Chat controller bound to a store for the duration of an interaction
pub struct DiscoveryChat<'a, S: SlotStorage> {
    store: &'a mut AgentSpecStore<S>,
}

impl<'a, S: SlotStorage> DiscoveryChat<'a, S> {
    pub fn new(store: &'a mut AgentSpecStore<S>) -> Self {
        Self { store }
    }

    /// Current section number (1-based)
    pub fn current_section(&self) -> u8 {
        self.store.state().phase1.current_section
    }

    /// Name of the current section, if in range
    pub fn current_section_name(&self) -> Option<&'static str> {
        section_name(self.current_section())
    }

    /// Share of sections reached, 0..=100
    pub fn progress_percent(&self) -> u8 {
        let section = self.current_section().min(SECTION_COUNT) as u32;
        (section * 100 / SECTION_COUNT as u32) as u8
    }

    /// Record a user answer and the bot's reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(&mut self, input: &str) -> Option<Exchange> {
        let answer = input.trim();
        if answer.is_empty() {
            return None;
        }

        let user_message_id = Uuid::new_v4().to_string();
        self.store
            .add_message(ChatMessage::user(user_message_id.clone(), answer));

        let named_agent =
            self.current_section() == 1 && self.store.agent_spec().identity.name.is_empty();
        if named_agent {
            self.store.update_identity(IdentityPatch::new().name(answer));
        }

        let bot_message_id = Uuid::new_v4().to_string();
        self.store
            .add_message(ChatMessage::bot(bot_message_id.clone(), BOT_ACKNOWLEDGEMENT));

        debug!(section = self.current_section(), named_agent, "Discovery answer recorded");

        Some(Exchange {
            user_message_id,
            bot_message_id,
            named_agent,
        })
    }

    /// Move to the next section, stopping at Review. Reaching Review
    /// marks discovery complete. Returns the new section.
    pub fn advance_section(&mut self) -> u8 {
        let next = self.current_section().saturating_add(1).min(SECTION_COUNT);
        if next != self.current_section() {
            self.store.set_current_section(next);
        }
        if next == SECTION_COUNT && !self.store.state().phase1.is_complete {
            self.store.set_discovery_complete(true);
        }
        next
    }
}
