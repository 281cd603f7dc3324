//! # Agent Builder Store
//!
//! Single source of truth for the agent specification and the wizard state.
//!
//! ## Components
//!
//! - `AgentSpecStore` - Mutators, observers, export and slot persistence
//! - `SlotStorage` - Key-value slot port with file and in-memory adapters
//! - `PersistedState` - Versioned on-disk document and its migrations
//! - `DiscoveryChat` - Phase 1 chat controller
//! - `ArchitectureDiagram` - Phase 2 node projection of a specification

pub mod state;
pub mod storage;
pub mod persisted;
pub mod store;
pub mod discovery;
pub mod diagram;

pub use state::BuilderState;
pub use storage::{FileSlotStorage, MemorySlotStorage, SlotStorage};
pub use persisted::{PersistedState, CURRENT_SCHEMA_VERSION};
pub use store::{AgentSpecStore, LoadOutcome, SubscriptionId};
pub use discovery::{DiscoveryChat, Exchange};
pub use diagram::{ArchitectureDiagram, DiagramNode, DiagramNodeKind};
