//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus implementations
//! - `memory` - In-process repositories

pub mod events;
pub mod memory;

pub use events::InMemoryEventBus;
pub use memory::InMemoryUserRepository;
