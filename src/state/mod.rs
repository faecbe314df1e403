//! Application state.
//!
//! Plain structs with named transition methods, provided to the component
//! tree as `RwSignal` contexts. Components never write fields directly; every
//! mutation goes through a transition so the state machine stays auditable
//! and natively testable.

pub mod chat;
pub mod inventory;
pub mod ui;
pub mod workshop;

pub use chat::{ChatMessage, ChatRole, ChatState};
pub use inventory::{InventoryState, Material, MaterialId};
pub use ui::{ActiveTab, UiState};
pub use workshop::{Difficulty, RecyclerView, WorkshopState};
