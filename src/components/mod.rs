//! Leptos component tree: header/tabs plus the recycler and assistant views.

pub mod chat_panel;
pub mod header;
pub mod inventory_form;
pub mod plan_detail;
pub mod recycler;
pub mod suggestion_grid;
