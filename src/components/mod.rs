//! UI Components
//!
//! Leptos components for the to-do views.

mod add_task;
mod home;
mod nav_bar;
mod update_modal;

pub use add_task::AddTask;
pub use home::Home;
pub use nav_bar::NavBar;
pub use update_modal::UpdateTaskModal;
