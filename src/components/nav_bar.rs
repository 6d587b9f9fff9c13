//! Navigation Bar
//!
//! Top chrome with brand and the two route links.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar-brand">"Cloud-Based To-Do List"</A>
            <div class="navbar-links">
                <A href="/">"Home"</A>
                <A href="/add-task">"Add Task"</A>
            </div>
        </nav>
    }
}
