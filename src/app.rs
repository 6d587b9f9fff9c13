//! Cloud To-Do Frontend App
//!
//! Router shell with the navbar and the two task views.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{AddTask, Home, NavBar};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <NavBar />
                <main class="container">
                    <Routes fallback=|| view! { <p>"Page not found."</p> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/add-task") view=AddTask />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
