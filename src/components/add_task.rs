//! Add Task View
//!
//! Form for creating a new task. The status message stays visible until the
//! next submit attempt.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::auth;
use crate::models::NewTask;

#[component]
pub fn AddTask() -> impl IntoView {
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (priority, set_priority) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let description_value = description.get();
        if description_value.trim().is_empty() {
            set_message.set("Description is required.".to_string());
            return;
        }
        let due_date_value = due_date.get();
        let priority_value = priority.get();
        let category_value = category.get();

        spawn_local(async move {
            let Some(token) = auth::auth_token().await else {
                let _ = set_message.try_set("Unable to fetch auth token.".to_string());
                return;
            };
            let body = NewTask {
                description: &description_value,
                due_date: &due_date_value,
                priority: &priority_value,
                category: &category_value,
            };
            match api::create_task(&token, &body).await {
                Ok(resp) => {
                    let text = resp
                        .message
                        .unwrap_or_else(|| "Task added successfully!".to_string());
                    let _ = set_message.try_set(text);
                    // Clear the form after a successful submission.
                    let _ = set_description.try_set(String::new());
                    let _ = set_due_date.try_set(String::new());
                    let _ = set_priority.try_set(String::new());
                    let _ = set_category.try_set(String::new());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error adding task: {err}").into());
                    let _ = set_message.try_set("Error adding task.".to_string());
                }
            }
        });
    };

    view! {
        <div class="card">
            <h2>"Add a New Task"</h2>
            <Show when=move || !message.get().is_empty()>
                <div class="alert">{move || message.get()}</div>
            </Show>
            <form on:submit=submit>
                <div class="form-group">
                    <label>"Description"</label>
                    <input
                        type="text"
                        placeholder="Enter task description"
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_description.set(input.value());
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Due Date"</label>
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_due_date.set(input.value());
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Priority"</label>
                    <select
                        prop:value=move || priority.get()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_priority.set(select.value());
                        }
                    >
                        <option value="">"Select Priority"</option>
                        <option value="Low">"Low"</option>
                        <option value="Normal">"Normal"</option>
                        <option value="High">"High"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>"Category"</label>
                    <input
                        type="text"
                        placeholder="Enter category (e.g., Work, Personal)"
                        prop:value=move || category.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_category.set(input.value());
                        }
                    />
                </div>
                <button type="submit" class="primary">"Add Task"</button>
            </form>
        </div>
    }
}
