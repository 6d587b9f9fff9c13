//! Home View
//!
//! Welcome header with sign-out, the task table, a transient alert, and the
//! update modal wiring. State here is private to the view; the list is
//! re-fetched from the server on every mount.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::components::UpdateTaskModal;
use crate::models::{display_or_na, status_label, Task, TaskUpdate};
use crate::tasklist;

/// How long a transient alert stays on screen.
const ALERT_MS: u32 = 3000;

#[component]
pub fn Home() -> impl IntoView {
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (user_name, set_user_name) = signal(String::new());
    let (auth_token, set_auth_token) = signal::<Option<String>>(None);
    let (alert, set_alert) = signal(String::new());
    let (show_modal, set_show_modal) = signal(false);
    let (selected_task, set_selected_task) = signal::<Option<Task>>(None);
    let (draft, set_draft) = signal(TaskUpdate::default());

    // Transient alert. The pending clear is never cancelled, so a rapid
    // follow-up message can be wiped early by the previous timer.
    let flash = move |text: &str| {
        set_alert.set(text.to_string());
        spawn_local(async move {
            TimeoutFuture::new(ALERT_MS).await;
            let _ = set_alert.try_set(String::new());
        });
    };

    let load_tasks = move |token: String| {
        spawn_local(async move {
            match api::list_tasks(&token).await {
                Ok(loaded) => {
                    let _ = set_tasks.try_set(loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching tasks: {err}").into());
                }
            }
        });
    };

    // Initialize: resolve the token and fetch the list, then resolve the
    // display name. The two resolutions fail independently.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(token) = auth::auth_token().await {
                let _ = set_auth_token.try_set(Some(token.clone()));
                load_tasks(token);
            }
            let name = auth::current_user_name().await;
            let _ = set_user_name.try_set(name);
        });
    });

    let handle_sign_out = move |_| {
        spawn_local(async move {
            auth::sign_out_and_reload().await;
        });
    };

    let delete_task = move |task_id: String| {
        let Some(token) = auth_token.get() else {
            web_sys::console::error_1(&"No auth token available.".into());
            return;
        };
        spawn_local(async move {
            match api::delete_task(&token, &task_id).await {
                Ok(()) => {
                    flash("Task deleted successfully!");
                    let _ = set_tasks.try_update(|tasks| tasklist::remove_by_id(tasks, &task_id));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error deleting task: {err}").into());
                    flash("Error deleting task.");
                }
            }
        });
    };

    // Seed the editable mirror from the selected task, then open the modal.
    let open_update_modal = move |task: Task| {
        set_draft.set(TaskUpdate::from_task(&task));
        set_selected_task.set(Some(task));
        set_show_modal.set(true);
    };

    let close_modal = move || {
        set_show_modal.set(false);
        set_selected_task.set(None);
    };

    let submit_update = move || {
        let (Some(token), Some(task)) = (auth_token.get(), selected_task.get()) else {
            web_sys::console::error_1(&"No auth token or selected task available.".into());
            return;
        };
        let update = draft.get();
        spawn_local(async move {
            match api::update_task(&token, &task.id, &update).await {
                Ok(resp) => {
                    // Authoritative refresh, plus an in-place patch of the
                    // returned row.
                    match api::list_tasks(&token).await {
                        Ok(loaded) => {
                            let _ = set_tasks.try_set(loaded);
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Error fetching tasks: {err}").into(),
                            );
                        }
                    }
                    let text = resp
                        .message
                        .clone()
                        .unwrap_or_else(|| "Task updated successfully!".to_string());
                    flash(&text);
                    let _ = set_tasks.try_update(|tasks| tasklist::replace_by_id(tasks, &resp.task));
                    let _ = set_show_modal.try_set(false);
                    let _ = set_selected_task.try_set(None);
                }
                Err(err) => {
                    // Modal stays open so the user can retry or cancel.
                    web_sys::console::error_1(&format!("Error updating task: {err}").into());
                    flash("Error updating task.");
                }
            }
        });
    };

    view! {
        <div>
            <div class="card user-card">
                <h2>{move || format!("Welcome, {}!", user_name.get())}</h2>
                <button class="danger" on:click=handle_sign_out>"Sign Out"</button>
            </div>

            <Show when=move || !alert.get().is_empty()>
                <div class="alert dismissible">
                    {move || alert.get()}
                    <button class="close-btn" on:click=move |_| set_alert.set(String::new())>
                        "×"
                    </button>
                </div>
            </Show>

            <div class="card">
                <h3>"Your Tasks"</h3>
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Description"</th>
                            <th>"Due Date"</th>
                            <th>"Priority"</th>
                            <th>"Category"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !tasks.get().is_empty()
                            fallback=|| view! {
                                <tr>
                                    <td colspan="6" class="centered">"No tasks available."</td>
                                </tr>
                            }
                        >
                            <For
                                each=move || tasks.get()
                                key=|task| task.id.clone()
                                children=move |task| {
                                    let delete_id = task.id.clone();
                                    let task_for_update = task.clone();
                                    view! {
                                        <tr>
                                            <td>{task.description.clone()}</td>
                                            <td>{display_or_na(&task.due_date).to_string()}</td>
                                            <td>{display_or_na(&task.priority).to_string()}</td>
                                            <td>{display_or_na(&task.category).to_string()}</td>
                                            <td>{status_label(task.completed)}</td>
                                            <td>
                                                <button
                                                    class="warning"
                                                    on:click=move |_| open_update_modal(task_for_update.clone())
                                                >
                                                    "Update"
                                                </button>
                                                <button
                                                    class="danger"
                                                    on:click=move |_| delete_task(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>

            <UpdateTaskModal
                show=show_modal
                draft=draft
                set_draft=set_draft
                on_cancel=Callback::new(move |()| close_modal())
                on_submit=Callback::new(move |()| submit_update())
            />
        </div>
    }
}
