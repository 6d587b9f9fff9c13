//! Update Task Modal
//!
//! Modal form over an editable copy of the selected task's fields. Submit and
//! cancel are owned by the parent; this component only edits the mirror.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::TaskUpdate;

#[component]
pub fn UpdateTaskModal(
    show: ReadSignal<bool>,
    draft: ReadSignal<TaskUpdate>,
    set_draft: WriteSignal<TaskUpdate>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <span class="modal-title">"Update Task"</span>
                        <button class="close-btn" on:click=move |_| on_cancel.run(())>"×"</button>
                    </div>
                    <form on:submit=submit>
                        <div class="modal-body">
                            <div class="form-group">
                                <label>"Description"</label>
                                <input
                                    type="text"
                                    required
                                    prop:value=move || draft.get().description
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        let value = input.value();
                                        set_draft.update(|d| d.description = value);
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label>"Due Date"</label>
                                <input
                                    type="date"
                                    prop:value=move || draft.get().due_date
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        let value = input.value();
                                        set_draft.update(|d| d.due_date = value);
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label>"Priority"</label>
                                <select
                                    prop:value=move || draft.get().priority
                                    on:change=move |ev| {
                                        let target = ev.target().unwrap();
                                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                        let value = select.value();
                                        set_draft.update(|d| d.priority = value);
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
                                    prop:value=move || draft.get().category
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        let value = input.value();
                                        set_draft.update(|d| d.category = value);
                                    }
                                />
                            </div>
                            <div class="form-group checkbox">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || draft.get().completed
                                        on:change=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                            let checked = input.checked();
                                            set_draft.update(|d| d.completed = checked);
                                        }
                                    />
                                    "Completed"
                                </label>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="secondary" on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary">"Update Task"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
