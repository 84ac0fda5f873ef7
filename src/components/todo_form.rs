//! Todo Form Component
//!
//! Description and location inputs for adding a todo.

use leptos::prelude::*;

use crate::config::use_widget_config;
use crate::draft::EntryDraft;
use crate::models::NewTodo;

/// Form that hands each accepted submission to `on_add`
#[component]
pub fn TodoForm(#[prop(into)] on_add: Callback<NewTodo>) -> impl IntoView {
    let placeholder = use_widget_config().placeholder_location;
    let (draft, set_draft) = signal(EntryDraft::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        set_draft.update(|d| accepted = d.submit(&placeholder));
        match accepted {
            Some(todo) => on_add.run(todo),
            None => log::debug!("[FORM] Ignored submit with empty description"),
        }
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <label class="form-title"><b>"Add Todo"</b></label>
            <div class="form-row">
                <b>"ToDo:"</b>
                <input
                    type="text"
                    class="input"
                    placeholder="Add new todo"
                    prop:value=move || draft.with(|d| d.value.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.value = value);
                    }
                />
            </div>
            <div class="form-row">
                <b>"Where:"</b>
                <input
                    type="text"
                    class="input"
                    placeholder="Add best location"
                    prop:value=move || draft.with(|d| d.location.clone())
                    on:input=move |ev| {
                        let location = event_target_value(&ev);
                        set_draft.update(|d| d.location = location);
                    }
                />
            </div>
            <button type="submit" class="submit-btn">"Submit"</button>
        </form>
    }
}
