//! Todo Row Component
//!
//! One record with mark and remove buttons.

use leptos::prelude::*;

use crate::models::TodoRecord;

#[component]
pub fn TodoRow(
    todo: TodoRecord,
    #[prop(into)] on_mark: Callback<u32>,
    #[prop(into)] on_remove: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let done = todo.is_done;

    view! {
        <div class=if done { "todo completed" } else { "todo" }>
            <span
                class="todo-text"
                style=if done { "text-decoration: line-through;" } else { "" }
            >
                {todo.text}
            </span>
            <span class="todo-location">{todo.location}</span>
            <div class="todo-actions">
                <button class="mark-btn" title="Mark done" on:click=move |_| on_mark.run(id)>"✓"</button>
                <button class="delete-btn" title="Remove" on:click=move |_| on_remove.run(id)>"✕"</button>
            </div>
        </div>
    }
}
