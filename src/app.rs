//! Todo Widget App
//!
//! Root container: owns the todo store and routes every mutation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoRow};
use crate::config::WidgetConfig;
use crate::models::NewTodo;
use crate::store::{
    store_add_todo, store_counts, store_mark_todo, store_records, store_remove_todo,
    store_snapshot, TodoState,
};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let store = Store::new(TodoState::from_config(&config));
    let title = config.title.clone();
    log::info!("[APP] Started with {} seeded todos", config.seed.len());

    // Provide config to all children
    provide_context(config);

    let on_add = Callback::new(move |todo: NewTodo| {
        let id = store_add_todo(&store, todo);
        log::info!("[APP] Added todo #{}", id);
        log::debug!("[APP] Todos: {}", store_snapshot(&store));
    });

    let on_mark = Callback::new(move |id: u32| match store_mark_todo(&store, id) {
        Ok(()) => log::info!("[APP] Marked todo #{} done", id),
        Err(e) => log::warn!("[APP] Mark failed: {}", e),
    });

    let on_remove = Callback::new(move |id: u32| match store_remove_todo(&store, id) {
        Ok(removed) => log::info!("[APP] Removed todo #{} ({})", id, removed.text),
        Err(e) => log::warn!("[APP] Remove failed: {}", e),
    });

    view! {
        <div class="app">
            <div class="container">
                <h1 class="app-title">{title}</h1>

                <TodoForm on_add=on_add />

                <div class="todo-list">
                    <p class="todo-columns">
                        <span>"Todo"</span>
                        <span>"Where"</span>
                    </p>
                    // Keyed on done state too, so a marked row re-renders
                    <For
                        each=move || store_records(&store)
                        key=|todo| (todo.id, todo.is_done)
                        children=move |todo| {
                            view! { <TodoRow todo=todo on_mark=on_mark on_remove=on_remove /> }
                        }
                    />
                </div>

                <p class="todo-count">
                    {move || {
                        let (total, done) = store_counts(&store);
                        format!("{} todos, {} done", total, done)
                    }}
                </p>
            </div>
        </div>
    }
}
