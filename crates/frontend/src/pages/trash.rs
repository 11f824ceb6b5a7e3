//! Trash page component.

use yew::prelude::*;

use crate::api;
use crate::components::Loading;
use crate::hooks::{TodoSource, use_todos};

/// Trashed items with restore and permanent delete.
#[function_component(TrashPage)]
pub fn trash_page() -> Html {
    let handle = use_todos(TodoSource::Trashed);

    let on_restore = {
        let reload = handle.reload.clone();
        Callback::from(move |id: i64| {
            api::spawn_mutation("Failed to restore todo", api::restore_todo(id), reload.clone());
        })
    };

    let on_purge = {
        let reload = handle.reload.clone();
        Callback::from(move |id: i64| {
            api::spawn_mutation(
                "Failed to permanently delete todo",
                api::purge_todo(id),
                reload.clone(),
            );
        })
    };

    html! {
        <div>
            <h1>{"Trash"}</h1>

            if *handle.loading {
                <Loading />
            } else if handle.todos.is_empty() {
                <div class="card">
                    <p>{"Trash is empty."}</p>
                </div>
            } else {
                <ul class="todo-list">
                    { for handle.todos.iter().map(|todo| {
                        let id = todo.id;
                        let deleted = todo
                            .deleted_at
                            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default();
                        html! {
                            <li key={id} class="todo-item trashed">
                                <span class="todo-title">{ &todo.title }</span>
                                <span class="text-secondary">{ deleted }</span>
                                <button class="btn btn-secondary" onclick={on_restore.reform(move |_: MouseEvent| id)}>
                                    {"Restore"}
                                </button>
                                <button class="btn btn-danger" onclick={on_purge.reform(move |_: MouseEvent| id)}>
                                    {"Delete forever"}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
