//! Loading and mutating the to-do list from the API.

use web_types::{Todo, UpdateTodoRequest};
use yew::prelude::*;

use crate::api;

/// Which list to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoSource {
    Active,
    Trashed,
}

pub struct UseTodosHandle {
    pub todos: UseStateHandle<Vec<Todo>>,
    pub loading: UseStateHandle<bool>,
    /// Fetch the list again.
    pub reload: Callback<()>,
}

#[hook]
pub fn use_todos(source: TodoSource) -> UseTodosHandle {
    let todos = use_state(Vec::<Todo>::new);
    let loading = use_state(|| true);
    let generation = use_state(|| 0u32);

    {
        let todos = todos.clone();
        let loading = loading.clone();

        use_effect_with((source, *generation), move |&(source, _)| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match source {
                    TodoSource::Active => api::fetch_todos().await,
                    TodoSource::Trashed => api::fetch_trashed().await,
                };
                match result {
                    Ok(data) => todos.set(data),
                    Err(e) => api::log_error("Failed to fetch todos", &e),
                }
                loading.set(false);
            });
        });
    }

    let reload = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(generation.wrapping_add(1)))
    };

    UseTodosHandle {
        todos,
        loading,
        reload,
    }
}

/// Callbacks shared by the list pages.
#[derive(Clone, PartialEq)]
pub struct TodoActions {
    pub add: Callback<String>,
    pub toggle: Callback<Todo>,
    pub rename: Callback<(Todo, String)>,
    pub trash: Callback<i64>,
}

#[hook]
pub fn use_todo_actions(reload: Callback<()>) -> TodoActions {
    let add = {
        let reload = reload.clone();
        Callback::from(move |title: String| {
            api::spawn_mutation("Failed to create todo", api::create_todo(title), reload.clone());
        })
    };

    let toggle = {
        let reload = reload.clone();
        Callback::from(move |todo: Todo| {
            let body = UpdateTodoRequest {
                title: todo.title,
                completed: !todo.completed,
            };
            api::spawn_mutation(
                "Failed to update todo",
                api::update_todo(todo.id, body),
                reload.clone(),
            );
        })
    };

    let rename = {
        let reload = reload.clone();
        Callback::from(move |(todo, title): (Todo, String)| {
            let body = UpdateTodoRequest {
                title,
                completed: todo.completed,
            };
            api::spawn_mutation(
                "Failed to rename todo",
                api::update_todo(todo.id, body),
                reload.clone(),
            );
        })
    };

    let trash = Callback::from(move |id: i64| {
        api::spawn_mutation("Failed to delete todo", api::trash_todo(id), reload.clone());
    });

    TodoActions {
        add,
        toggle,
        rename,
        trash,
    }
}
