//! Filterable to-do list page.

use core_types::{TodoFilter, remaining};
use web_types::Todo;
use yew::prelude::*;

use crate::components::{Loading, NewTodo, TodoItem};
use crate::hooks::{TodoSource, use_todo_actions, use_todos};

/// Second to-do list with an All / Active / Completed filter.
#[function_component(TodoAppTwoPage)]
pub fn todo_app_two_page() -> Html {
    let handle = use_todos(TodoSource::Active);
    let actions = use_todo_actions(handle.reload.clone());
    let filter = use_state(TodoFilter::default);

    let visible: Vec<&Todo> = handle
        .todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .collect();
    let left = remaining(&handle.todos);

    html! {
        <div>
            <h1>{"To-do List Two"}</h1>

            <div class="card">
                <NewTodo on_add={actions.add.clone()} placeholder="Add another task" />
            </div>

            <div class="filter-bar">
                <span class="todo-count">
                    { format!("{left} item{} left", if left == 1 { "" } else { "s" }) }
                </span>
                { for TodoFilter::ALL.into_iter().map(|option| {
                    let class = if *filter == option { "btn btn-primary" } else { "btn btn-secondary" };
                    let filter = filter.clone();
                    html! {
                        <button class={class} onclick={Callback::from(move |_: MouseEvent| filter.set(option))}>
                            { option.label() }
                        </button>
                    }
                })}
            </div>

            if *handle.loading {
                <Loading />
            } else if visible.is_empty() {
                <div class="card">
                    <p>{ format!("No {} items.", filter.label().to_lowercase()) }</p>
                </div>
            } else {
                <ul class="todo-list">
                    { for visible.iter().map(|todo| html! {
                        <TodoItem
                            key={todo.id}
                            todo={(*todo).clone()}
                            on_toggle={actions.toggle.clone()}
                            on_rename={actions.rename.clone()}
                            on_delete={actions.trash.clone()}
                        />
                    })}
                </ul>
            }
        </div>
    }
}
