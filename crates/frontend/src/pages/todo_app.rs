//! Primary to-do list page.

use yew::prelude::*;

use crate::components::{Loading, NewTodo, TodoItem};
use crate::hooks::{TodoSource, use_todo_actions, use_todos};

/// To-do list page component.
#[function_component(TodoAppPage)]
pub fn todo_app_page() -> Html {
    let handle = use_todos(TodoSource::Active);
    let actions = use_todo_actions(handle.reload.clone());

    html! {
        <div>
            <h1>{"To-do List"}</h1>

            <div class="card">
                <NewTodo on_add={actions.add.clone()} />
            </div>

            if *handle.loading {
                <Loading />
            } else if handle.todos.is_empty() {
                <div class="card">
                    <p>{"Nothing to do."}</p>
                </div>
            } else {
                <ul class="todo-list">
                    { for handle.todos.iter().map(|todo| html! {
                        <TodoItem
                            key={todo.id}
                            todo={todo.clone()}
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
