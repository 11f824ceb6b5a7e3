//! To-do list row with inline editing.

use web_types::Todo;
use yew::prelude::*;

/// Properties for TodoItem component.
#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub todo: Todo,
    pub on_toggle: Callback<Todo>,
    pub on_rename: Callback<(Todo, String)>,
    pub on_delete: Callback<i64>,
}

/// A single to-do. Double click the title to edit it.
#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let editing = use_state(|| false);
    let draft = use_state(|| props.todo.title.clone());
    let todo = &props.todo;

    let on_toggle = {
        let todo = todo.clone();
        props.on_toggle.reform(move |_: Event| todo.clone())
    };

    let on_start_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let title = todo.title.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(title.clone());
            editing.set(true);
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let commit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let todo = todo.clone();
        let on_rename = props.on_rename.clone();
        Callback::from(move |_: ()| {
            editing.set(false);
            let title = draft.trim();
            if !title.is_empty() && title != todo.title {
                on_rename.emit((todo.clone(), title.to_string()));
            }
        })
    };

    let on_keydown = {
        let commit = commit.clone();
        let editing = editing.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => commit.emit(()),
            "Escape" => editing.set(false),
            _ => {}
        })
    };

    let on_delete = {
        let id = todo.id;
        props.on_delete.reform(move |_: MouseEvent| id)
    };

    let item_class = if todo.completed {
        "todo-item completed"
    } else {
        "todo-item"
    };

    html! {
        <li class={item_class}>
            <input type="checkbox" checked={todo.completed} onchange={on_toggle} />
            if *editing {
                <input
                    type="text"
                    class="todo-edit"
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    onblur={commit.reform(|_: FocusEvent| ())}
                />
            } else {
                <span class="todo-title" ondblclick={on_start_edit}>{ &todo.title }</span>
            }
            <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
        </li>
    }
}
