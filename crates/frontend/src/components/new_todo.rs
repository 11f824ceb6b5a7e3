//! Input for adding a to-do.

use yew::prelude::*;

/// Properties for NewTodo component.
#[derive(Properties, PartialEq)]
pub struct NewTodoProps {
    /// Receives the trimmed, non-empty title.
    pub on_add: Callback<String>,
    #[prop_or(AttrValue::from("What needs to be done?"))]
    pub placeholder: AttrValue,
}

/// Text field plus add button.
#[function_component(NewTodo)]
pub fn new_todo(props: &NewTodoProps) -> Html {
    let title = use_state(String::new);

    let on_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_submit = {
        let title = title.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = title.trim();
            if !text.is_empty() {
                on_add.emit(text.to_string());
                title.set(String::new());
            }
        })
    };

    html! {
        <form class="new-todo" onsubmit={on_submit}>
            <input
                type="text"
                class="new-todo-input"
                placeholder={props.placeholder.clone()}
                value={(*title).clone()}
                oninput={on_input}
            />
            <button type="submit" class="btn btn-primary">{"Add"}</button>
        </form>
    }
}
