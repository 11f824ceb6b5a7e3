//! Spinner shown while a list is being fetched.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::from("Loading to-dos..."))]
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading" role="status" aria-label={props.label.clone()}>
            <div class="spinner"></div>
        </div>
    }
}
