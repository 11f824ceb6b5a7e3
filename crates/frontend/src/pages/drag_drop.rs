//! Drag-and-drop ordering page.

use core_types::apply_move;
use web_sys::DragEvent;
use web_types::{ReorderRequest, Todo};
use yew::prelude::*;

use crate::api;
use crate::components::Loading;
use crate::hooks::{TodoSource, use_todos};

/// Reorder request for dropping `dragged` onto `target`, if it moves anything.
fn reorder_request(todos: &[Todo], dragged: i64, target: i64) -> Option<ReorderRequest> {
    if dragged == target {
        return None;
    }
    let from = todos.iter().find(|t| t.id == dragged)?;
    let to = todos.iter().find(|t| t.id == target)?;

    Some(ReorderRequest {
        item_id: from.id,
        old_index: from.display_order,
        new_index: to.display_order,
    })
}

/// Drag-and-drop page component.
#[function_component(DragDropPage)]
pub fn drag_drop_page() -> Html {
    let handle = use_todos(TodoSource::Active);
    let dragged = use_state(|| None::<i64>);
    let drag_over = use_state(|| None::<i64>);

    let on_drag_start = {
        let dragged = dragged.clone();
        Callback::from(move |(id, event): (i64, DragEvent)| {
            dragged.set(Some(id));
            if let Some(dt) = event.data_transfer() {
                dt.set_effect_allowed("move");
                if let Err(err) = dt.set_data("text/plain", &id.to_string()) {
                    web_sys::console::error_2(&"Failed to set drag data".into(), &err);
                }
            }
        })
    };

    let on_drag_over = {
        let drag_over = drag_over.clone();
        Callback::from(move |(id, event): (i64, DragEvent)| {
            event.prevent_default();
            if *drag_over != Some(id) {
                drag_over.set(Some(id));
            }
        })
    };

    let on_drag_end = {
        let dragged = dragged.clone();
        let drag_over = drag_over.clone();
        Callback::from(move |_: DragEvent| {
            dragged.set(None);
            drag_over.set(None);
        })
    };

    let on_drop = {
        let dragged = dragged.clone();
        let drag_over = drag_over.clone();
        let todos = handle.todos.clone();
        let reload = handle.reload.clone();
        Callback::from(move |(target, event): (i64, DragEvent)| {
            event.prevent_default();
            drag_over.set(None);

            let Some(source) = *dragged else {
                return;
            };
            dragged.set(None);

            let Some(request) = reorder_request(&todos, source, target) else {
                return;
            };

            // show the new order right away, the reload confirms it
            let mut moved = (*todos).clone();
            if apply_move(&mut moved, request.item_id, request.old_index, request.new_index) {
                todos.set(moved);
            }
            api::spawn_mutation("Failed to reorder todos", api::reorder(request), reload.clone());
        })
    };

    html! {
        <div>
            <h1>{"Drag & Drop"}</h1>
            <p class="text-secondary">{"Drag an item onto another to move it there."}</p>

            if *handle.loading {
                <Loading />
            } else {
                <ul class="todo-list draggable">
                    { for handle.todos.iter().map(|todo| {
                        let id = todo.id;
                        let mut class = classes!("todo-item", "draggable-item");
                        if *dragged == Some(id) {
                            class.push("dragging");
                        }
                        if *drag_over == Some(id) && *dragged != Some(id) {
                            class.push("drag-over");
                        }
                        if todo.completed {
                            class.push("completed");
                        }

                        html! {
                            <li
                                key={id}
                                class={class}
                                draggable="true"
                                ondragstart={on_drag_start.reform(move |e: DragEvent| (id, e))}
                                ondragover={on_drag_over.reform(move |e: DragEvent| (id, e))}
                                ondrop={on_drop.reform(move |e: DragEvent| (id, e))}
                                ondragend={on_drag_end.clone()}
                            >
                                <span class="drag-handle">{"⠿"}</span>
                                <span class="todo-title">{ &todo.title }</span>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
