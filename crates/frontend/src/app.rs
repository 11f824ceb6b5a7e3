//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DragDropPage, TodoAppPage, TodoAppTwoPage, TrashPage};

/// Application routes.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    TodoApp,
    #[at("/todo-two")]
    TodoAppTwo,
    #[at("/drag-drop")]
    DragDrop,
    #[at("/trash")]
    Trash,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Navigable routes, in table order.
    pub const TABLE: [Route; 4] = [
        Route::TodoApp,
        Route::TodoAppTwo,
        Route::DragDrop,
        Route::Trash,
    ];

    /// Symbolic name of the route.
    pub fn name(self) -> &'static str {
        match self {
            Route::TodoApp => "TodoApp",
            Route::TodoAppTwo => "TodoAppTwo",
            Route::DragDrop => "DragDrop",
            Route::Trash => "Trash",
            Route::NotFound => "NotFound",
        }
    }

    /// Navigation label.
    fn label(self) -> &'static str {
        match self {
            Route::TodoApp => "To-do",
            Route::TodoAppTwo => "To-do Two",
            Route::DragDrop => "Drag & Drop",
            Route::Trash => "Trash",
            Route::NotFound => "Not Found",
        }
    }

    /// `(path, name)` for every navigable route.
    pub fn entries() -> impl Iterator<Item = (String, &'static str)> {
        Self::TABLE
            .into_iter()
            .map(|route| (route.to_path(), route.name()))
    }
}

/// Route switch function.
fn switch(route: Route) -> Html {
    match route {
        Route::TodoApp => html! { <TodoAppPage /> },
        Route::TodoAppTwo => html! { <TodoAppTwoPage /> },
        Route::DragDrop => html! { <DragDropPage /> },
        Route::Trash => html! { <TrashPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Nav />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Top navigation bar.
#[function_component(Nav)]
fn nav() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="nav">
            <ul class="nav-links">
                { for Route::TABLE.into_iter().map(|route| {
                    let class = if current == Some(route) { "active" } else { "" };
                    html! {
                        <li class={class}>
                            <Link<Route> to={route}>{ route.label() }</Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_table() {
        let entries: Vec<(String, &str)> = Route::entries().collect();

        assert_eq!(
            entries,
            vec![
                ("/".to_string(), "TodoApp"),
                ("/todo-two".to_string(), "TodoAppTwo"),
                ("/drag-drop".to_string(), "DragDrop"),
                ("/trash".to_string(), "Trash"),
            ]
        );
    }

    #[test]
    fn test_paths_and_names_are_distinct() {
        let paths: HashSet<String> = Route::entries().map(|(path, _)| path).collect();
        let names: HashSet<&str> = Route::entries().map(|(_, name)| name).collect();

        assert_eq!(paths.len(), Route::TABLE.len());
        assert_eq!(names.len(), Route::TABLE.len());
    }

    #[test]
    fn test_each_path_recognizes_its_own_route() {
        for route in Route::TABLE {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }

        assert_eq!(Route::recognize("/drag-drop"), Some(Route::DragDrop));
        assert_ne!(Route::recognize("/drag-drop"), Some(Route::TodoApp));
        assert_eq!(Route::recognize("/trash"), Some(Route::Trash));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }

    #[derive(Properties, PartialEq)]
    struct SwitchProps {
        route: Route,
    }

    #[function_component(RenderRoute)]
    fn render_route(props: &SwitchProps) -> Html {
        switch(props.route)
    }

    async fn render(route: Route) -> String {
        yew::ServerRenderer::<RenderRoute>::with_props(move || SwitchProps { route })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_each_route_renders_only_its_page() {
        let headings = [
            (Route::TodoApp, "<h1>To-do List</h1>"),
            (Route::TodoAppTwo, "<h1>To-do List Two</h1>"),
            (Route::DragDrop, "<h1>Drag &amp; Drop</h1>"),
            (Route::Trash, "<h1>Trash</h1>"),
            (Route::NotFound, "<h1>404 - Page Not Found</h1>"),
        ];

        for (route, expected) in headings {
            let html = render(route).await;

            for (other, heading) in headings {
                assert_eq!(
                    html.contains(heading),
                    other == route,
                    "{route:?} rendering {heading}: {html}"
                );
            }
            assert!(html.contains(expected));
        }
    }
}
