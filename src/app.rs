use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::{AddComment, CommentSection};
use crate::config::Config;
use crate::view_model::CommentList;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::from_config(Config::global()));

    view! {
        <Stylesheet id="app-css" href="/pkg/comment-board.css"/>

        <Title text="Comment System"/>

        <Router>
            <main>
                <Routes>
                    <Route
                        path="/"
                        view=|| view! { <CommentBoard/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// The add form and the list share one list state; posting refreshes it
/// in place, so the reveal toggle survives.
#[component]
fn CommentBoard() -> impl IntoView {
    let list = create_rw_signal(CommentList::new());

    view! {
        <div class="board">
            <header class="board-header">
                <h1>"Comment System"</h1>
                <p>"Share your thoughts and join the conversation!"</p>
            </header>
            <div class="container">
                <AddComment list/>
                <CommentSection list/>
            </div>
        </div>
    }
}
