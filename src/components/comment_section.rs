use leptos::*;

use crate::api::{use_api, ApiClient, CommentRepository};
use crate::components::CommentCard;
use crate::models::Comment;
use crate::view_model::CommentList;

/// Fetches the comments into `list`. Responses to older refreshes are
/// dropped by the view-model.
pub fn refresh_list(list: RwSignal<CommentList>, api: ApiClient) {
    let mut ticket = None;
    list.update(|l| ticket = Some(l.begin_refresh()));
    let Some(ticket) = ticket else {
        return;
    };

    spawn_local(async move {
        let result = api.list_comments().await;
        list.update(|l| {
            l.finish_refresh(ticket, result);
        });
    });
}

#[component]
pub fn CommentSection(list: RwSignal<CommentList>) -> impl IntoView {
    let api = store_value(use_api());

    // effects only run in the browser, so the first fetch happens after hydration
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            refresh_list(list, api.get_value());
        }
    });

    // the loading view only replaces an empty list, so a refresh keeps the cards mounted
    let loading = create_memo(move |_| list.with(|l| l.is_loading() && l.items().is_empty()));
    let error = create_memo(move |_| list.with(|l| l.error().map(String::from)));
    let empty = create_memo(move |_| list.with(|l| l.items().is_empty()));

    view! {
        <section class="comment-section">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="status">
                            <p>"Loading comments..."</p>
                        </div>
                    }
                    .into_view();
                }

                if let Some(message) = error.get() {
                    return view! {
                        <div class="status status-error">
                            <p>{message}</p>
                            <button
                                class="btn btn-danger"
                                on:click=move |_| refresh_list(list, api.get_value())
                            >
                                "Try Again"
                            </button>
                        </div>
                    }
                    .into_view();
                }

                view! {
                    <h2 class="section-title">"Comments"</h2>
                    <Show
                        when=move || !empty.get()
                        fallback=|| view! {
                            <div class="status status-empty">
                                <p>"No comments yet. Be the first to comment!"</p>
                            </div>
                        }
                    >
                        <div class="comments">
                            <For
                                each=move || list.with(|l| l.visible().to_vec())
                                key=|comment: &Comment| comment.id
                                children=move |comment: Comment| {
                                    view! { <CommentCard id=comment.id list/> }
                                }
                            />
                        </div>
                        <Show
                            when=move || list.with(CommentList::has_more)
                            fallback=|| ()
                        >
                            <div class="reveal">
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| list.update(CommentList::toggle_reveal)
                                >
                                    {move || list.with(CommentList::reveal_label)}
                                </button>
                            </div>
                        </Show>
                    </Show>
                }
                .into_view()
            }}
        </section>
    }
}
