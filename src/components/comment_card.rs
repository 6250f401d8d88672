use leptos::*;

use crate::api::{use_api, CommentRepository};
use crate::components::{refresh_list, Avatar};
use crate::models::{Comment, CommentId};
use crate::utils::notify;
use crate::view_model::{CommentEditor, CommentList, ReactionButton, ReactionMachine};

/// One comment with its edit, delete and reaction controls. Text and likes
/// are read from `list` so local updates show without remounting the card.
#[component]
pub fn CommentCard(id: CommentId, list: RwSignal<CommentList>) -> impl IntoView {
    let api = store_value(use_api());
    let editor = create_rw_signal(CommentEditor::default());

    let (author, image, date) = list.with_untracked(|l| {
        l.get(id)
            .map(|x| (x.author.clone(), x.image().map(String::from), x.formatted_date()))
            .unwrap_or_default()
    });
    let text = move || list.with(|l| l.get(id).map(|x| x.text.clone()).unwrap_or_default());
    let likes = move || list.with(|l| l.get(id).map(Comment::displayed_likes).unwrap_or(0));
    let reaction = create_memo(move |_| list.with(|l| l.reaction(id)));

    let toggle = move |pressed: ReactionButton| {
        let mut pending = None;
        list.update(|l| pending = l.press_reaction(id, pressed));
        let Some(toggle) = pending else {
            return;
        };

        spawn_local(async move {
            let api = api.get_value();
            match api.toggle_reaction(id, toggle.target, toggle.previous).await {
                Ok(outcome) => list.update(|l| l.complete_reaction(id, outcome.likes)),
                Err(_) => {
                    list.update(|l| l.abandon_reaction(id));
                    notify::alert("Failed to update like status");
                }
            }
        });
    };

    let save = move |_: ev::MouseEvent| {
        let mut patch = None;
        editor.update(|e| patch = e.begin_save());
        let Some(patch) = patch else {
            return;
        };

        spawn_local(async move {
            let api = api.get_value();
            let result = api.update_comment(id, &patch).await;
            editor.update(|e| e.finish_save(result.is_ok()));
            match result {
                // edits are rare, the whole list is refetched instead of patched
                Ok(_) => refresh_list(list, api),
                Err(_) => notify::alert("Failed to update comment"),
            }
        });
    };

    let delete = move |_: ev::MouseEvent| {
        let mut confirmed = false;
        editor.update(|e| confirmed = e.begin_delete());
        if !confirmed {
            return;
        }

        spawn_local(async move {
            let result = api.get_value().delete_comment(id).await;
            editor.update(|e| e.finish_delete(result.is_ok()));
            match result {
                Ok(()) => {
                    tracing::info!("comment {id} deleted");
                    list.update(|l| {
                        l.remove(id);
                    });
                }
                Err(_) => notify::alert("Failed to delete comment"),
            }
        });
    };

    let is_busy = move || editor.with(CommentEditor::is_busy);
    let reaction_class = move |button: ReactionButton| {
        if reaction.with(|r| r.is_active(button)) {
            match button {
                ReactionButton::Like => "btn-reaction active-like",
                ReactionButton::Dislike => "btn-reaction active-dislike",
            }
        } else {
            "btn-reaction"
        }
    };

    view! {
        <div class="card comment-card">
            <div class="card-header">
                <div class="comment-author">
                    <Avatar name=author.clone() image=image/>
                    <div class="comment-meta">
                        <h4>{author}</h4>
                        <span class="date-posted">{date}</span>
                    </div>
                </div>
                <div class="comment-actions">
                    <button
                        class="btn btn-sm btn-primary"
                        disabled=is_busy
                        on:click=move |_| {
                            let current = text();
                            editor.update(|e| e.toggle_editing(&current));
                        }
                    >
                        {move || editor.with(CommentEditor::edit_label)}
                    </button>
                    {move || {
                        if editor.with(CommentEditor::is_confirming_delete) {
                            view! {
                                <div class="delete-confirm">
                                    <span>"Delete this comment?"</span>
                                    <button
                                        class="btn btn-sm btn-danger"
                                        disabled=is_busy
                                        on:click=delete
                                    >
                                        {move || {
                                            if is_busy() {
                                                editor.with(CommentEditor::delete_label)
                                            } else {
                                                "Yes"
                                            }
                                        }}
                                    </button>
                                    <button
                                        class="btn btn-sm"
                                        disabled=is_busy
                                        on:click=move |_| editor.update(CommentEditor::cancel_delete)
                                    >
                                        "No"
                                    </button>
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <button
                                    class="btn btn-sm btn-danger"
                                    disabled=is_busy
                                    on:click=move |_| editor.update(CommentEditor::request_delete)
                                >
                                    "Delete"
                                </button>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>

            <div class="card-block">
                <Show
                    when=move || editor.with(CommentEditor::is_editing)
                    fallback=move || view! { <p class="card-text">{text}</p> }
                >
                    <div class="comment-editor">
                        <textarea
                            class="form-control"
                            rows="3"
                            prop:value=move || editor.with(|e| e.draft().to_string())
                            on:input=move |ev| editor.update(|e| e.set_draft(&event_target_value(&ev)))
                        ></textarea>
                        <button
                            class="btn btn-sm btn-success"
                            disabled=move || !editor.with(CommentEditor::can_save)
                            on:click=save
                        >
                            {move || editor.with(CommentEditor::save_label)}
                        </button>
                    </div>
                </Show>
            </div>

            <div class="card-footer">
                <div class="reactions">
                    <button
                        class=move || reaction_class(ReactionButton::Like)
                        disabled=move || reaction.with(ReactionMachine::is_pending)
                        on:click=move |_| toggle(ReactionButton::Like)
                    >
                        <span class="icon">"👍"</span>
                        <span>{move || reaction.with(|r| r.button_label(ReactionButton::Like))}</span>
                    </button>
                    <button
                        class=move || reaction_class(ReactionButton::Dislike)
                        disabled=move || reaction.with(ReactionMachine::is_pending)
                        on:click=move |_| toggle(ReactionButton::Dislike)
                    >
                        <span class="icon">"👎"</span>
                        <span>{move || reaction.with(|r| r.button_label(ReactionButton::Dislike))}</span>
                    </button>
                </div>
                <span class="likes">{move || format!("❤️ {} likes", likes())}</span>
            </div>
        </div>
    }
}
