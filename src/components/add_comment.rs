use leptos::*;

use crate::api::{use_api, CommentRepository};
use crate::components::{refresh_list, Avatar};
use crate::config::Config;
use crate::utils::notify;
use crate::view_model::{AddCommentForm, CommentList};

/// Form for posting as the configured author; a stored comment refreshes `list`.
#[component]
pub fn AddComment(list: RwSignal<CommentList>) -> impl IntoView {
    let api = store_value(use_api());
    let author = store_value(Config::global().author.clone());
    let form = create_rw_signal(AddCommentForm::default());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name = author.get_value();
        let mut payload = None;
        form.update(|f| payload = Some(f.begin_submit(&name)));
        let comment = match payload {
            Some(Ok(comment)) => comment,
            Some(Err(err)) => {
                tracing::debug!("not submitting: {err}");
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let api = api.get_value();
            let result = api.create_comment(&comment).await;
            form.update(|f| f.finish_submit(result.is_ok()));
            match result {
                Ok(created) => {
                    tracing::info!("comment {} added", created.id);
                    refresh_list(list, api);
                }
                Err(_) => notify::alert("Failed to add comment"),
            }
        });
    };

    view! {
        <div class="card add-comment">
            <div class="card-header">
                <div class="comment-author">
                    <Avatar name=author.get_value()/>
                    <h3>"Add a Comment"</h3>
                </div>
                <span class="badge">{author.get_value()}</span>
            </div>
            <form on:submit=submit>
                <textarea
                    class="form-control"
                    placeholder="Write your comment here..."
                    rows="4"
                    prop:value=move || form.with(|f| f.text().to_string())
                    on:input=move |ev| form.update(|f| f.set_text(&event_target_value(&ev)))
                    disabled=move || form.with(AddCommentForm::is_submitting)
                ></textarea>
                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn btn-success"
                        disabled=move || !form.with(AddCommentForm::can_submit)
                    >
                        {move || form.with(AddCommentForm::submit_label)}
                    </button>
                </div>
            </form>
        </div>
    }
}
