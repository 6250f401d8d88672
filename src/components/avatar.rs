use leptos::*;

use crate::utils::{avatar_color, initials};

/// Profile picture, or colored initials when there is none or it fails to load.
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional_no_strip)] image: Option<String>,
) -> impl IntoView {
    let failed = create_rw_signal(false);
    let has_image = image.is_some();
    let style = format!("background-color: {}", avatar_color(&name));
    let letters = initials(&name);

    view! {
        <Show
            when=move || has_image && !failed.get()
            fallback=move || view! {
                <div class="avatar avatar-initials" style=style.clone()>
                    {letters.clone()}
                </div>
            }
        >
            <img
                class="avatar"
                src=image.clone()
                alt=name.clone()
                on:error=move |_| {
                    tracing::debug!("avatar image failed to load, using initials");
                    failed.set(true)
                }
            />
        </Show>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    const PHOTO: &str = "https://example.com/jane.png";

    #[test]
    fn renders_image_when_present() {
        let image = Some(PHOTO.to_string());
        let html = leptos::ssr::render_to_string(move || view! { <Avatar name="Jane Doe" image=image/> });
        assert!(html.contains(PHOTO));
        assert!(!html.contains("avatar-initials"));
    }

    #[test]
    fn falls_back_to_initials() {
        let html = leptos::ssr::render_to_string(|| view! { <Avatar name="Jane Doe" image=None/> });
        assert!(html.contains("avatar-initials"));
        assert!(html.contains("JD"));
        assert!(html.contains(avatar_color("Jane Doe")));

        let html = leptos::ssr::render_to_string(|| view! { <Avatar name="Admin"/> });
        assert!(html.contains("avatar-initials"));
        assert!(html.contains(avatar_color("Admin")));
    }
}
