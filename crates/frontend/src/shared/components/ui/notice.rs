use crate::shared::icons::icon;
use leptos::prelude::*;

/// Informational banner for static guidance inside forms.
///
/// Intent selects the color scheme: "info" (default), "warning" or "error".
#[component]
pub fn Notice(
    /// Intent: "info" (default), "warning", "error"
    #[prop(optional, into)]
    intent: MaybeProp<String>,
    /// Notice content
    children: Children,
) -> impl IntoView {
    let intent_class = move || match intent.get().as_deref().unwrap_or("info") {
        "warning" => "notice--warning",
        "error" => "notice--error",
        _ => "notice--info",
    };

    view! {
        <div class=move || format!("notice {}", intent_class())>
            <span class="notice__icon">{icon("info")}</span>
            <div class="notice__body">{children()}</div>
        </div>
    }
}
