use leptos::prelude::*;

/// Multi-line form input with label and optional help text.
///
/// The placeholder is reactive so callers can switch it from the current
/// value (e.g. an "unchanged" hint for secrets that are not re-displayed).
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value (reactive, owned by the caller)
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the new text
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Help text rendered under the field
    #[prop(optional, into)]
    help: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Required attribute; also marks the label
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Render the value in a monospace face (key material, code)
    #[prop(optional)]
    monospace: bool,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let mono_class = if monospace { "form__textarea--mono" } else { "" };
    let label_class = if required {
        "form__label form__label--required"
    } else {
        "form__label"
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class=label_class for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=move || format!("form__textarea {} {}", mono_class, additional_class())
                placeholder=textarea_placeholder
                disabled=disabled
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || help.get().map(|h| view! {
                <small class="help-text">{h}</small>
            })}
        </div>
    }
}
