use leptos::prelude::*;

/// Single-line form input with label and optional help text
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value (reactive, owned by the caller)
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the new text
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Help text rendered under the field
    #[prop(optional, into)]
    help: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Required attribute; also marks the label
    #[prop(optional)]
    required: bool,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let label_class = if required {
        "form__label form__label--required"
    } else {
        "form__label"
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class=label_class for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {}", additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                required=required
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || help.get().map(|h| view! {
                <small class="help-text">{h}</small>
            })}
        </div>
    }
}
