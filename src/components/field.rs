//! Labelled inputs with an inline error slot.

use leptos::html::Input;
use leptos::prelude::*;

/// Text-like input (`text`, `tel`, `email`, `number`, `password`).
///
/// The error span only renders while `error` holds a message, and
/// `aria-invalid` follows it.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = NodeRef::new())] node_ref: NodeRef<Input>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id class="form-field__label">{label}</label>
            <input
                node_ref=node_ref
                id=id
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span role="alert" class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

/// Checkbox with its label to the right and the same error slot.
#[component]
pub fn CheckboxField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-field form-field--checkbox">
            <input
                id=id
                class="form-field__checkbox"
                type="checkbox"
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <label for=id class="form-field__label">{label}</label>
            <Show when=move || error.get().is_some()>
                <span role="alert" class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
