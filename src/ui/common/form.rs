use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input field with label and error display
#[component]
pub fn TextField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            <FieldError error=error/>
        </div>
    }
}

/// Text area field with label and error display
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            ></textarea>
            <FieldError error=error/>
        </div>
    }
}

/// Select field over (value, label) options
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Options as (value, label) pairs
    options: Vec<(String, String)>,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <select
                class="input-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=disabled
            >
                {options.into_iter().map(|(option_value, option_label)| {
                    view! {
                        <option value=option_value>{option_label}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Checkbox with inline label
#[component]
pub fn CheckboxField(
    /// Label shown next to the checkbox
    label: String,
    /// Current checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 cursor-pointer select-none">
            <input
                type="checkbox"
                class="checkbox-base"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                disabled=disabled
            />
            <span class="text-sm text-theme-primary">{label}</span>
        </label>
    }
}

/// Error line shown under a field when validation fails
#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    view! {
        {move || {
            error.as_ref().and_then(|e| e.get()).map(|err| view! {
                <div class="flex items-center gap-1 text-sm text-theme-error">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    <span>{err}</span>
                </div>
            })
        }}
    }
}
