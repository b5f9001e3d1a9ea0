use crate::ui::icon::Icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Whether button is in loading state
    #[prop(default = false)]
    loading: bool,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    let is_disabled = disabled || loading;

    view! {
        <button
            class=full_classes
            on:click=move |_| {
                if !loading {
                    on_click.run(())
                }
            }
            disabled=is_disabled
        >
            {move || if loading {
                view! {
                    <Icon name="loader" class="w-4 h-4 icon-spin"/>
                }.into_any()
            } else if let Some(icon_name) = icon {
                view! {
                    <Icon name=icon_name class="w-4 h-4"/>
                }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}

/// Link styled as a button, for CTAs that navigate
#[component]
pub fn LinkButton(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Target href
    href: String,
    /// Link content
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = format!(
        "btn-base {} {} {}",
        variant.class(),
        size.class(),
        class
    );

    view! {
        <A href=href attr:class=full_classes>
            {children()}
        </A>
    }
}

/// Icon-only button component
#[component]
pub fn IconButton(
    /// Icon name to display
    icon: &'static str,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Accessible label (also shown as tooltip)
    label: &'static str,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-icon".to_string()
    } else {
        format!("btn-icon {}", class)
    };

    view! {
        <button
            class=full_classes
            on:click=move |_| on_click.run(())
            disabled=disabled
            title=label
            aria-label=label
        >
            <Icon name=icon class="w-5 h-5"/>
        </button>
    }
}

/// Button group container for multiple buttons
#[component]
pub fn ButtonGroup(
    /// Button elements
    children: Children,
    /// Spacing between buttons
    #[prop(default = "gap-2")]
    spacing: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-center {}", spacing)>
            {children()}
        </div>
    }
}
