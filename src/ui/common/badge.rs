use leptos::prelude::*;

/// Badge variant types for different use cases
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Default neutral badge
    Neutral,
    /// Primary color badge
    Primary,
    /// Success/positive badge (green)
    Success,
    /// Warning badge (yellow/orange)
    Warning,
    /// Danger/error badge (red)
    Danger,
    /// Outline variant
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "badge-neutral",
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Danger => "badge-danger",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

/// Badge size options
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeSize {
    Small,
    Medium,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Small => "badge-sm",
            BadgeSize::Medium => "",
        }
    }
}

/// Small label badge used for plan tags and catalog annotations
#[component]
pub fn Badge(
    /// Badge variant style
    #[prop(default = BadgeVariant::Neutral)]
    variant: BadgeVariant,
    /// Badge size
    #[prop(default = BadgeSize::Medium)]
    size: BadgeSize,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = format!(
        "badge-base {} {} {}",
        variant.class(),
        size.class(),
        class
    );

    view! {
        <span class=full_classes>
            {children()}
        </span>
    }
}
