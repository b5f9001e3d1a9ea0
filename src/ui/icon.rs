use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHART: &str = "chart";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRONS_LEFT: &str = "chevrons-left";
    pub const CHEVRONS_RIGHT: &str = "chevrons-right";
    pub const LOADER: &str = "loader";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const PLAY: &str = "play";
    pub const ROUTE: &str = "route";
    pub const SHIELD: &str = "shield";
    pub const SUN: &str = "sun";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
}
