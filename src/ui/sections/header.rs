//! Sticky site header with mobile menu and theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo/>
                        <span class="text-xl font-bold text-theme-primary">"Terramark"</span>
                    </A>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            {NAV_LINKS.iter().map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                >
                                    {*label}
                                </a>
                            }).collect_view()}
                            <A
                                href="/components"
                                attr:class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                            >
                                "Components"
                            </A>
                            <a
                                href="https://app.terramark.io/signup"
                                class="px-4 py-2 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors shadow-md"
                            >
                                "Start Free"
                            </a>
                        </nav>
                        <ThemeToggle/>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-theme-secondary transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! {
                                    <Icon name=icons::X class="w-6 h-6"/>
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::MENU class="w-6 h-6"/>
                                }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-2 border-t border-theme/50">
                        <nav class="flex flex-col gap-2">
                            {NAV_LINKS.iter().map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }).collect_view()}
                            <a
                                href="https://app.terramark.io/signup"
                                class="block w-full text-center px-4 py-2 text-sm font-medium text-white bg-accent-primary rounded-lg"
                            >
                                "Start Free"
                            </a>
                            <div class="px-4 pt-2">
                                <ThemeToggle/>
                            </div>
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary border border-theme"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        <Icon name=icons::SUN class="w-5 h-5"/>
                    }
                } else {
                    view! {
                        <Icon name=icons::MOON class="w-5 h-5"/>
                    }
                }
            }}
        </button>
    }
}

/// Logo component
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-emerald-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7" />
            </svg>
        </div>
    }
}
