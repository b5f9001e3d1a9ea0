//! Pagination controls.
//!
//! [`Pagination`] renders the windowed page numbers computed by
//! [`crate::core::pagination::page_window`]; [`SimplePagination`] is the
//! prev/label/next variant. Neither owns the current page: the host passes
//! it in and reacts to `on_page_change`.

use leptos::prelude::*;

use crate::core::pagination::{DEFAULT_SIBLING_COUNT, PageMarker, page_window};
use crate::ui::icon::{Icon, icons};

/// Windowed pagination control with first/prev/next/last navigation
#[component]
pub fn Pagination(
    /// Currently selected page (owned by the caller)
    #[prop(into)]
    current_page: Signal<usize>,
    /// Total number of pages
    total_pages: usize,
    /// Invoked with the target page when a control is activated
    on_page_change: Callback<usize>,
    /// Page numbers shown on each side of the current page
    #[prop(default = DEFAULT_SIBLING_COUNT)]
    sibling_count: usize,
    /// Whether to render the first/last jump controls
    #[prop(default = true)]
    show_first_last: bool,
) -> impl IntoView {
    let window = Memo::new(move |_| page_window(current_page.get(), total_pages, sibling_count));

    view! {
        <nav class="flex items-center gap-1" aria-label="Pagination">
            {show_first_last.then(|| view! {
                <NavButton
                    icon=icons::CHEVRONS_LEFT
                    label="First page"
                    enabled=Signal::derive(move || window.get().first_enabled())
                    on_press=Callback::new(move |_| on_page_change.run(1))
                />
            })}

            <NavButton
                icon=icons::CHEVRON_LEFT
                label="Previous page"
                enabled=Signal::derive(move || window.get().prev_enabled())
                on_press=Callback::new(move |_| {
                    let current = window.get_untracked().current_page;
                    on_page_change.run(current.saturating_sub(1).max(1));
                })
            />

            {move || {
                let current = window.get().current_page;
                window.get().markers.into_iter().map(|marker| match marker {
                    PageMarker::Page(page) => {
                        let is_current = page == current;
                        view! {
                            <button
                                class=if is_current { "page-btn page-btn-active" } else { "page-btn" }
                                aria-label=format!("Page {}", page)
                                aria-current=is_current.then_some("page")
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any()
                    }
                    PageMarker::Ellipsis(side) => view! {
                        <span class="page-ellipsis" data-side=side.as_str() aria-hidden="true">
                            "…"
                        </span>
                    }
                    .into_any(),
                }).collect_view()
            }}

            <NavButton
                icon=icons::CHEVRON_RIGHT
                label="Next page"
                enabled=Signal::derive(move || window.get().next_enabled())
                on_press=Callback::new(move |_| {
                    let w = window.get_untracked();
                    on_page_change.run((w.current_page + 1).min(w.total_pages));
                })
            />

            {show_first_last.then(|| view! {
                <NavButton
                    icon=icons::CHEVRONS_RIGHT
                    label="Last page"
                    enabled=Signal::derive(move || window.get().last_enabled())
                    on_press=Callback::new(move |_| {
                        on_page_change.run(window.get_untracked().total_pages);
                    })
                />
            })}
        </nav>
    }
}

/// Minimal pagination: previous / "Page X of Y" / next
#[component]
pub fn SimplePagination(
    /// Currently selected page (owned by the caller)
    #[prop(into)]
    current_page: Signal<usize>,
    /// Total number of pages
    total_pages: usize,
    /// Invoked with the target page when a control is activated
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let total = total_pages.max(1);

    view! {
        <nav class="flex items-center gap-3" aria-label="Pagination">
            <NavButton
                icon=icons::CHEVRON_LEFT
                label="Previous page"
                enabled=Signal::derive(move || current_page.get() > 1)
                on_press=Callback::new(move |_| {
                    on_page_change.run(current_page.get_untracked().saturating_sub(1).max(1));
                })
            />
            <span class="text-sm text-theme-secondary tabular-nums">
                {move || format!("Page {} of {}", current_page.get().clamp(1, total), total)}
            </span>
            <NavButton
                icon=icons::CHEVRON_RIGHT
                label="Next page"
                enabled=Signal::derive(move || current_page.get() < total)
                on_press=Callback::new(move |_| {
                    on_page_change.run((current_page.get_untracked() + 1).min(total));
                })
            />
        </nav>
    }
}

#[component]
fn NavButton(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] enabled: Signal<bool>,
    on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="page-nav-btn"
            disabled=move || !enabled.get()
            aria-label=label
            on:click=move |_| on_press.run(())
        >
            <Icon name=icon class="w-4 h-4"/>
        </button>
    }
}
