use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
    /// Whether to show close button in header
    #[prop(default = true)]
    show_close_button: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            on:click=move |_| {
                if close_on_backdrop {
                    on_close.run(());
                }
            }
        >
            <div
                class=format!("w-full {} mx-4 bg-theme-primary rounded-2xl border border-theme shadow-2xl", max_width)
                on:click=move |e| e.stop_propagation()
                role="dialog"
                aria-modal="true"
            >
                // Header
                <div class="flex items-start justify-between px-6 pt-5 pb-4 border-b border-theme">
                    <div>
                        <h2 class="text-lg font-semibold text-theme-primary">{title}</h2>
                        {subtitle.map(|s| view! {
                            <p class="text-sm text-theme-secondary mt-1">{s}</p>
                        })}
                    </div>
                    {show_close_button.then(|| view! {
                        <button
                            class="p-1.5 rounded-lg text-theme-tertiary hover:text-theme-primary hover:bg-theme-secondary transition-colors"
                            on:click=move |_| on_close.run(())
                            aria-label="Close dialog"
                        >
                            <Icon name=icons::X class="w-5 h-5"/>
                        </button>
                    })}
                </div>

                // Body
                <div class="px-6 py-5">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Modal wrapping an embedded product video, used by "watch demo" CTAs
#[component]
pub fn VideoModal(
    /// Video embed URL
    video_url: String,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <BaseModal
            title="Terramark in two minutes".to_string()
            is_open=is_open
            on_close=on_close
            max_width="max-w-4xl"
        >
            <div class="aspect-video w-full rounded-lg overflow-hidden bg-black">
                <iframe
                    src=video_url
                    class="w-full h-full"
                    title="Product demo video"
                    allow="autoplay; fullscreen"
                ></iframe>
            </div>
        </BaseModal>
    }
}
