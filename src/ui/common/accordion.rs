use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// One collapsible row of an [`Accordion`]
#[derive(Clone, PartialEq)]
pub struct AccordionEntry {
    pub title: String,
    pub body: String,
}

impl AccordionEntry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Single-open accordion: at most one row is expanded at a time, and
/// clicking the open row collapses it again.
#[component]
pub fn Accordion(
    /// Entries rendered as collapsible rows
    entries: Vec<AccordionEntry>,
    /// Row opened initially
    #[prop(optional)]
    initial_open: Option<usize>,
) -> impl IntoView {
    let open_index = RwSignal::new(initial_open);

    view! {
        <div class="space-y-3">
            {entries.into_iter().enumerate().map(|(index, entry)| {
                view! {
                    <AccordionRow index=index entry=entry open_index=open_index/>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn AccordionRow(
    index: usize,
    entry: AccordionEntry,
    open_index: RwSignal<Option<usize>>,
) -> impl IntoView {
    let is_open = Signal::derive(move || open_index.get() == Some(index));

    let on_toggle = move |_| {
        open_index.update(|open| {
            *open = if *open == Some(index) {
                None
            } else {
                Some(index)
            };
        });
    };

    view! {
        <div class="border border-theme rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=on_toggle
                aria-expanded=move || is_open.get()
            >
                <span class="font-semibold text-theme-primary">{entry.title}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-theme-tertiary flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5"/>
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-theme-secondary leading-relaxed">
                    {entry.body}
                </div>
            </div>
        </div>
    }
}
