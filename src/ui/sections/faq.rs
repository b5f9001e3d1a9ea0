//! FAQ section with three layout variants.

use leptos::prelude::*;

use crate::ui::common::{Accordion, AccordionEntry};

/// FAQ layout variants
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum FaqVariant {
    /// Single-open accordion
    #[default]
    Accordion,
    /// Question/answer cards in two columns
    TwoColumn,
    /// Flat list, every answer visible
    Plain,
}

/// One question/answer pair
#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[component]
pub fn FaqSection(
    /// Layout to render
    #[prop(default = FaqVariant::Accordion)]
    variant: FaqVariant,
    heading: String,
    #[prop(optional)] subheading: Option<String>,
    entries: Vec<FaqEntry>,
) -> impl IntoView {
    let container_class = match variant {
        FaqVariant::TwoColumn => "max-w-5xl mx-auto",
        _ => "max-w-3xl mx-auto",
    };

    view! {
        <section id="faq" class="py-20 px-4">
            <div class=container_class>
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{heading}</h2>
                    {subheading.map(|s| view! {
                        <p class="text-lg text-theme-secondary">{s}</p>
                    })}
                </div>
                {match variant {
                    FaqVariant::Accordion => accordion(entries).into_any(),
                    FaqVariant::TwoColumn => two_column(entries).into_any(),
                    FaqVariant::Plain => plain(entries).into_any(),
                }}
            </div>
        </section>
    }
}

fn accordion(entries: Vec<FaqEntry>) -> impl IntoView {
    let entries = entries
        .into_iter()
        .map(|entry| AccordionEntry::new(entry.question, entry.answer))
        .collect::<Vec<_>>();

    view! {
        <div class="landing-scroll-animate">
            <Accordion entries=entries/>
        </div>
    }
}

fn two_column(entries: Vec<FaqEntry>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            {entries.into_iter().map(|entry| view! {
                <div class="bg-theme-primary border border-theme rounded-xl p-6 landing-scroll-animate">
                    <h3 class="font-semibold text-theme-primary mb-2">{entry.question}</h3>
                    <p class="text-sm text-theme-secondary leading-relaxed">{entry.answer}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

fn plain(entries: Vec<FaqEntry>) -> impl IntoView {
    view! {
        <dl class="space-y-8">
            {entries.into_iter().map(|entry| view! {
                <div>
                    <dt class="font-semibold text-theme-primary mb-1">{entry.question}</dt>
                    <dd class="text-theme-secondary leading-relaxed">{entry.answer}</dd>
                </div>
            }).collect_view()}
        </dl>
    }
}
