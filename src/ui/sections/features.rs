//! Feature grid section.

use leptos::prelude::*;

use crate::ui::icon::Icon;

/// One feature card
#[derive(Clone, PartialEq)]
pub struct FeatureItem {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

impl FeatureItem {
    pub fn new(
        icon: &'static str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[component]
pub fn FeatureGrid(
    heading: String,
    subheading: String,
    items: Vec<FeatureItem>,
) -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{heading}</h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">{subheading}</p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {items.into_iter().map(|item| view! {
                        <FeatureCard item=item/>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(item: FeatureItem) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=item.icon class="w-6 h-6"/>
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{item.title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{item.description}</p>
        </div>
    }
}
