//! Call-to-action section with four layout variants.

use leptos::prelude::*;

use super::CtaLink;
use crate::ui::common::{ButtonVariant, LinkButton};

/// CTA layout variants
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum CtaVariant {
    /// Full-width band with centered copy
    #[default]
    Banner,
    /// Bordered card with copy and actions side by side
    Card,
    /// Heading left, actions right
    Split,
    /// Banner over a gradient wash
    Gradient,
}

#[component]
pub fn CtaSection(
    /// Layout to render
    #[prop(default = CtaVariant::Banner)]
    variant: CtaVariant,
    heading: String,
    body: String,
    primary: CtaLink,
    #[prop(optional)] secondary: Option<CtaLink>,
) -> impl IntoView {
    match variant {
        CtaVariant::Banner => banner(heading, body, primary, secondary).into_any(),
        CtaVariant::Card => card(heading, body, primary, secondary).into_any(),
        CtaVariant::Split => split(heading, body, primary, secondary).into_any(),
        CtaVariant::Gradient => gradient(heading, body, primary, secondary).into_any(),
    }
}

fn banner(
    heading: String,
    body: String,
    primary: CtaLink,
    secondary: Option<CtaLink>,
) -> impl IntoView {
    view! {
        <section class="py-24 px-4 bg-theme-secondary/20">
            <div class="max-w-4xl mx-auto text-center landing-scroll-animate">
                <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{heading}</h2>
                <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">{body}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Actions primary=primary secondary=secondary/>
                </div>
            </div>
        </section>
    }
}

fn card(
    heading: String,
    body: String,
    primary: CtaLink,
    secondary: Option<CtaLink>,
) -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <div class="max-w-4xl mx-auto bg-theme-primary border border-theme rounded-2xl shadow-lg p-10
                        flex flex-col md:flex-row items-center justify-between gap-8 landing-scroll-animate">
                <div>
                    <h2 class="text-2xl font-bold text-theme-primary mb-2">{heading}</h2>
                    <p class="text-theme-secondary">{body}</p>
                </div>
                <div class="flex items-center gap-4 flex-shrink-0">
                    <Actions primary=primary secondary=secondary/>
                </div>
            </div>
        </section>
    }
}

fn split(
    heading: String,
    body: String,
    primary: CtaLink,
    secondary: Option<CtaLink>,
) -> impl IntoView {
    view! {
        <section class="py-20 px-4 border-y border-theme">
            <div class="max-w-6xl mx-auto flex flex-col lg:flex-row items-center justify-between gap-8">
                <div class="max-w-2xl">
                    <h2 class="text-3xl font-bold text-theme-primary mb-3">{heading}</h2>
                    <p class="text-lg text-theme-secondary">{body}</p>
                </div>
                <div class="flex items-center gap-4 flex-shrink-0">
                    <Actions primary=primary secondary=secondary/>
                </div>
            </div>
        </section>
    }
}

fn gradient(
    heading: String,
    body: String,
    primary: CtaLink,
    secondary: Option<CtaLink>,
) -> impl IntoView {
    view! {
        <section class="relative py-24 px-4 overflow-hidden">
            <div class="absolute inset-0 -z-10 bg-gradient-to-b from-transparent to-accent-primary/10" aria-hidden="true"></div>
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{heading}</h2>
                <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">{body}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Actions primary=primary secondary=secondary/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Actions(primary: CtaLink, secondary: Option<CtaLink>) -> impl IntoView {
    let CtaLink { label, href } = primary;

    view! {
        <LinkButton href=href>
            {label}
        </LinkButton>
        {secondary.map(|cta| {
            let CtaLink { label, href } = cta;
            view! {
                <LinkButton variant=ButtonVariant::Outline href=href>
                    {label}
                </LinkButton>
            }
        })}
    }
}
