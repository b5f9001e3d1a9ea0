//! Hero section with six layout variants.
//!
//! The variant is a tagged enum dispatched to one render function per
//! layout, so adding a layout means adding a variant and a function, not
//! growing a conditional chain.

use leptos::prelude::*;

use super::CtaLink;
use crate::ui::common::{Button, ButtonSize, ButtonVariant, LinkButton, TextField};
use crate::ui::icon::{Icon, icons};

/// Hero layout variants
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroVariant {
    /// Headline and CTAs centered over the full width
    #[default]
    Centered,
    /// Copy on the left, product image on the right
    Split,
    /// Centered copy over a gradient wash
    Gradient,
    /// Headline and a single CTA, nothing else
    Minimal,
    /// Centered copy with a stat strip underneath
    WithStats,
    /// Copy with an inline email-signup field
    WithSignup,
}

/// One entry in the [`HeroVariant::WithStats`] strip
#[derive(Clone, PartialEq)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

impl HeroStat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Everything a hero layout renders
#[derive(Clone, PartialEq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub primary: CtaLink,
    pub secondary: Option<CtaLink>,
    /// Product image, used by the Split layout
    pub image_src: Option<String>,
    /// Stat strip, used by the WithStats layout
    pub stats: Vec<HeroStat>,
}

#[component]
pub fn HeroSection(
    /// Layout to render
    #[prop(default = HeroVariant::Centered)]
    variant: HeroVariant,
    content: HeroContent,
) -> impl IntoView {
    match variant {
        HeroVariant::Centered => centered(content).into_any(),
        HeroVariant::Split => split(content).into_any(),
        HeroVariant::Gradient => gradient(content).into_any(),
        HeroVariant::Minimal => minimal(content).into_any(),
        HeroVariant::WithStats => with_stats(content).into_any(),
        HeroVariant::WithSignup => with_signup(content).into_any(),
    }
}

fn centered(content: HeroContent) -> impl IntoView {
    view! {
        <section class="py-24 px-4">
            <div class="text-center max-w-4xl mx-auto">
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight landing-fade-in-up">
                    {content.title}
                </h1>
                <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed landing-fade-in-up landing-delay-200">
                    {content.subtitle}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                    <CtaButtons primary=content.primary secondary=content.secondary/>
                </div>
            </div>
        </section>
    }
}

fn split(content: HeroContent) -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <h1 class="text-4xl sm:text-5xl font-bold text-theme-primary mb-6 tracking-tight">
                        {content.title}
                    </h1>
                    <p class="text-lg text-theme-secondary mb-8 leading-relaxed">
                        {content.subtitle}
                    </p>
                    <div class="flex flex-col sm:flex-row items-start gap-4">
                        <CtaButtons primary=content.primary secondary=content.secondary/>
                    </div>
                </div>
                <div class="relative">
                    {content.image_src.map(|src| view! {
                        <img
                            src=src
                            alt="Product screenshot"
                            class="rounded-2xl border border-theme shadow-2xl w-full"
                        />
                    })}
                </div>
            </div>
        </section>
    }
}

fn gradient(content: HeroContent) -> impl IntoView {
    view! {
        <section class="relative py-28 px-4 overflow-hidden">
            <div class="absolute inset-0 -z-10" aria-hidden="true">
                <div class="absolute top-0 left-1/4 w-96 h-96 bg-accent-primary/10 rounded-full blur-3xl"></div>
                <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-emerald-500/10 rounded-full blur-3xl"></div>
            </div>
            <div class="text-center max-w-4xl mx-auto">
                <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                    {content.title}
                </h1>
                <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                    {content.subtitle}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <CtaButtons primary=content.primary secondary=content.secondary/>
                </div>
            </div>
        </section>
    }
}

fn minimal(content: HeroContent) -> impl IntoView {
    let CtaLink { label, href } = content.primary;

    view! {
        <section class="py-16 px-4">
            <div class="max-w-3xl mx-auto text-center">
                <h1 class="text-4xl font-bold text-theme-primary mb-4">{content.title}</h1>
                <p class="text-lg text-theme-secondary mb-8">{content.subtitle}</p>
                <LinkButton href=href>
                    {label}
                </LinkButton>
            </div>
        </section>
    }
}

fn with_stats(content: HeroContent) -> impl IntoView {
    let stats = content.stats.clone();

    view! {
        <section class="py-24 px-4">
            <div class="text-center max-w-4xl mx-auto">
                <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                    {content.title}
                </h1>
                <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                    {content.subtitle}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16">
                    <CtaButtons primary=content.primary secondary=content.secondary/>
                </div>
                <dl class="grid grid-cols-1 sm:grid-cols-3 gap-8 border-t border-theme pt-10">
                    {stats.into_iter().map(|stat| view! {
                        <div>
                            <dt class="text-sm text-theme-tertiary">{stat.label}</dt>
                            <dd class="text-3xl font-bold text-theme-primary">{stat.value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </div>
        </section>
    }
}

fn with_signup(content: HeroContent) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (submitted, set_submitted) = signal(false);
    let primary_label = content.primary.label.clone();

    view! {
        <section class="py-24 px-4">
            <div class="text-center max-w-3xl mx-auto">
                <h1 class="text-5xl font-bold text-theme-primary mb-6 tracking-tight">
                    {content.title}
                </h1>
                <p class="text-xl text-theme-secondary mb-10 leading-relaxed">
                    {content.subtitle}
                </p>
                {move || {
                    if submitted.get() {
                        view! {
                            <p class="flex items-center justify-center gap-2 text-theme-primary font-medium">
                                <Icon name=icons::CHECK class="w-5 h-5"/>
                                "Thanks! We'll be in touch."
                            </p>
                        }
                        .into_any()
                    } else {
                        let label = primary_label.clone();
                        view! {
                            <div class="flex flex-col sm:flex-row items-stretch justify-center gap-3 max-w-lg mx-auto">
                                <div class="flex-1">
                                    <TextField
                                        label="Work email".to_string()
                                        input_type="email"
                                        placeholder="you@company.com".to_string()
                                        value=email
                                        on_input=Callback::new(move |v| set_email.set(v))
                                    />
                                </div>
                                <div class="flex items-end">
                                    <Button
                                        variant=ButtonVariant::Primary
                                        on_click=Callback::new(move |_| set_submitted.set(true))
                                    >
                                        {label}
                                    </Button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </section>
    }
}

/// Primary/secondary CTA pair shared by the hero layouts
#[component]
fn CtaButtons(primary: CtaLink, secondary: Option<CtaLink>) -> impl IntoView {
    let CtaLink { label, href } = primary;

    view! {
        <LinkButton size=ButtonSize::Large href=href>
            {label}
        </LinkButton>
        {secondary.map(|cta| {
            let CtaLink { label, href } = cta;
            view! {
                <LinkButton variant=ButtonVariant::Outline size=ButtonSize::Large href=href>
                    {label}
                </LinkButton>
            }
        })}
    }
}
