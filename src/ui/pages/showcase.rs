//! Component showcase page
//!
//! One demo block per catalog entry, each with live interactive state:
//! pagination wired to a page signal, the accordion, a modal trigger, the
//! lightbox gallery, form fields, and every button/badge/hero/CTA variant.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::common::{
    Accordion, AccordionEntry, Badge, BadgeVariant, BaseModal, Button, ButtonGroup, ButtonVariant,
    CheckboxField, Lightbox, LightboxImage, Pagination, SelectField, SimplePagination,
    TextAreaField, TextField,
};
use crate::ui::sections::{
    CtaLink, CtaSection, CtaVariant, FaqEntry, FaqSection, FaqVariant, HeroContent, HeroSection,
    HeroStat, HeroVariant, SiteFooter, SiteHeader,
};

/// Component catalog page
#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <Title text="Components - Terramark"/>

        <div class="min-h-screen bg-theme-primary">
            <SiteHeader/>

            <div class="max-w-5xl mx-auto px-4 pt-28 pb-20">
                <div class="mb-16">
                    <h1 class="text-4xl font-bold text-theme-primary mb-3">"Component Library"</h1>
                    <p class="text-lg text-theme-secondary max-w-2xl">
                        "The building blocks the Terramark site is assembled from. Every block is a plain component: props in, markup out."
                    </p>
                </div>

                <div class="space-y-20">
                    <PaginationDemo/>
                    <ButtonDemo/>
                    <BadgeDemo/>
                    <AccordionDemo/>
                    <ModalDemo/>
                    <FormDemo/>
                    <LightboxDemo/>
                    <HeroDemo/>
                    <CtaDemo/>
                    <FaqDemo/>
                </div>
            </div>

            <SiteFooter/>
        </div>
    }
}

/// Titled wrapper around one catalog entry
#[component]
fn DemoBlock(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section>
            <div class="mb-6">
                <h2 class="text-2xl font-bold text-theme-primary mb-1">{title}</h2>
                <p class="text-sm text-theme-secondary">{description}</p>
            </div>
            <div class="border border-theme rounded-2xl p-8 bg-theme-secondary/10">
                {children()}
            </div>
        </section>
    }
}

#[component]
fn PaginationDemo() -> impl IntoView {
    let (page, set_page) = signal(5usize);
    let (simple_page, set_simple_page) = signal(1usize);

    view! {
        <DemoBlock
            title="Pagination"
            description="Windowed page numbers with sibling count and first/last jumps, plus the minimal prev/next variant. The host owns the current page."
        >
            <div class="space-y-8">
                <div class="space-y-3">
                    <Pagination
                        current_page=page
                        total_pages=20
                        on_page_change=Callback::new(move |p| set_page.set(p))
                    />
                    <p class="text-sm text-theme-tertiary">
                        {move || format!("Selected page: {}", page.get())}
                    </p>
                </div>

                <div class="space-y-3">
                    <Pagination
                        current_page=page
                        total_pages=20
                        sibling_count=2
                        show_first_last=false
                        on_page_change=Callback::new(move |p| set_page.set(p))
                    />
                    <p class="text-sm text-theme-tertiary">"sibling_count=2, no first/last jumps"</p>
                </div>

                <div class="space-y-3">
                    <SimplePagination
                        current_page=simple_page
                        total_pages=8
                        on_page_change=Callback::new(move |p| set_simple_page.set(p))
                    />
                </div>
            </div>
        </DemoBlock>
    }
}

#[component]
fn ButtonDemo() -> impl IntoView {
    let (clicks, set_clicks) = signal(0u32);

    view! {
        <DemoBlock
            title="Buttons"
            description="Variants, sizes, and the loading state."
        >
            <div class="space-y-6">
                <ButtonGroup spacing="gap-3">
                    <Button on_click=Callback::new(move |_| set_clicks.update(|c| *c += 1))>
                        "Primary"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| set_clicks.update(|c| *c += 1))
                    >
                        "Secondary"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| set_clicks.update(|c| *c += 1))
                    >
                        "Outline"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=Callback::new(move |_| set_clicks.update(|c| *c += 1))
                    >
                        "Ghost"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| set_clicks.update(|c| *c += 1))
                    >
                        "Danger"
                    </Button>
                </ButtonGroup>

                <ButtonGroup spacing="gap-3">
                    <Button
                        loading=true
                        on_click=Callback::new(|_| {})
                    >
                        "Saving"
                    </Button>
                    <Button
                        disabled=true
                        on_click=Callback::new(|_| {})
                    >
                        "Disabled"
                    </Button>
                </ButtonGroup>

                <p class="text-sm text-theme-tertiary">
                    {move || format!("Clicks: {}", clicks.get())}
                </p>
            </div>
        </DemoBlock>
    }
}

#[component]
fn BadgeDemo() -> impl IntoView {
    view! {
        <DemoBlock
            title="Badges"
            description="Labels for plan tags and catalog annotations."
        >
            <div class="flex flex-wrap items-center gap-3">
                <Badge>"Neutral"</Badge>
                <Badge variant=BadgeVariant::Primary>"Most Popular"</Badge>
                <Badge variant=BadgeVariant::Success>"New"</Badge>
                <Badge variant=BadgeVariant::Warning>"Beta"</Badge>
                <Badge variant=BadgeVariant::Danger>"Deprecated"</Badge>
                <Badge variant=BadgeVariant::Outline>"Outline"</Badge>
            </div>
        </DemoBlock>
    }
}

#[component]
fn AccordionDemo() -> impl IntoView {
    view! {
        <DemoBlock
            title="Accordion"
            description="Single-open accordion: at most one row expanded, clicking the open row collapses it."
        >
            <Accordion
                entries=vec![
                    AccordionEntry::new(
                        "How are territories drawn?",
                        "On a live map, with zip codes, counties, or freehand polygons.",
                    ),
                    AccordionEntry::new(
                        "What does balancing show?",
                        "Account count, open pipeline, and estimated drive time per territory, updated as boundaries move.",
                    ),
                    AccordionEntry::new(
                        "Can changes be staged?",
                        "Yes. Stage a plan, preview who gains and loses, and publish when everyone signs off.",
                    ),
                ]
                initial_open=0
            />
        </DemoBlock>
    }
}

#[component]
fn ModalDemo() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <DemoBlock
            title="Modal"
            description="Backdrop click and Escape both close it."
        >
            <Button on_click=Callback::new(move |_| open.set(true))>
                "Open modal"
            </Button>

            <BaseModal
                title="Publish territory plan?".to_string()
                subtitle="31 accounts change owner. Reps are notified on publish.".to_string()
                is_open=open
                on_close=Callback::new(move |_| open.set(false))
                max_width="max-w-md"
            >
                <div class="flex justify-end gap-3">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| open.set(false))
                    >
                        "Cancel"
                    </Button>
                    <Button on_click=Callback::new(move |_| open.set(false))>
                        "Publish"
                    </Button>
                </div>
            </BaseModal>
        </DemoBlock>
    }
}

#[component]
fn FormDemo() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let region = RwSignal::new("west".to_string());
    let notes = RwSignal::new(String::new());
    let notify = RwSignal::new(true);

    let name_error = Signal::derive(move || {
        let value = name.get();
        (!value.is_empty() && value.trim().is_empty())
            .then(|| "Name can't be only whitespace.".to_string())
    });

    view! {
        <DemoBlock
            title="Form inputs"
            description="Text, select, textarea, and checkbox fields with labels and inline errors."
        >
            <div class="max-w-md space-y-4">
                <TextField
                    label="Territory name".to_string()
                    required=true
                    placeholder="Pacific Northwest".to_string()
                    value=Signal::derive(move || name.get())
                    on_input=Callback::new(move |v| name.set(v))
                    error=name_error
                />
                <SelectField
                    label="Region".to_string()
                    options=vec![
                        ("west".to_string(), "West".to_string()),
                        ("central".to_string(), "Central".to_string()),
                        ("east".to_string(), "East".to_string()),
                    ]
                    value=Signal::derive(move || region.get())
                    on_change=Callback::new(move |v| region.set(v))
                />
                <TextAreaField
                    label="Notes".to_string()
                    placeholder="Anything the team should know".to_string()
                    value=Signal::derive(move || notes.get())
                    on_input=Callback::new(move |v| notes.set(v))
                />
                <CheckboxField
                    label="Notify reps on publish".to_string()
                    checked=Signal::derive(move || notify.get())
                    on_change=Callback::new(move |v| notify.set(v))
                />
            </div>
        </DemoBlock>
    }
}

#[component]
fn LightboxDemo() -> impl IntoView {
    view! {
        <DemoBlock
            title="Lightbox"
            description="Thumbnail grid with a full-screen overlay. Arrow keys and the on-screen chevrons navigate, wrapping at the ends."
        >
            <Lightbox images=vec![
                LightboxImage::new("/images/shot-map.png", "Territory map view")
                    .with_caption("Boundaries over a live account map"),
                LightboxImage::new("/images/shot-balance.png", "Balance dashboard")
                    .with_caption("Pipeline and workload per territory"),
                LightboxImage::new("/images/shot-assign.png", "Assignment view")
                    .with_caption("Rule-based account assignment"),
                LightboxImage::new("/images/shot-routes.png", "Route planner")
                    .with_caption("A week of visits, routed"),
                LightboxImage::new("/images/shot-rollout.png", "Rollout preview")
                    .with_caption("Who gains and loses before publish"),
                LightboxImage::new("/images/shot-sync.png", "CRM sync status")
                    .with_caption("Two-way sync with the CRM"),
            ]/>
        </DemoBlock>
    }
}

#[component]
fn HeroDemo() -> impl IntoView {
    let variants: [(HeroVariant, &'static str); 6] = [
        (HeroVariant::Centered, "Centered"),
        (HeroVariant::Split, "Split"),
        (HeroVariant::Gradient, "Gradient"),
        (HeroVariant::Minimal, "Minimal"),
        (HeroVariant::WithStats, "WithStats"),
        (HeroVariant::WithSignup, "WithSignup"),
    ];

    view! {
        <DemoBlock
            title="Hero sections"
            description="Six layouts behind one variant enum."
        >
            <div class="space-y-10">
                {variants.map(|(variant, label)| view! {
                    <div>
                        <div class="mb-2">
                            <Badge variant=BadgeVariant::Outline>{label}</Badge>
                        </div>
                        <div class="border border-theme rounded-xl overflow-hidden scale-90 origin-top">
                            <HeroSection variant=variant content=sample_hero()/>
                        </div>
                    </div>
                })}
            </div>
        </DemoBlock>
    }
}

#[component]
fn CtaDemo() -> impl IntoView {
    let variants: [(CtaVariant, &'static str); 4] = [
        (CtaVariant::Banner, "Banner"),
        (CtaVariant::Card, "Card"),
        (CtaVariant::Split, "Split"),
        (CtaVariant::Gradient, "Gradient"),
    ];

    view! {
        <DemoBlock
            title="CTA sections"
            description="Four layouts behind one variant enum."
        >
            <div class="space-y-10">
                {variants.map(|(variant, label)| view! {
                    <div>
                        <div class="mb-2">
                            <Badge variant=BadgeVariant::Outline>{label}</Badge>
                        </div>
                        <div class="border border-theme rounded-xl overflow-hidden scale-90 origin-top">
                            <CtaSection
                                variant=variant
                                heading="Ready to redraw the map?".to_string()
                                body="Start free, upgrade when the team grows.".to_string()
                                primary=CtaLink::new("Get Started", "#")
                                secondary=CtaLink::new("Talk to Sales", "#")
                            />
                        </div>
                    </div>
                })}
            </div>
        </DemoBlock>
    }
}

#[component]
fn FaqDemo() -> impl IntoView {
    let variants: [(FaqVariant, &'static str); 3] = [
        (FaqVariant::Accordion, "Accordion"),
        (FaqVariant::TwoColumn, "TwoColumn"),
        (FaqVariant::Plain, "Plain"),
    ];

    view! {
        <DemoBlock
            title="FAQ sections"
            description="Accordion, two-column cards, or a flat list."
        >
            <div class="space-y-10">
                {variants.map(|(variant, label)| view! {
                    <div>
                        <div class="mb-2">
                            <Badge variant=BadgeVariant::Outline>{label}</Badge>
                        </div>
                        <div class="border border-theme rounded-xl overflow-hidden scale-90 origin-top">
                            <FaqSection
                                variant=variant
                                heading="Questions".to_string()
                                entries=sample_faq()
                            />
                        </div>
                    </div>
                })}
            </div>
        </DemoBlock>
    }
}

fn sample_hero() -> HeroContent {
    HeroContent {
        title: "Territories your reps actually believe in".to_string(),
        subtitle: "Draw balanced territories on a live map and keep the field team in sync."
            .to_string(),
        primary: CtaLink::new("Start Free", "#"),
        secondary: Some(CtaLink::new("See Pricing", "#")),
        image_src: Some("/images/shot-map.png".to_string()),
        stats: vec![
            HeroStat::new("38%", "less windshield time"),
            HeroStat::new("4 days", "median rollout"),
            HeroStat::new("1,200+", "teams on the map"),
        ],
    }
}

fn sample_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Can I import existing territories?",
            "Yes, from CSV or directly from your CRM.",
        ),
        FaqEntry::new(
            "Do viewers need a seat?",
            "No. Viewers are free on every plan.",
        ),
    ]
}
