//! Landing page component
//!
//! The Terramark product page:
//! - SEO meta tags for search engine optimization
//! - Hero section with start and watch-demo buttons
//! - Feature grid with benefit cards
//! - Animated territory-map section with a cursor assigning accounts
//! - Pricing section with a monthly/yearly billing toggle
//! - FAQ accordion
//! - Demo-request form in a modal, submitted through a server function
//! - Call-to-action and footer sections

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::lead::{DemoRequest, LeadReceipt, submit_demo_request};
use crate::ui::common::{
    BaseModal, Button, ButtonVariant, SelectField, TextAreaField, TextField, VideoModal,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::{
    CtaLink, CtaSection, CtaVariant, FaqEntry, FaqSection, FeatureGrid, FeatureItem, HeroContent,
    HeroSection, HeroVariant, PricingPlan, PricingSection, SiteFooter, SiteHeader, Testimonial,
    TestimonialRow,
};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let demo_form_open = RwSignal::new(false);
    let video_open = RwSignal::new(false);

    let hero = HeroContent {
        title: "Territories your reps actually believe in".to_string(),
        subtitle: "Draw balanced sales territories on a live map, assign accounts fairly, and keep \
                   the whole field team in sync."
            .to_string(),
        primary: CtaLink::new("Start Free", "https://app.terramark.io/signup"),
        secondary: Some(CtaLink::new("See Pricing", "#pricing")),
        image_src: None,
        stats: vec![],
    };

    view! {
        // SEO Meta Tags
        <SeoMeta/>

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <SiteHeader/>

            <div class="pt-16">
                <HeroSection variant=HeroVariant::Centered content=hero/>

                // Secondary hero actions: demo video + demo request
                <div class="flex items-center justify-center gap-6 -mt-12 mb-12 landing-fade-in-up landing-delay-400">
                    <button
                        class="flex items-center gap-2 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                        on:click=move |_| video_open.set(true)
                    >
                        <Icon name=icons::PLAY class="w-4 h-4"/>
                        "Watch the demo"
                    </button>
                    <button
                        class="flex items-center gap-2 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                        on:click=move |_| demo_form_open.set(true)
                    >
                        <Icon name=icons::MAIL class="w-4 h-4"/>
                        "Talk to sales"
                    </button>
                </div>

                <FeatureGrid
                    heading="Why Terramark?".to_string()
                    subheading="Everything you need to carve, balance, and roll out territories without spreadsheet archaeology.".to_string()
                    items=feature_items()
                />

                <TerritoryDemoSection/>

                <TestimonialRow testimonials=testimonials()/>

                <PricingSection
                    heading="Simple, Transparent Pricing".to_string()
                    subheading="Start for free. Upgrade when your team grows.".to_string()
                    plans=pricing_plans()
                    footnote="All paid plans include a 14-day free trial. No credit card required.".to_string()
                />

                <FaqSection
                    heading="Frequently Asked Questions".to_string()
                    subheading="Got questions? We've got answers.".to_string()
                    entries=faq_entries()
                />

                <CtaSection
                    variant=CtaVariant::Gradient
                    heading="Ready to redraw the map?".to_string()
                    body="Join revenue teams that plan territories in Terramark instead of spreadsheets.".to_string()
                    primary=CtaLink::new("Get Started Free", "https://app.terramark.io/signup")
                    secondary=CtaLink::new("Browse Components", "/components")
                />

                <SiteFooter/>
            </div>

            // Modals
            <DemoRequestModal is_open=demo_form_open/>
            <VideoModal
                video_url="https://player.vimeo.com/video/terramark-demo".to_string()
                is_open=video_open
                on_close=Callback::new(move |_| video_open.set(false))
            />

            // CSS Animations
            <LandingStyles/>

            // Intersection Observer for scroll animations
            <ScrollAnimationScript/>
        </div>
    }
}

fn feature_items() -> Vec<FeatureItem> {
    vec![
        FeatureItem::new(
            icons::MAP_PIN,
            "Visual Territory Drawing",
            "Sketch boundaries directly on the map. Zip codes, counties, or freehand polygons.",
        ),
        FeatureItem::new(
            icons::CHART,
            "Workload Balancing",
            "See pipeline, account count, and drive time per territory while you draw.",
        ),
        FeatureItem::new(
            icons::USERS,
            "Fair Account Assignment",
            "Assign accounts by rule or by hand, with conflicts surfaced before rollout.",
        ),
        FeatureItem::new(
            icons::ROUTE,
            "Route Planning",
            "Turn a week of visits into a sensible route instead of a zigzag.",
        ),
        FeatureItem::new(
            icons::MAIL,
            "CRM Sync",
            "Push territory ownership back to your CRM, and pull fresh accounts nightly.",
        ),
        FeatureItem::new(
            icons::SHIELD,
            "Roll Out with Confidence",
            "Stage changes, preview who gains and loses, and publish when everyone signs off.",
        ),
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "We cut territory planning from six weeks to four days, and nobody stormed out of the kickoff.",
            "Priya Natarajan",
            "VP Sales",
            "Corvid Medical",
        ),
        Testimonial::new(
            "The balance view ended a two-year argument about who had the better half of Ohio.",
            "Marcus Bell",
            "RevOps Lead",
            "Halvorsen Foods",
        ),
        Testimonial::new(
            "Reps finally trust the map. That alone was worth the switch.",
            "Ana Sofia Duarte",
            "Sales Director",
            "Brightline Robotics",
        ),
    ]
}

fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Starter".to_string(),
            monthly_cents: Some(0),
            yearly_discount_percent: 0,
            description: "For one team mapping its first patch".to_string(),
            features: vec![
                ("1 territory plan".to_string(), true),
                ("Up to 3 seats".to_string(), true),
                ("Map drawing & balancing".to_string(), true),
                ("CSV import".to_string(), true),
                ("CRM sync".to_string(), false),
                ("Route planning".to_string(), false),
                ("Priority support".to_string(), false),
            ],
            cta: CtaLink::new("Get Started", "https://app.terramark.io/signup"),
            highlighted: false,
        },
        PricingPlan {
            name: "Growth".to_string(),
            monthly_cents: Some(4900),
            yearly_discount_percent: 20,
            description: "For sales teams that redraw every quarter".to_string(),
            features: vec![
                ("Unlimited territory plans".to_string(), true),
                ("Up to 25 seats".to_string(), true),
                ("Map drawing & balancing".to_string(), true),
                ("CSV import".to_string(), true),
                ("CRM sync".to_string(), true),
                ("Route planning".to_string(), true),
                ("Priority support".to_string(), false),
            ],
            cta: CtaLink::new("Start Free Trial", "https://app.terramark.io/signup?plan=growth"),
            highlighted: true,
        },
        PricingPlan {
            name: "Enterprise".to_string(),
            monthly_cents: None,
            yearly_discount_percent: 0,
            description: "For orgs with regions, overlays, and audits".to_string(),
            features: vec![
                ("Everything in Growth".to_string(), true),
                ("Unlimited seats".to_string(), true),
                ("SSO & SAML".to_string(), true),
                ("Audit logs".to_string(), true),
                ("Custom data residency".to_string(), true),
                ("Dedicated onboarding".to_string(), true),
                ("Priority support".to_string(), true),
            ],
            cta: CtaLink::new("Contact Sales", "mailto:sales@terramark.io"),
            highlighted: false,
        },
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "What is Terramark?",
            "Terramark is a territory-mapping tool for sales teams. You draw territories on a live \
             map, balance them by pipeline and workload, assign accounts, and publish the result \
             back to your CRM.",
        ),
        FaqEntry::new(
            "Can I import my existing territories?",
            "Yes. Upload a CSV of accounts with owners, or connect your CRM, and Terramark \
             reconstructs your current map as a starting point.",
        ),
        FaqEntry::new(
            "Which CRMs do you sync with?",
            "Salesforce and HubSpot today. The sync is two-way: ownership changes flow out, new \
             accounts flow in nightly.",
        ),
        FaqEntry::new(
            "How does workload balancing work?",
            "Every territory shows live totals for account count, open pipeline, and estimated \
             drive time as you move boundaries. You decide what balanced means; the map keeps \
             score.",
        ),
        FaqEntry::new(
            "Do reps need their own licenses?",
            "Viewers are free on every plan. Only people who edit maps or assignments need a seat.",
        ),
        FaqEntry::new(
            "Is my account data secure?",
            "All data is encrypted in transit and at rest, and Enterprise plans can pin data \
             residency to a region. We never share your accounts with anyone.",
        ),
    ]
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="Terramark - Sales Territory Mapping"/>

        // Basic meta tags
        <Meta name="description" content="Draw balanced sales territories on a live map, assign accounts fairly, and keep the whole field team in sync. Free to start."/>
        <Meta name="keywords" content="sales territory mapping, territory management, territory design, account assignment, route planning, sales operations"/>

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content="https://terramark.io/"/>
        <Meta property="og:title" content="Terramark - Sales Territory Mapping"/>
        <Meta property="og:description" content="Draw balanced sales territories on a live map, assign accounts fairly, and keep the whole field team in sync."/>
        <Meta property="og:image" content="https://terramark.io/og-image.png"/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:url" content="https://terramark.io/"/>
        <Meta property="twitter:title" content="Terramark - Sales Territory Mapping"/>
        <Meta property="twitter:description" content="Draw balanced sales territories on a live map, assign accounts fairly, and keep the whole field team in sync."/>
        <Meta property="twitter:image" content="https://terramark.io/og-image.png"/>

        // Canonical URL
        <Link rel="canonical" href="https://terramark.io/"/>

        // JSON-LD Structured Data (inline script)
        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"SoftwareApplication","name":"Terramark","applicationCategory":"BusinessApplication","operatingSystem":"Web","description":"Sales territory mapping with live workload balancing, account assignment, and CRM sync","url":"https://terramark.io","author":{"@type":"Organization","name":"Terramark"},"offers":{"@type":"Offer","price":"0","priceCurrency":"USD"}}"#></script>
    }
}

/// Animated territory-map section: a cursor drags an account card into a
/// territory while the balance ticker updates
#[component]
fn TerritoryDemoSection() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center py-20 px-4">
            <div class="max-w-6xl mx-auto w-full">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-4xl sm:text-5xl font-bold text-theme-primary mb-4">
                        "Balance While You Draw"
                    </h2>
                    <p class="text-xl text-theme-secondary max-w-2xl mx-auto">
                        "Move a boundary and watch pipeline, account count, and drive time rebalance in real time."
                    </p>
                </div>

                // Animated map canvas
                <div class="relative h-96 bg-theme-secondary/30 rounded-2xl border border-theme overflow-hidden landing-scroll-animate">
                    // Grid background
                    <div class="absolute inset-0 opacity-20 landing-grid-bg" aria-hidden="true"></div>

                    // Stylized territory polygons
                    <svg class="absolute inset-0 w-full h-full" viewBox="0 0 1152 384" preserveAspectRatio="none" aria-hidden="true">
                        <polygon
                            points="60,60 420,40 460,200 320,330 80,300"
                            fill="#2563eb" fill-opacity="0.12" stroke="#2563eb" stroke-width="2"
                            class="landing-territory-west"
                        />
                        <polygon
                            points="460,200 420,40 780,70 820,240 640,340 320,330"
                            fill="#10b981" fill-opacity="0.12" stroke="#10b981" stroke-width="2"
                            class="landing-territory-central"
                        />
                        <polygon
                            points="780,70 1090,90 1070,320 820,240"
                            fill="#f59e0b" fill-opacity="0.12" stroke="#f59e0b" stroke-width="2"
                        />
                    </svg>

                    // Territory stat cards
                    <div class="absolute top-8 left-[8%]">
                        <TerritoryCard name="West" accounts="132" pipeline="$2.1M" color="#2563eb"/>
                    </div>
                    <div class="absolute top-1/2 left-[42%] landing-card-central">
                        <TerritoryCard name="Central" accounts="118" pipeline="$1.9M" color="#10b981"/>
                    </div>
                    <div class="absolute top-12 right-[6%]">
                        <TerritoryCard name="East" accounts="127" pipeline="$2.0M" color="#f59e0b"/>
                    </div>

                    // Account chip dragged between territories by the cursor
                    <div class="absolute landing-account-chip" style="z-index: 3;">
                        <div class="flex items-center gap-2 px-3 py-1.5 bg-theme-primary border border-theme rounded-full shadow-lg text-sm">
                            <span class="w-2 h-2 rounded-full bg-accent-primary"></span>
                            <span class="text-theme-primary font-medium">"Acme Corp"</span>
                        </div>
                        <div class="absolute -top-2 -right-3">
                            <AnimatedCursor color="#2563eb" label="You"/>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Territory stat card for the animated map
#[component]
fn TerritoryCard(
    name: &'static str,
    accounts: &'static str,
    pipeline: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-theme-primary rounded-lg border border-theme shadow-xl overflow-hidden min-w-[150px]" style="z-index: 2;">
            <div class="px-3 py-2 border-b border-theme flex items-center gap-2">
                <span class="w-2.5 h-2.5 rounded-full" style=format!("background-color: {};", color)></span>
                <span class="font-semibold text-theme-primary text-sm">{name}</span>
            </div>
            <div class="px-3 py-2 text-xs space-y-1">
                <div class="flex justify-between gap-4">
                    <span class="text-theme-tertiary">"Accounts"</span>
                    <span class="text-theme-primary font-medium tabular-nums">{accounts}</span>
                </div>
                <div class="flex justify-between gap-4">
                    <span class="text-theme-tertiary">"Pipeline"</span>
                    <span class="text-theme-primary font-medium tabular-nums">{pipeline}</span>
                </div>
            </div>
        </div>
    }
}

/// Animated cursor component
#[component]
fn AnimatedCursor(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="relative">
            // Cursor pointer
            <svg
                class="w-5 h-5 drop-shadow-lg"
                viewBox="0 0 24 24"
                fill=color
                aria-hidden="true"
            >
                <path d="M5.5 3.21V20.8c0 .45.54.67.85.35l4.86-4.86a.5.5 0 0 1 .35-.15h6.87c.48 0 .72-.58.38-.92L6.35 2.85a.5.5 0 0 0-.85.36Z"/>
            </svg>
            // Label
            <div
                class="absolute left-4 top-4 px-2 py-0.5 rounded text-xs font-medium text-white whitespace-nowrap shadow-md"
                style=format!("background-color: {};", color)
            >
                {label}
            </div>
        </div>
    }
}

/// Demo-request form in a modal, submitted through the lead server function
#[component]
fn DemoRequestModal(is_open: RwSignal<bool>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let team_size = RwSignal::new("1-10".to_string());
    let message = RwSignal::new(String::new());

    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let receipt = RwSignal::new(None::<LeadReceipt>);

    let reset = move || {
        error.set(None);
        submitting.set(false);
        receipt.set(None);
    };

    let on_close = Callback::new(move |_| {
        is_open.set(false);
        reset();
    });

    let on_submit = move |_| {
        let request = DemoRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            team_size: team_size.get_untracked(),
            message: message.get_untracked(),
        };

        // Same validation the server runs, surfaced before the round trip
        if let Err(e) = request.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);

        leptos::task::spawn_local(async move {
            match submit_demo_request(request).await {
                Ok(r) => {
                    receipt.set(Some(r));
                    submitting.set(false);

                    // Leave the confirmation up briefly, then close
                    #[cfg(feature = "hydrate")]
                    {
                        gloo_timers::future::TimeoutFuture::new(2_000).await;
                        is_open.set(false);
                        reset();
                    }
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <BaseModal
            title="Talk to sales".to_string()
            subtitle="Tell us about your team and we'll set up a walkthrough.".to_string()
            is_open=Signal::derive(move || is_open.get())
            on_close=on_close
            max_width="max-w-lg"
        >
            {move || {
                if receipt.get().is_some() {
                    view! {
                        <div class="py-8 text-center">
                            <div class="w-12 h-12 mx-auto mb-4 bg-emerald-500/10 rounded-full flex items-center justify-center">
                                <Icon name=icons::CHECK class="w-6 h-6"/>
                            </div>
                            <p class="font-semibold text-theme-primary mb-1">"Request received!"</p>
                            <p class="text-sm text-theme-secondary">"We'll reach out within one business day."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="space-y-4">
                            <TextField
                                label="Name".to_string()
                                required=true
                                placeholder="Dana Reyes".to_string()
                                value=Signal::derive(move || name.get())
                                on_input=Callback::new(move |v| name.set(v))
                            />
                            <TextField
                                label="Work email".to_string()
                                required=true
                                input_type="email"
                                placeholder="you@company.com".to_string()
                                value=Signal::derive(move || email.get())
                                on_input=Callback::new(move |v| email.set(v))
                            />
                            <TextField
                                label="Company".to_string()
                                required=true
                                placeholder="Northwind Logistics".to_string()
                                value=Signal::derive(move || company.get())
                                on_input=Callback::new(move |v| company.set(v))
                            />
                            <SelectField
                                label="Field team size".to_string()
                                options=vec![
                                    ("1-10".to_string(), "1-10 reps".to_string()),
                                    ("11-50".to_string(), "11-50 reps".to_string()),
                                    ("51-200".to_string(), "51-200 reps".to_string()),
                                    ("200+".to_string(), "200+ reps".to_string()),
                                ]
                                value=Signal::derive(move || team_size.get())
                                on_change=Callback::new(move |v| team_size.set(v))
                            />
                            <TextAreaField
                                label="Anything else?".to_string()
                                placeholder="Current tools, regions, timelines...".to_string()
                                value=Signal::derive(move || message.get())
                                on_input=Callback::new(move |v| message.set(v))
                            />

                            {move || error.get().map(|e| view! {
                                <div class="flex items-center gap-2 text-sm text-theme-error">
                                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                                    <span>{e}</span>
                                </div>
                            })}

                            <div class="flex justify-end gap-3 pt-2">
                                <Button
                                    variant=ButtonVariant::Secondary
                                    on_click=Callback::new(move |_| on_close.run(()))
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    variant=ButtonVariant::Primary
                                    loading=submitting.get()
                                    on_click=Callback::new(on_submit)
                                >
                                    "Request demo"
                                </Button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </BaseModal>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Grid background */
            .landing-grid-bg {
                background-image: radial-gradient(circle, currentColor 1px, transparent 1px);
                background-size: 24px 24px;
            }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Territory map: boundary pulse on the two territories trading an account */
            @keyframes landing-territory-pulse {
                0%, 35%, 100% { stroke-width: 2; }
                45%, 70% { stroke-width: 4; }
            }

            .landing-territory-west { animation: landing-territory-pulse 9s ease-in-out infinite; }
            .landing-territory-central { animation: landing-territory-pulse 9s ease-in-out infinite; animation-delay: 0.3s; }

            /* Account chip dragged from West into Central */
            @keyframes landing-chip-drag {
                0%, 10% {
                    top: 55%;
                    left: 18%;
                    opacity: 0;
                }
                20% { opacity: 1; }
                45%, 75% {
                    top: 68%;
                    left: 44%;
                    opacity: 1;
                }
                90%, 100% {
                    top: 68%;
                    left: 44%;
                    opacity: 0;
                }
            }

            .landing-account-chip {
                animation: landing-chip-drag 9s ease-in-out infinite;
            }

            /* Central card nudges when the chip lands */
            @keyframes landing-card-bump {
                0%, 40%, 100% { transform: scale(1); }
                48%, 56% { transform: scale(1.04); }
            }

            .landing-card-central {
                animation: landing-card-bump 9s ease-in-out infinite;
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
