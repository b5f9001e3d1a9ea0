//! Pricing section with a monthly/yearly billing toggle.

use leptos::prelude::*;

use super::CtaLink;
use crate::ui::common::{Badge, BadgeVariant};
use crate::ui::icon::{Icon, icons};
use leptos_router::components::A;

/// Billing period selected by the toggle
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/seat/month",
            BillingPeriod::Yearly => "/seat/month, billed yearly",
        }
    }
}

/// One plan card
#[derive(Clone, PartialEq)]
pub struct PricingPlan {
    pub name: String,
    /// Monthly price in cents; None renders as "Custom"
    pub monthly_cents: Option<u32>,
    /// Percentage taken off the monthly price when billed yearly
    pub yearly_discount_percent: u32,
    pub description: String,
    /// (feature, included) pairs
    pub features: Vec<(String, bool)>,
    pub cta: CtaLink,
    pub highlighted: bool,
}

impl PricingPlan {
    /// Effective per-month price in cents for the given billing period.
    pub fn price_cents(&self, period: BillingPeriod) -> Option<u32> {
        let monthly = self.monthly_cents?;
        Some(match period {
            BillingPeriod::Monthly => monthly,
            BillingPeriod::Yearly => monthly * (100 - self.yearly_discount_percent) / 100,
        })
    }

    /// Price as displayed on the card ("$49", "$0", "Custom").
    pub fn display_price(&self, period: BillingPeriod) -> String {
        match self.price_cents(period) {
            None => "Custom".to_string(),
            Some(cents) if cents % 100 == 0 => format!("${}", cents / 100),
            Some(cents) => format!("${}.{:02}", cents / 100, cents % 100),
        }
    }
}

#[component]
pub fn PricingSection(
    heading: String,
    subheading: String,
    plans: Vec<PricingPlan>,
    /// Footnote shown under the cards
    #[prop(optional)]
    footnote: Option<String>,
) -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::Monthly);

    view! {
        <section id="pricing" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-10 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{heading}</h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">{subheading}</p>
                </div>

                <div class="flex justify-center mb-12">
                    <BillingToggle period=period/>
                </div>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {plans.into_iter().map(|plan| view! {
                        <PricingCard plan=plan period=period.read_only()/>
                    }).collect_view()}
                </div>

                {footnote.map(|note| view! {
                    <p class="text-center text-theme-tertiary text-sm mt-8 landing-scroll-animate">
                        {note}
                    </p>
                })}
            </div>
        </section>
    }
}

/// Two-button segmented control bound to the billing period
#[component]
fn BillingToggle(period: RwSignal<BillingPeriod>) -> impl IntoView {
    view! {
        <div class="inline-flex items-center p-1 rounded-xl bg-theme-secondary/50 border border-theme" role="group">
            {[BillingPeriod::Monthly, BillingPeriod::Yearly].map(|option| {
                let is_active = Signal::derive(move || period.get() == option);
                view! {
                    <button
                        class=move || {
                            if is_active.get() {
                                "px-4 py-1.5 rounded-lg text-sm font-medium bg-theme-primary text-theme-primary shadow"
                            } else {
                                "px-4 py-1.5 rounded-lg text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                            }
                        }
                        on:click=move |_| period.set(option)
                        aria-pressed=move || is_active.get()
                    >
                        {option.label()}
                        {(option == BillingPeriod::Yearly).then(|| view! {
                            <span class="ml-1.5 text-xs text-emerald-600 dark:text-emerald-400">"-20%"</span>
                        })}
                    </button>
                }
            })}
        </div>
    }
}

#[component]
fn PricingCard(plan: PricingPlan, period: ReadSignal<BillingPeriod>) -> impl IntoView {
    let card_class = if plan.highlighted {
        "landing-scroll-animate relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl"
    } else {
        "landing-scroll-animate bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };

    let plan_for_price = plan.clone();
    let CtaLink {
        label: cta_label,
        href: cta_href,
    } = plan.cta.clone();
    let cta_class = if plan.highlighted {
        "block w-full text-center py-3 px-6 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl transition-colors"
    } else {
        "block w-full text-center py-3 px-6 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold rounded-xl transition-colors"
    };

    view! {
        <div class=card_class>
            {plan.highlighted.then(|| view! {
                <div class="absolute -top-3 left-1/2 -translate-x-1/2">
                    <Badge variant=BadgeVariant::Primary>"Most Popular"</Badge>
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{plan.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">
                        {move || plan_for_price.display_price(period.get())}
                    </span>
                    {plan.monthly_cents.is_some().then(|| view! {
                        <span class="text-theme-secondary text-sm">
                            {move || period.get().suffix()}
                        </span>
                    })}
                </div>
                <p class="text-sm text-theme-secondary mt-2">{plan.description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {plan.features.into_iter().map(|(feature, included)| {
                    view! {
                        <li class="flex items-center gap-3">
                            {if included {
                                view! {
                                    <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0"/>
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::X class="w-5 h-5 flex-shrink-0 opacity-40"/>
                                }.into_any()
                            }}
                            <span class=if included { "text-theme-primary" } else { "text-theme-tertiary" }>
                                {feature}
                            </span>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <A href=cta_href attr:class=cta_class>
                {cta_label}
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(monthly_cents: Option<u32>, discount: u32) -> PricingPlan {
        PricingPlan {
            name: "Pro".to_string(),
            monthly_cents,
            yearly_discount_percent: discount,
            description: String::new(),
            features: vec![],
            cta: CtaLink::new("Start", "/signup"),
            highlighted: false,
        }
    }

    #[test]
    fn test_monthly_price_is_list_price() {
        assert_eq!(plan(Some(4900), 20).price_cents(BillingPeriod::Monthly), Some(4900));
    }

    #[test]
    fn test_yearly_price_applies_discount() {
        assert_eq!(plan(Some(4900), 20).price_cents(BillingPeriod::Yearly), Some(3920));
        assert_eq!(plan(Some(4900), 0).price_cents(BillingPeriod::Yearly), Some(4900));
    }

    #[test]
    fn test_display_price_whole_dollars() {
        assert_eq!(plan(Some(4900), 20).display_price(BillingPeriod::Monthly), "$49");
        assert_eq!(plan(Some(0), 20).display_price(BillingPeriod::Monthly), "$0");
    }

    #[test]
    fn test_display_price_keeps_cents() {
        assert_eq!(plan(Some(4900), 20).display_price(BillingPeriod::Yearly), "$39.20");
    }

    #[test]
    fn test_custom_plan_has_no_numeric_price() {
        let custom = plan(None, 20);

        assert_eq!(custom.price_cents(BillingPeriod::Yearly), None);
        assert_eq!(custom.display_price(BillingPeriod::Monthly), "Custom");
    }
}
