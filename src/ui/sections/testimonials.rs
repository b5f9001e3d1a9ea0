//! Customer quote strip.

use leptos::prelude::*;

/// One customer quote
#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    pub company: String,
}

impl Testimonial {
    pub fn new(
        quote: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            name: name.into(),
            role: role.into(),
            company: company.into(),
        }
    }
}

#[component]
pub fn TestimonialRow(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
                {testimonials.into_iter().map(|t| view! {
                    <figure class="landing-scroll-animate bg-theme-primary border border-theme rounded-xl p-6 flex flex-col">
                        <blockquote class="text-theme-primary leading-relaxed mb-6 flex-1">
                            "\u{201c}" {t.quote} "\u{201d}"
                        </blockquote>
                        <figcaption>
                            <div class="font-semibold text-theme-primary">{t.name}</div>
                            <div class="text-sm text-theme-tertiary">
                                {t.role} ", " {t.company}
                            </div>
                        </figcaption>
                    </figure>
                }).collect_view()}
            </div>
        </section>
    }
}
