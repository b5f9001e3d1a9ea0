//! Site footer with link columns.

use leptos::prelude::*;
use leptos_router::components::A;

use super::header::Logo;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo/>
                            <span class="text-xl font-bold text-theme-primary">"Terramark"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "Design balanced sales territories on a live map, assign accounts fairly, and keep the whole field team in sync."
                        </p>
                    </div>

                    // Product links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#features" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Features"
                                </a>
                            </li>
                            <li>
                                <a href="#pricing" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Pricing"
                                </a>
                            </li>
                            <li>
                                <A href="/components" attr:class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Component Library"
                                </A>
                            </li>
                        </ul>
                    </div>

                    // Company
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Company"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="mailto:hello@terramark.io"
                                   class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Contact"
                                </a>
                            </li>
                            <li>
                                <a href="https://github.com/terramark-io/terramark-site" target="_blank" rel="noopener noreferrer"
                                   class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "GitHub"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2026 Terramark. Built with Rust & Leptos."
                    </span>
                    <div class="flex items-center gap-4">
                        <a href="https://github.com/terramark-io/terramark-site" target="_blank" rel="noopener noreferrer"
                           class="text-theme-tertiary hover:text-theme-primary transition-colors"
                           aria-label="GitHub repository">
                            <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>
                            </svg>
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
