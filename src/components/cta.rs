use leptos::prelude::*;

use crate::content::{CTA_BENEFITS, TRUST_INDICATORS};

#[component]
pub fn CtaSection(on_get_started: Callback<()>, on_schedule_demo: Callback<()>) -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="container narrow center">
                <h2 class="cta-title">
                    "Ready to Transform"
                    <span class="gradient-text block">"Your Hiring Process?"</span>
                </h2>
                <p class="cta-lead">
                    "Join 500+ companies already using RecruitPro AI to hire better talent faster. \
                     Start your transformation today with our risk-free trial."
                </p>

                <ul class="benefit-list">
                    {CTA_BENEFITS.iter().map(|b| view! { <li>"✓ " {*b}</li> }).collect::<Vec<_>>()}
                </ul>

                <div class="button-row center">
                    <button class="btn btn-hero btn-large" on:click=move |_| on_get_started.run(())>
                        "Get Started Free →"
                    </button>
                    <button class="btn btn-outline btn-large" on:click=move |_| on_schedule_demo.run(())>
                        "Schedule Demo"
                    </button>
                </div>

                <div class="trust-grid">
                    {TRUST_INDICATORS.iter().map(|stat| view! {
                        <div class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
