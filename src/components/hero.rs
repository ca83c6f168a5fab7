use leptos::prelude::*;

use crate::content::HERO_STATS;

#[component]
pub fn HeroSection(on_request_demo: Callback<()>) -> impl IntoView {
    view! {
        <section class="section hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        "Transform Your"
                        <span class="gradient-text block">"Hiring Process"</span>
                        "with AI"
                    </h1>
                    <p class="hero-lead">
                        "RecruitPro AI revolutionizes recruitment with intelligent candidate matching, \
                         automated screening, and data-driven insights. Find the perfect talent faster than ever."
                    </p>
                    <div class="button-row">
                        <button class="btn btn-hero" on:click=move |_| on_request_demo.run(())>
                            "Request a Demo"
                        </button>
                        <button class="btn btn-outline">"Watch Video"</button>
                    </div>
                    <div class="hero-stats">
                        {HERO_STATS.iter().map(|stat| view! {
                            <div class="stat">
                                <div class="stat-value gradient-text">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="hero-visual" aria-hidden="true">
                    <div class="hero-panel">
                        <div class="hero-panel-row"></div>
                        <div class="hero-panel-row short"></div>
                        <div class="hero-panel-row"></div>
                    </div>
                    <div class="hero-badge hero-badge-live">"Live Matching"</div>
                    <div class="hero-badge hero-badge-accuracy">
                        <span class="stat-label">"AI Accuracy"</span>
                        <span class="stat-value gradient-text">"98.5%"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
