use leptos::prelude::*;

use crate::content::STEPS;

#[component]
pub fn HowItWorksSection(on_start_trial: Callback<()>) -> impl IntoView {
    view! {
        <section class="section how-it-works" id="how-it-works">
            <div class="container">
                <div class="section-heading">
                    <h2>"How It Works"</h2>
                    <p>
                        "Get started in minutes with our streamlined 3-step process. \
                         Our AI does the heavy lifting while you focus on making the best hiring decisions."
                    </p>
                </div>

                <div class="step-grid">
                    {STEPS.iter().map(|step| view! {
                        <div class="card step-card">
                            <div class="step-number">{step.number}</div>
                            <div class="step-icon">{step.icon}</div>
                            <h3>{step.title}</h3>
                            <p class="muted">{step.description}</p>
                            <ul class="check-list">
                                {step.details.iter().map(|d| view! { <li>{*d}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="card callout">
                    <h3>"Ready to transform your hiring?"</h3>
                    <p class="muted">"Start your free trial today and experience the power of AI recruitment."</p>
                    <button class="btn btn-hero" on:click=move |_| on_start_trial.run(())>
                        "Start Free Trial"
                    </button>
                </div>
            </div>
        </section>
    }
}
