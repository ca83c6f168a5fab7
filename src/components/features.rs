use leptos::prelude::*;

use crate::content::FEATURES;
use crate::showcase::toggle_expanded;

/// Feature grid. At most one card is expanded at a time.
#[component]
pub fn FeaturesSection() -> impl IntoView {
    let (expanded, set_expanded) = signal(None::<&'static str>);

    view! {
        <section class="section features" id="features">
            <div class="container">
                <div class="section-heading">
                    <h2>
                        "Powerful Features for"
                        <span class="gradient-text block">"Modern Recruitment"</span>
                    </h2>
                    <p>
                        "Discover how our AI-powered platform transforms every aspect of your hiring process, \
                         from candidate sourcing to final selection."
                    </p>
                </div>

                <div class="feature-grid">
                    {FEATURES.iter().map(|feature| {
                        let id = feature.id;
                        let is_open = move || expanded.get() == Some(id);
                        view! {
                            <div
                                class="card feature-card"
                                class:feature-card-open=is_open
                                on:click=move |_| set_expanded.update(|cur| *cur = toggle_expanded(*cur, id))
                            >
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p class="muted">{feature.short_description}</p>
                                {move || is_open().then(|| view! {
                                    <div class="feature-details">
                                        <p>{feature.full_description}</p>
                                        <h4>"Key Benefits:"</h4>
                                        <ul class="check-list">
                                            {feature.benefits.iter().map(|b| view! { <li>{*b}</li> }).collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                })}
                                <span class="feature-toggle">
                                    {move || if is_open() { "Show less" } else { "Learn more" }}
                                </span>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
