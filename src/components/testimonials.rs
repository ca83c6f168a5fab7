//! Testimonial carousel with auto-play.

use leptos::prelude::*;
use tracing::warn;

use crate::config::SiteConfig;
use crate::content::{TESTIMONIALS, TRUSTED_COMPANIES};
use crate::showcase::Carousel;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    match set_interval_with_handle(
        move || {
            carousel.try_update(|c| c.tick());
        },
        config.carousel_interval(),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => warn!("Carousel auto-play unavailable: {:?}", e),
    }

    let current = move || TESTIMONIALS[carousel.with(|c| c.current())];

    view! {
        <section class="section testimonials" id="testimonials">
            <div class="container">
                <div class="section-heading">
                    <h2>
                        "Trusted by"
                        <span class="gradient-text block">"Industry Leaders"</span>
                    </h2>
                    <p>
                        "See how companies across industries are transforming their recruitment \
                         with RecruitPro AI and achieving exceptional results."
                    </p>
                </div>

                <div class="carousel">
                    {move || {
                        let t = current();
                        view! {
                            <div class="card testimonial-card">
                                <div class="rating" aria-label=format!("{} out of 5 stars", t.rating)>
                                    {"★".repeat(usize::from(t.rating))}
                                </div>
                                <blockquote class="testimonial-quote">{format!("\u{201c}{}\u{201d}", t.quote)}</blockquote>
                                <div class="testimonial-footer">
                                    <div class="testimonial-author">
                                        <div class="avatar">{t.initials}</div>
                                        <div>
                                            <div class="author-name">{t.name}</div>
                                            <div class="muted">{t.role}</div>
                                            <div class="author-company">{t.company}</div>
                                        </div>
                                    </div>
                                    <div class="testimonial-metrics">
                                        {t.metrics.iter().map(|m| view! {
                                            <div class="stat">
                                                <div class="stat-value gradient-text">{m.value}</div>
                                                <div class="stat-label">{m.label}</div>
                                            </div>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </div>
                        }
                    }}

                    <div class="carousel-controls">
                        <button
                            type="button"
                            class="carousel-nav"
                            aria-label="Previous testimonial"
                            on:click=move |_| carousel.update(|c| c.prev())
                        >
                            "‹"
                        </button>
                        <div class="carousel-dots">
                            {(0..TESTIMONIALS.len()).map(|i| view! {
                                <button
                                    type="button"
                                    class="carousel-dot"
                                    class:carousel-dot-active=move || carousel.with(|c| c.current() == i)
                                    aria-label=format!("Go to testimonial {}", i + 1)
                                    on:click=move |_| carousel.update(|c| c.go_to(i))
                                ></button>
                            }).collect::<Vec<_>>()}
                        </div>
                        <button
                            type="button"
                            class="carousel-nav"
                            aria-label="Next testimonial"
                            on:click=move |_| carousel.update(|c| c.next())
                        >
                            "›"
                        </button>
                        <button
                            type="button"
                            class="carousel-toggle"
                            on:click=move |_| carousel.update(|c| c.toggle_auto_play())
                        >
                            {move || if carousel.with(|c| c.is_auto_playing()) { "Pause" } else { "Play" }}
                        </button>
                    </div>
                </div>

                <div class="trusted-by">
                    <p class="muted">"Trusted by 500+ companies worldwide"</p>
                    <div class="company-strip">
                        {TRUSTED_COMPANIES.iter().map(|name| view! {
                            <span class="company-name">{*name}</span>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
