use leptos::prelude::*;

use crate::content::FAQS;
use crate::showcase::toggle_expanded;

/// Single-open, collapsible accordion.
#[component]
pub fn FaqSection(on_schedule_demo: Callback<()>) -> impl IntoView {
    let (open_item, set_open_item) = signal(None::<&'static str>);

    view! {
        <section class="section faq" id="faq">
            <div class="container narrow">
                <div class="section-heading">
                    <h2>
                        "Frequently Asked"
                        <span class="gradient-text block">"Questions"</span>
                    </h2>
                    <p>
                        "Got questions? We've got answers. Learn more about how RecruitPro AI \
                         can transform your recruitment process and address common concerns."
                    </p>
                </div>

                <div class="accordion">
                    {FAQS.iter().map(|faq| {
                        let id = faq.id;
                        let is_open = move || open_item.get() == Some(id);
                        view! {
                            <div class="card accordion-item" class:accordion-item-open=is_open>
                                <button
                                    type="button"
                                    class="accordion-trigger"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| set_open_item.update(|cur| *cur = toggle_expanded(*cur, id))
                                >
                                    <span>{faq.question}</span>
                                    <span class="accordion-chevron">{move || if is_open() { "−" } else { "+" }}</span>
                                </button>
                                {move || is_open().then(|| view! {
                                    <div class="accordion-content">{faq.answer}</div>
                                })}
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="card callout">
                    <h3>"Still have questions?"</h3>
                    <p class="muted">
                        "Our team is here to help you understand how RecruitPro AI can work for your organization."
                    </p>
                    <div class="button-row center">
                        <button class="btn btn-hero" on:click=move |_| on_schedule_demo.run(())>
                            "Schedule a Demo"
                        </button>
                        <a class="btn btn-outline" href="mailto:support@recruitpro.ai">"Contact Support"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
