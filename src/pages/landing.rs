//! The single marketing page.
//!
//! Owns both dialogs' open flags; every call-to-action in the sections only
//! flips one of them.

use leptos::prelude::*;

use crate::components::book_demo_modal::BookDemoModal;
use crate::components::cta::CtaSection;
use crate::components::faq::FaqSection;
use crate::components::features::FeaturesSection;
use crate::components::free_trial_modal::FreeTrialModal;
use crate::components::hero::HeroSection;
use crate::components::how_it_works::HowItWorksSection;
use crate::components::testimonials::TestimonialsSection;

#[component]
pub fn LandingPage() -> impl IntoView {
    let demo_open = RwSignal::new(false);
    let trial_open = RwSignal::new(false);

    let open_demo = Callback::new(move |_: ()| demo_open.set(true));
    let open_trial = Callback::new(move |_: ()| trial_open.set(true));

    view! {
        <main class="landing">
            <style>{include_str!("landing.css")}</style>

            <HeroSection on_request_demo=open_demo />
            <FeaturesSection />
            <HowItWorksSection on_start_trial=open_trial />
            <TestimonialsSection />
            <FaqSection on_schedule_demo=open_demo />
            <CtaSection on_get_started=open_trial on_schedule_demo=open_demo />

            <BookDemoModal
                open=demo_open
                on_open_change=Callback::new(move |next: bool| demo_open.set(next))
            />
            <FreeTrialModal
                open=trial_open
                on_open_change=Callback::new(move |next: bool| trial_open.set(next))
            />
        </main>
    }
}
