//! Popover month calendar for choosing a demo date.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::browser;
use crate::lead::schedule::format_long_date;
use crate::lead::MonthView;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Days that can't be booked render disabled. The grid is rebuilt against the
/// clock each time the popover opens.
#[component]
pub fn DatePicker(
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let month = RwSignal::new(MonthView::current(browser::today()));

    let toggle = move |_: leptos::ev::MouseEvent| {
        if !expanded.get_untracked() {
            let today = browser::today();
            let anchor = selected.get_untracked().unwrap_or(today);
            month.set(MonthView::containing(anchor, today));
        }
        set_expanded.update(|open| *open = !*open);
    };

    let trigger_label = move || match selected.get() {
        Some(date) => format_long_date(date),
        None => "Pick a date".to_string(),
    };

    view! {
        <div class="date-picker">
            <button
                type="button"
                id="demo-date"
                class="form-input date-trigger"
                class:date-trigger-empty=move || selected.with(Option::is_none)
                class:form-input-invalid=move || invalid.get()
                disabled=move || disabled.get()
                on:click=toggle
            >
                "📅 " {trigger_label}
            </button>

            {move || expanded.get().then(|| view! {
                <div class="calendar" role="grid">
                    <div class="calendar-header">
                        <button
                            type="button"
                            class="calendar-nav"
                            aria-label="Previous month"
                            disabled=move || !month.get().can_go_back()
                            on:click=move |_| {
                                if let Some(prev) = month.get_untracked().previous() {
                                    month.set(prev);
                                }
                            }
                        >
                            "‹"
                        </button>
                        <span>{move || month.get().title()}</span>
                        <button
                            type="button"
                            class="calendar-nav"
                            aria-label="Next month"
                            on:click=move |_| {
                                if let Some(next) = month.get_untracked().next() {
                                    month.set(next);
                                }
                            }
                        >
                            "›"
                        </button>
                    </div>
                    <div class="calendar-week">
                        {WEEKDAYS.iter().map(|d| view! { <span class="calendar-weekday">{*d}</span> }).collect::<Vec<_>>()}
                    </div>
                    {move || month.get().weeks().into_iter().map(|week| view! {
                        <div class="calendar-week">
                            {week.into_iter().map(|day| {
                                let date = day.date;
                                view! {
                                    <button
                                        type="button"
                                        class="calendar-day"
                                        class:calendar-day-outside=!day.in_month
                                        class:calendar-day-today=day.is_today
                                        class:calendar-day-selected=move || selected.get() == Some(date)
                                        disabled=!day.bookable
                                        on:click=move |_| {
                                            on_pick.run(date);
                                            set_expanded.set(false);
                                        }
                                    >
                                        {date.day()}
                                    </button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            })}
        </div>
    }
}
