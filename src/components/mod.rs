pub mod book_demo_modal;
pub mod cta;
pub mod date_picker;
pub mod faq;
pub mod features;
pub mod file_drop_zone;
pub mod form_field;
pub mod free_trial_modal;
pub mod hero;
pub mod how_it_works;
pub mod lead_modal;
pub mod testimonials;
pub mod toaster;
