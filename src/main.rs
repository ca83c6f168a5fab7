use recruitpro::app::App;

fn main() {
    recruitpro::telemetry::init();
    leptos::mount::mount_to_body(App);
}
