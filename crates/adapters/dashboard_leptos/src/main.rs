use leptos::prelude::*;
use sitedeck_dashboard::App;

fn main() {
    sitedeck_dashboard::logging::init();
    mount_to_body(App);
}
