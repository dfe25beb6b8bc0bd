use leptos::prelude::*;
use sitedeck_app::model::{Model, Panel};

mod components;
pub mod dialogs;
pub mod logging;
pub mod store;
pub mod transport;

use components::{AddSiteForm, CommandPanel, Header, LoginPanel, SiteEditorForm, SiteList};
use store::{Store, use_store};

/// Root application component.
///
/// Shows the login panel until a session exists, then the main panel.
#[component]
pub fn App() -> impl IntoView {
    let store = Store::new();
    provide_context(store);
    let panel = store.select(Model::panel);

    view! {
        {move || match panel.get() {
            Panel::Login => view! { <LoginPanel/> }.into_any(),
            Panel::Main => view! { <MainPanel/> }.into_any(),
        }}
    }
}

#[component]
fn MainPanel() -> impl IntoView {
    let store = use_store();
    let site_editor = store.select(|model| model.site_editor.clone());
    let open_site = store.select(|model| model.commands.as_ref().map(|panel| panel.site_id));

    view! {
        <Header/>
        <main>
            <section>
                {move || site_editor.get().map(|editor| view! { <SiteEditorForm editor/> })}
                <h2>"Sites"</h2>
                <SiteList/>
                <AddSiteForm/>
            </section>
            <section>
                {move || match open_site.get() {
                    Some(site_id) => view! { <CommandPanel site_id/> }.into_any(),
                    None => view! { <p class="muted">"Open a site to see its commands."</p> }.into_any(),
                }}
            </section>
        </main>
    }
}
