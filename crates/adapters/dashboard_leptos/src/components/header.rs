use leptos::prelude::*;
use sitedeck_app::message::Msg;

use crate::store::use_store;

/// Signed-in user, granted permissions and the session controls.
#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let username = store.select(|model| {
        model
            .session
            .as_ref()
            .map(|session| session.username.clone())
            .unwrap_or_default()
    });
    let permissions = store.select(|model| {
        model
            .session
            .as_ref()
            .map(|session| session.permissions.to_string())
            .unwrap_or_default()
    });

    view! {
        <header>
            <div>
                <strong>"sitedeck"</strong>
                " signed in as "
                <span>{move || username.get()}</span>
                <span class="muted">" (" {move || permissions.get()} ")"</span>
            </div>
            <div>
                <button on:click=move |_| store.dispatch(Msg::RefreshSitesClicked)>"Refresh"</button>
                <button on:click=move |_| store.dispatch(Msg::LogoutClicked)>"Logout"</button>
            </div>
        </header>
    }
}
