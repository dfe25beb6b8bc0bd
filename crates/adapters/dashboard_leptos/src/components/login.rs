use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use sitedeck_app::message::Msg;
use sitedeck_domain::session::Credentials;

use crate::store::use_store;

/// Username/password form shown while signed out.
#[component]
pub fn LoginPanel() -> impl IntoView {
    let store = use_store();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.dispatch(Msg::LoginSubmitted(Credentials::new(
            username.get_untracked(),
            password.get_untracked(),
        )));
    };

    view! {
        <section class="login">
            <h1>"sitedeck"</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit">"Login"</button>
            </form>
        </section>
    }
}
