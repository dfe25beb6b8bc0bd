//! Site list, add-site form and the inline site editor.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use sitedeck_app::message::Msg;
use sitedeck_app::model::SiteEditor;
use sitedeck_domain::site::{Site, SiteDraft};

use crate::store::use_store;

/// All sites of the last completed load.
#[component]
pub fn SiteList() -> impl IntoView {
    let store = use_store();
    let sites = store.select(|model| model.sites.clone());
    let open_site = store.select(|model| model.commands.as_ref().map(|panel| panel.site_id));

    view! {
        <ul class="site-list">
            {move || {
                let sites = sites.get();
                if sites.is_empty() {
                    view! { <li class="muted">"No sites yet."</li> }.into_any()
                } else {
                    sites
                        .into_iter()
                        .map(|site| {
                            let selected = open_site.get() == Some(site.id);
                            view! { <SiteRow site selected/> }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}

#[component]
fn SiteRow(site: Site, selected: bool) -> impl IntoView {
    let store = use_store();
    let id = site.id;

    view! {
        <li class:selected=selected>
            <div>
                <div><strong>{site.name}</strong></div>
                <div class="muted">{site.base_path.unwrap_or_default()}</div>
            </div>
            <div>
                <button on:click=move |_| store.dispatch(Msg::OpenSiteClicked(id))>"Open"</button>
                <button on:click=move |_| store.dispatch(Msg::EditSiteClicked(id))>"Edit"</button>
            </div>
        </li>
    }
}

/// Name, base path and base command inputs shared by both site forms.
#[component]
fn SiteFields(name: RwSignal<String>, base_path: RwSignal<String>, base_command: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            placeholder="name"
            prop:value=move || name.get()
            on:input=move |ev| name.set(event_target_value(&ev))
        />
        <input
            placeholder="base path, e.g. /srv/app"
            prop:value=move || base_path.get()
            on:input=move |ev| base_path.set(event_target_value(&ev))
        />
        <input
            placeholder="base command, e.g. source env/bin/activate"
            prop:value=move || base_command.get()
            on:input=move |ev| base_command.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn AddSiteForm() -> impl IntoView {
    let store = use_store();
    let name = RwSignal::new(String::new());
    let base_path = RwSignal::new(String::new());
    let base_command = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.dispatch(Msg::CreateSiteSubmitted(SiteDraft::new(
            name.get_untracked(),
            base_path.get_untracked(),
            base_command.get_untracked(),
        )));
    };

    view! {
        <form on:submit=on_submit>
            <h3>"Add Site"</h3>
            <SiteFields name base_path base_command/>
            <button type="submit">"Add"</button>
        </form>
    }
}

/// Inline editor, prefilled from the site it was opened for.
#[component]
pub fn SiteEditorForm(editor: SiteEditor) -> impl IntoView {
    let store = use_store();
    let id = editor.site_id;
    let name = RwSignal::new(editor.initial.name);
    let base_path = RwSignal::new(editor.initial.base_path);
    let base_command = RwSignal::new(editor.initial.base_command);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.dispatch(Msg::SaveSiteClicked {
            id,
            draft: SiteDraft::new(
                name.get_untracked(),
                base_path.get_untracked(),
                base_command.get_untracked(),
            ),
        });
    };

    view! {
        <form class="card" on:submit=on_submit>
            <h3>"Edit Site"</h3>
            <SiteFields name base_path base_command/>
            <button type="submit" class="btn-ok">"Save"</button>
            " "
            <button type="button" class="btn-danger" on:click=move |_| store.dispatch(Msg::DeleteSiteClicked(id))>
                "Delete"
            </button>
            " "
            <button type="button" on:click=move |_| store.dispatch(Msg::CloseSiteEditorClicked)>"Close"</button>
        </form>
    }
}
