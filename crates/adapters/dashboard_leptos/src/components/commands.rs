//! Command panel of the opened site: add-command form plus one card per
//! command.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use sitedeck_app::message::Msg;
use sitedeck_app::model::CommandEditor;
use sitedeck_domain::command::NewCommand;
use sitedeck_domain::id::{CommandId, SiteId};

use crate::store::use_store;

#[component]
pub fn CommandPanel(site_id: SiteId) -> impl IntoView {
    let store = use_store();
    let site_name = store.select(move |model| {
        model
            .site(site_id)
            .map(|site| site.name.clone())
            .unwrap_or_default()
    });
    let ids = store.select(|model| {
        model
            .commands
            .as_ref()
            .map(|panel| panel.cards.iter().map(|card| card.command.id).collect::<Vec<_>>())
            .unwrap_or_default()
    });

    view! {
        <h2>"Commands of " {move || site_name.get()}</h2>
        <AddCommandForm site_id/>
        <hr/>
        {move || {
            let ids = ids.get();
            if ids.is_empty() {
                view! { <p class="muted">"No commands yet."</p> }.into_any()
            } else {
                ids.into_iter()
                    .map(|id| view! { <CommandCard id/> })
                    .collect_view()
                    .into_any()
            }
        }}
    }
}

#[component]
fn AddCommandForm(site_id: SiteId) -> impl IntoView {
    let store = use_store();
    let name = RwSignal::new(String::new());
    let command_template = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.dispatch(Msg::CreateCommandSubmitted(NewCommand {
            name: name.get_untracked(),
            command_template: command_template.get_untracked(),
            site_id,
        }));
    };

    view! {
        <form on:submit=on_submit>
            <h3>"Add Command"</h3>
            <input
                placeholder="name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                placeholder="command template, e.g. python manage.py import_bods {api_key}"
                prop:value=move || command_template.get()
                on:input=move |ev| command_template.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

#[component]
fn CommandCard(id: CommandId) -> impl IntoView {
    let store = use_store();
    let summary = store.select(move |model| {
        model
            .card(id)
            .map(|card| (card.command.name.clone(), card.command.command_template.clone()))
            .unwrap_or_default()
    });
    let editor = store.select(move |model| model.card(id).and_then(|card| card.editor.clone()));
    let log = store.select(move |model| model.card(id).and_then(|card| card.log.clone()));

    view! {
        <div class="card">
            <h4>{move || summary.get().0}</h4>
            <pre>{move || summary.get().1}</pre>
            <div>
                <button class="btn-ok" on:click=move |_| store.dispatch(Msg::StartClicked(id))>"Start"</button>
                <button class="btn-danger" on:click=move |_| store.dispatch(Msg::StopClicked(id))>"Stop"</button>
                <button on:click=move |_| store.dispatch(Msg::ViewLogClicked(id))>"View Log"</button>
                <button on:click=move |_| store.dispatch(Msg::EditCommandClicked(id))>"Edit"</button>
            </div>
            {move || editor.get().map(|editor| view! { <CommandEditorForm id editor/> })}
            {move || log.get().map(|text| view! { <div class="log">{text}</div> })}
        </div>
    }
}

/// Inline editor, prefilled from the command detail.
#[component]
fn CommandEditorForm(id: CommandId, editor: CommandEditor) -> impl IntoView {
    let store = use_store();
    let name = RwSignal::new(editor.name);
    let command_template = RwSignal::new(editor.command_template);
    let env_text = RwSignal::new(editor.env_text);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.dispatch(Msg::SaveCommandClicked {
            id,
            name: name.get_untracked(),
            command_template: command_template.get_untracked(),
            env_text: env_text.get_untracked(),
        });
    };

    view! {
        <form on:submit=on_submit>
            <input
                placeholder="name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                placeholder="command template"
                prop:value=move || command_template.get()
                on:input=move |ev| command_template.set(event_target_value(&ev))
            />
            <textarea
                placeholder="envs, one per line key=value"
                prop:value=move || env_text.get()
                on:input=move |ev| env_text.set(event_target_value(&ev))
            ></textarea>
            {editor.run_command.map(|line| view! { <div class="muted">"runs: " <code>{line}</code></div> })}
            {editor.current_pid.map(|pid| view! { <div class="muted">"running as pid " {pid}</div> })}
            <button type="submit" class="btn-ok">"Save"</button>
            " "
            <button type="button" class="btn-danger" on:click=move |_| store.dispatch(Msg::DeleteCommandClicked(id))>
                "Delete"
            </button>
        </form>
    }
}
