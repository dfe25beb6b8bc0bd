//! Reactive home of the [`Model`] and the dispatcher feeding it.
//!
//! Every user event becomes a [`Msg`] passed to [`Store::dispatch`]. The
//! resulting effects each run in their own local task, so requests overlap
//! freely; their answers are dispatched back in arrival order.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use sitedeck_app::effect::Effect;
use sitedeck_app::message::Msg;
use sitedeck_app::model::Model;
use sitedeck_app::runtime::Runtime;
use sitedeck_app::update::update;

use crate::dialogs::BrowserDialogs;
use crate::transport::FetchTransport;

type BrowserRuntime = Runtime<FetchTransport, BrowserDialogs>;

#[derive(Clone, Copy)]
pub struct Store {
    model: RwSignal<Model>,
    runtime: StoredValue<Rc<BrowserRuntime>, LocalStorage>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(Model::default()),
            runtime: StoredValue::new_local(Rc::new(Runtime::new(FetchTransport, BrowserDialogs))),
        }
    }

    /// A memoized slice of the model; views subscribed to it only re-render
    /// when the slice itself changes.
    pub fn select<T>(&self, f: impl Fn(&Model) -> T + Send + Sync + 'static) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let model = self.model;
        Memo::new(move |_| model.with(&f))
    }

    pub fn dispatch(&self, msg: Msg) {
        tracing::debug!(?msg, "dispatch");
        let Some(effects) = self.model.try_update(|model| update(model, msg)) else {
            tracing::warn!("model disposed, dropping message");
            return;
        };
        for effect in effects {
            self.spawn(effect);
        }
    }

    fn spawn(&self, effect: Effect) {
        let store = *self;
        let runtime = self.runtime.get_value();
        spawn_local(async move {
            if let Some(msg) = runtime.perform(effect).await {
                store.dispatch(msg);
            }
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// The store provided by [`crate::App`].
pub fn use_store() -> Store {
    expect_context::<Store>()
}
