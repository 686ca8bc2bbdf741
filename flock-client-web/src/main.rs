//! flock-client-web: frontend Yew delle bacheche Flock.

mod api;
mod components;
mod pages;

use flock_core::{FixedIdentity, HubSelection, UserId, UserProfile};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, UrlSearchParams};
use yew::prelude::*;

use api::GlooPostsApi;
use pages::{ProfilePage, SingleHub};

/// Hub richiesto dalla query string corrente (`?hubNumber=..&title=..&color=..`).
fn selection_from_location() -> HubSelection {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .map(|params| HubSelection::from_lookup(|key| params.get(key)))
        .unwrap_or_default()
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub(crate) fn log_info(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub(crate) fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Alert bloccante del browser.
pub(crate) fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

// profilo dimostrativo finché non esiste un endpoint per leggerlo
fn demo_profile() -> UserProfile {
    UserProfile {
        name: "Lara Thompson".to_string(),
        email: "lara97@hotmail.co.uk".to_string(),
        bio: "Hi I'm Lara, based in the UK. I love stamp collecting and Art!".to_string(),
    }
}

#[function_component(App)]
fn app() -> Html {
    let selection = use_state(selection_from_location);

    // back/forward del browser cambiano la query string senza ricaricare
    {
        let selection = selection.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(Event)>::new(move |_: Event| {
                selection.set(selection_from_location());
            });
            let window = web_sys::window();
            if let Some(w) = &window {
                let _ = w.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
            }
            move || {
                if let Some(w) = window {
                    let _ = w.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let identity = FixedIdentity::new(UserId::placeholder());
    html! {
        <ContextProvider<FixedIdentity> context={identity}>
            <ContextProvider<GlooPostsApi> context={GlooPostsApi::default()}>
                if current_path().starts_with("/profile") {
                    <ProfilePage profile={demo_profile()} />
                } else {
                    <SingleHub selection={(*selection).clone()} />
                }
            </ContextProvider<GlooPostsApi>>
        </ContextProvider<FixedIdentity>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
