use std::rc::Rc;

use family_roster::Route;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::about::About;
use crate::components::connection_footer::ConnectionFooter;
use crate::components::create_family::CreateFamily;
use crate::components::documents::Documents;
use crate::components::family_profile::FamilyProfile;
use crate::components::home::Home;
use crate::components::member_profile::MemberProfile;
use crate::components::navbar::Navbar;
use crate::services::roster::RosterHandle;

/// Current screen. Every navigation gets a new key so the screen remounts
/// and reconciles its forwarded family against storage.
#[derive(Debug, Clone, PartialEq)]
struct Screen {
    key: u32,
    route: Route,
}

impl Reducible for Screen {
    type Action = Route;

    fn reduce(self: Rc<Self>, route: Route) -> Rc<Self> {
        Rc::new(Screen {
            key: self.key.wrapping_add(1),
            route,
        })
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_path(path: &str) {
    let pushed = web_sys::window()
        .and_then(|window| window.history().ok())
        .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));

    if !matches!(pushed, Some(Ok(()))) {
        gloo::console::warn!("Could not update browser history for", path.to_string());
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let roster = use_state(RosterHandle::new);
    let screen = use_reducer(|| Screen {
        key: 0,
        route: Route::from_path(&current_path()).unwrap_or_default(),
    });

    let on_navigate = {
        let screen = screen.dispatcher();
        Callback::from(move |route: Route| {
            push_path(&route.path());
            screen.dispatch(route);
        })
    };

    // Back and forward buttons restore the screen from the path alone
    {
        let screen = screen.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    screen.dispatch(Route::from_path(&current_path()).unwrap_or_default());
                })
            });
            move || drop(listener)
        });
    }

    let key = screen.key.to_string();
    let roster = (*roster).clone();

    let content = match screen.route.clone() {
        Route::Home => html! { <Home key={key} on_navigate={on_navigate.clone()} /> },
        Route::CreateFamily { transient } => html! {
            <CreateFamily key={key} roster={roster} {transient} on_navigate={on_navigate.clone()} />
        },
        Route::FamilyProfile { transient } => html! {
            <FamilyProfile key={key} roster={roster} {transient} on_navigate={on_navigate.clone()} />
        },
        Route::MemberProfile { member_id, transient } => html! {
            <MemberProfile key={key} roster={roster} member_id={member_id} {transient} on_navigate={on_navigate.clone()} />
        },
        Route::Documents => html! {
            <Documents key={key} roster={roster} on_navigate={on_navigate.clone()} />
        },
        Route::About => html! { <About key={key} /> },
    };

    html! {
        <div class="app">
            <Navbar on_navigate={on_navigate} />
            <main class="page">{content}</main>
            <ConnectionFooter />
        </div>
    }
}
