use family_roster::Route;
use yew::prelude::*;

use crate::services::roster::{BrowserStore, RosterHandle};

/// One user action against a screen controller. Returning a route navigates
/// there once the action is applied.
pub type Edit<V> = Box<dyn FnOnce(&mut V, &mut BrowserStore) -> Option<Route>>;

pub struct UseControllerResult<V: 'static> {
    pub view: UseStateHandle<V>,
    pub dispatch: Callback<Edit<V>>,
}

/// Load a screen controller once on mount and hand out a dispatcher that
/// applies edits to it together with the shared store
#[hook]
pub fn use_controller<V, F>(
    roster: &RosterHandle,
    on_navigate: &Callback<Route>,
    load: F,
) -> UseControllerResult<V>
where
    V: Clone + 'static,
    F: FnOnce(&mut BrowserStore) -> V + 'static,
{
    let view = {
        let roster = roster.clone();
        use_state(move || roster.with(load))
    };

    let dispatch = {
        let view = view.clone();
        let roster = roster.clone();
        let on_navigate = on_navigate.clone();

        Callback::from(move |edit: Edit<V>| {
            let mut next = (*view).clone();
            let route = roster.with(|store| edit(&mut next, store));
            view.set(next);

            if let Some(route) = route {
                on_navigate.emit(route);
            }
        })
    };

    UseControllerResult { view, dispatch }
}

/// Wrap a plain closure as an [`Edit`]
pub fn edit<V: 'static>(f: impl FnOnce(&mut V, &mut BrowserStore) -> Option<Route> + 'static) -> Edit<V> {
    Box::new(f)
}

/// Callback storing an input value into the controller
pub fn setter<V: 'static>(dispatch: &Callback<Edit<V>>, set: fn(&mut V, String)) -> Callback<String> {
    let dispatch = dispatch.clone();
    Callback::from(move |value: String| {
        dispatch.emit(edit(move |view: &mut V, _| {
            set(view, value);
            None
        }))
    })
}

/// Click callback running one controller action
pub fn on_click<V: 'static>(
    dispatch: &Callback<Edit<V>>,
    action: fn(&mut V, &mut BrowserStore) -> Option<Route>,
) -> Callback<MouseEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |_: MouseEvent| dispatch.emit(Box::new(action)))
}
