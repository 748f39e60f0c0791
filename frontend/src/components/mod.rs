pub mod about;
pub mod connection_footer;
pub mod create_family;
pub mod documents;
pub mod family_profile;
pub mod home;
pub mod member_profile;
pub mod modal;
pub mod navbar;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// Labelled single line text input
pub fn text_field(id: &str, label: &str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| on_change.emit(input_value(&e)));

    html! {
        <div class="form-group">
            <label for={id.to_string()}>{label.to_string()}</label>
            <input id={id.to_string()} type="text" value={value.to_string()} {oninput} />
        </div>
    }
}

/// Labelled multi line text input
pub fn notes_field(id: &str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        on_change.emit(area.value());
    });

    html! {
        <div class="form-group">
            <label for={id.to_string()}>{"Notes"}</label>
            <textarea id={id.to_string()} value={value.to_string()} {oninput} />
        </div>
    }
}

pub fn error_banner(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <div class="form-error">{message.clone()}</div> },
        None => html! {},
    }
}

/// Click callback that navigates to a fixed route
pub fn navigate_to(on_navigate: &Callback<family_roster::Route>, route: family_roster::Route) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
}
