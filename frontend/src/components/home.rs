use family_roster::Route;
use yew::prelude::*;

use super::modal::Modal;
use super::{navigate_to, text_field};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Route>,
}

/// Landing page. The login modal has no account behind it; signing in
/// simply starts the family setup.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let is_login_open = use_state(|| false);
    let email = use_state(String::new);

    let open_login = {
        let is_login_open = is_login_open.clone();
        Callback::from(move |_: MouseEvent| is_login_open.set(true))
    };

    let close_login = {
        let is_login_open = is_login_open.clone();
        let email = email.clone();
        Callback::from(move |_: ()| {
            is_login_open.set(false);
            email.set(String::new());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let start = Route::CreateFamily { transient: None };

    html! {
        <div class="home">
            <section class="hero">
                <h1>{"Your family's health, in one place"}</h1>
                <p>{"Track conditions, medications and appointments for everyone you care for."}</p>
                <button type="button" class="btn btn-primary" onclick={navigate_to(&props.on_navigate, start.clone())}>
                    {"Get Started"}
                </button>
                <button type="button" class="btn btn-secondary" onclick={open_login}>
                    {"Log In"}
                </button>
            </section>

            {if *is_login_open {
                html! {
                    <Modal title="Log In" on_close={close_login}>
                        {text_field("login-email", "Email", &email, on_email)}
                        <div class="form-group">
                            <label for="login-password">{"Password"}</label>
                            <input id="login-password" type="password" />
                        </div>
                        <div class="modal-buttons">
                            <button type="button" class="btn btn-primary" onclick={navigate_to(&props.on_navigate, start)}>
                                {"Log In"}
                            </button>
                        </div>
                    </Modal>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
