use family_roster::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let is_menu_open = use_state(|| false);

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };

    // Menu entries close the menu before navigating
    let go = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_menu_open.set(false);
            on_navigate.emit(route.clone());
        })
    };

    html! {
        <nav class="navbar">
            <button type="button" class="navbar-brand" onclick={go(Route::Home)}>
                {"Geetha Health"}
            </button>
            <div class="navbar-links">
                <div class="account-menu">
                    <button type="button" class="btn btn-link" onclick={toggle_menu}>
                        {"My Account ▾"}
                    </button>
                    {if *is_menu_open {
                        html! {
                            <div class="account-menu-dropdown">
                                <button type="button" class="menu-item"
                                    onclick={go(Route::FamilyProfile { transient: None })}>
                                    {"Family Profile"}
                                </button>
                                <button type="button" class="menu-item" onclick={go(Route::Documents)}>
                                    {"Documents"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
                <button type="button" class="btn btn-link" onclick={go(Route::About)}>
                    {"About"}
                </button>
            </div>
        </nav>
    }
}
