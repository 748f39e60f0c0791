use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about">
            <h1>{"About Geetha Health"}</h1>
            <p>
                {"Geetha Health keeps your family's health details together: each member's \
                  conditions, medications and upcoming appointments."}
            </p>
            <p>
                {"Everything you enter is stored in this browser only. Nothing is sent to a server."}
            </p>
        </div>
    }
}
