use yew::prelude::*;

use crate::hooks::use_connection_status::{use_connection_status, ConnectionStatus};
use crate::services::roster::BACKEND_URL;

#[function_component(ConnectionFooter)]
pub fn connection_footer() -> Html {
    let status = use_connection_status();

    let (class, label) = match status {
        ConnectionStatus::Checking => ("status-checking", "Checking backend..."),
        ConnectionStatus::Connected => ("status-connected", "Backend connected"),
        ConnectionStatus::Disconnected => ("status-disconnected", "Backend unavailable"),
    };

    html! {
        <footer class="connection-footer">
            <span class={classes!("connection-status", class)}>{label}</span>
            <span class="connection-endpoint">{BACKEND_URL}</span>
        </footer>
    }
}
