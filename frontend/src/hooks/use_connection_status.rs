use gloo::net::http::Request;
use shared::HealthResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::roster::BACKEND_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Checking,
    Connected,
    Disconnected,
}

/// Ping the backend health endpoint once on mount
#[hook]
pub fn use_connection_status() -> ConnectionStatus {
    let status = use_state(|| ConnectionStatus::Checking);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let url = format!("{}/health", BACKEND_URL);
                let connected = match Request::get(&url).send().await {
                    Ok(response) => matches!(
                        response.json::<HealthResponse>().await,
                        Ok(HealthResponse { ok: true })
                    ),
                    Err(e) => {
                        gloo::console::warn!("Backend health check failed:", e.to_string());
                        false
                    }
                };

                status.set(if connected {
                    ConnectionStatus::Connected
                } else {
                    ConnectionStatus::Disconnected
                });
            });
            || ()
        });
    }

    *status
}
