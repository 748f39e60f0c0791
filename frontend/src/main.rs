mod app;
mod components;
mod hooks;
mod services;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
