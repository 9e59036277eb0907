use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize the logger");
    dioxus::logger::tracing::info!("starting inputscope v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(inputscope::App);
}
