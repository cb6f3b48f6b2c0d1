// installs the global JSON subscriber for embedding applications; call once at startup
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}
