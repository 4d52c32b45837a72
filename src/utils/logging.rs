/// Initialize tracing/logging for the tools.
///
/// Logs are written to stderr. Stdout carries only the `Sent message` /
/// `Received message` lines, so `pubsub-subscribe ... > out.txt` or a pipe
/// into `grep`/`jq` sees payload lines and nothing else.
pub fn init(default_level: &str) {
    let lvl = match default_level.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };

    // try_init: a second call in the same process is a no-op
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
