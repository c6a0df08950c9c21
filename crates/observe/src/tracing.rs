use {
    std::{io::IsTerminal, panic::PanicHookInfo, sync::Once},
    time::macros::format_description,
    tracing_subscriber::{EnvFilter, fmt::time::UtcTime, prelude::*, util::SubscriberInitExt},
};

/// Initializes the tracing subscriber and installs a panic hook that logs
/// through it.
///
/// `env_filter` uses the `EnvFilter` directive syntax, documented at
/// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
///
/// All events are written to stderr. Stdout is reserved for the program's
/// actual output.
pub fn initialize(env_filter: &str) {
    set_tracing_subscriber(env_filter);
    std::panic::set_hook(Box::new(tracing_panic_hook));
}

/// Like [`initialize`], but can be called multiple times in a row. Later calls
/// are ignored.
///
/// Useful for tests.
pub fn initialize_reentrant(env_filter: &str) {
    // The subscriber is a global object so it can only be set once per process.
    static ONCE: Once = Once::new();
    ONCE.call_once(|| initialize(env_filter));
}

fn set_tracing_subscriber(env_filter: &str) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::new(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        )))
        .with_ansi(std::io::stderr().is_terminal())
        .with_filter(EnvFilter::new(env_filter));

    // `try_init` so a subscriber installed by a test harness doesn't abort us.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

/// Reports panics as error events so they carry the same timestamp and format
/// as every other log line.
fn tracing_panic_hook(info: &PanicHookInfo) {
    let current = std::thread::current();
    let thread = current.name().unwrap_or("<unnamed>");
    tracing::error!(
        thread,
        backtrace = %std::backtrace::Backtrace::force_capture(),
        "panicked: {info}"
    );
}
