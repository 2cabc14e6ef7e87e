use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    fmt::{self},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install a stderr subscriber. Verbosity 0 shows warnings, each step adds detail.
pub fn init(verbosity: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let stderr_layer =
        fmt::layer().with_writer(std::io::stderr).with_target(false).with_filter(level);

    // A subscriber may already be installed when embedded in another process.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
