use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target for per-line record diagnostics from the grouper.
pub const RECORDS_TARGET: &str = "menu_etl::records";

/// Verbose runs show every line with missing fields; otherwise only the summary warning.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "menu_etl=debug,menu_etl::records=debug,info"
    } else {
        "menu_etl=info,menu_etl::records=warn"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // 日誌寫到 stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
