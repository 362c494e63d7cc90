use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

fn logging_level() -> LevelFilter {
    match std::env::var("B58_DEBUG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // default if unset or unknown
    }
}

pub fn setup_logger() {
    let level_filter = logging_level();

    // Logs go to stderr so stdout stays pasteable.
    if let Err(e) = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}]: {}",
                Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                record.level(),
                message,
            ));
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        log::error!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
