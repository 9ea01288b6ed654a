use env_logger::Builder;
use log::kv::Key;
use std::io::Write;

/// Initialize the logger for either binary.
pub fn initialize_logger() {
    Builder::new()
        .format(|buf, record| {
            let ts = buf.timestamp();

            let level_style = buf.default_level_style(record.level());
            let lvl = format!(
                "{}{}{}",
                level_style.render(),
                record.level(),
                level_style.render_reset()
            );

            // Optional `duration` key, logged by the stages handler
            let dur = record
                .key_values()
                .get(Key::from("duration"))
                .map(|v| format!(" ({})", v))
                .unwrap_or_default();

            writeln!(
                buf,
                "{} {} {} {}{}",
                ts,
                lvl,
                record.target(),
                record.args(),
                dur
            )
        })
        // Only show INFO+ globally, WARN+ for Rocket
        .filter(None, log::LevelFilter::Info)
        .filter(Some("rocket"), log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
