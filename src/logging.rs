/// ログ初期化
///
/// stdout はレポート専用なので、ログは必ず stderr に出す。
use tracing::Level;

/// `-v` の回数からログレベルを決める
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(level_for(verbosity))
        .init();
}
