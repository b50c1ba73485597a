use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn crate_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "gradebook=debug,info"
        } else {
            "gradebook=info"
        })
    })
}

/// 初始化日誌；`json` 為真時每行輸出一筆 JSON，否則使用精簡格式
pub fn init_logger(verbose: bool, json: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);
    let registry = tracing_subscriber::registry().with(crate_filter(verbose));

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
