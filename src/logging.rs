use tracing_subscriber::EnvFilter;

/// stderr로 나가는 fmt 구독자를 설치한다.
///
/// `RUST_LOG`가 있으면 그 값을, 없으면 설정 파일의 `log_filter`를 쓴다.
/// 이미 설치돼 있으면 아무것도 하지 않는다.
pub fn init(config_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
