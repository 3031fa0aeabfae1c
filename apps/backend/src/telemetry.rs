//! Tracing setup for the server binary.
//!
//! JSON lines to stdout so log collectors can ingest round activity
//! without a parsing step. `RUST_LOG` overrides the defaults wholesale.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default directives: the backend at info, the noisy query layers at warn.
fn default_filter() -> EnvFilter {
    EnvFilter::new("info,bingo_backend=info,actix_web=info,sqlx=warn,sea_orm=warn")
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_the_backend_and_quiets_the_query_layers() {
        let directives = default_filter().to_string();
        assert!(directives.contains("bingo_backend=info"));
        assert!(directives.contains("sqlx=warn"));
        assert!(directives.contains("sea_orm=warn"));
    }
}
