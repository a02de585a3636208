use std::sync::Arc;

use shopfront::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    // Template verification happens here: a missing template named by the
    // route table aborts startup, never a request.
    let state = Arc::new(config::AppState::new(cfg)?);

    logger::log_server_start(&addr, &state.config);

    // Connection tasks use spawn_local, so the loop runs on a LocalSet
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state)).await?;
    Ok(())
}
