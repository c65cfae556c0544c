mod config;
mod frontend;
mod http;

use std::process::ExitCode;

use log::LevelFilter;
use structopt::StructOpt;

use crate::config::Config;

#[derive(StructOpt)]
enum Cmd {
    /// Serve the task list over HTTP
    Server,
    /// Load config.toml and print the settings that would be used
    CheckConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::formatted_timed_builder()
        .filter(Some("taskit_server"), LevelFilter::Debug)
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let cmd = Cmd::from_args();

    let result = match cmd {
        Cmd::Server => run().await,
        Cmd::CheckConfig => check_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("fatal error: {e:?}\n{}", e.backtrace());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = config::load()?;

    let router = http::routes();
    let router = frontend::serve(router);

    let fut = axum::Server::try_bind(&config.http.listen)?
        .serve(router.into_make_service());

    log::info!("Listening on {}", config.http.listen);

    fut.await?;

    Ok(())
}

fn check_config() -> anyhow::Result<()> {
    let Config { http } = config::load()?;
    println!("http.listen = {}", http.listen);
    Ok(())
}
