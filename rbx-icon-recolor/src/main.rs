mod bootstrapper;
mod cli;
mod manifest;
mod process;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::init_cli()?;

    process::run(args).await
}
