use {clap::Parser, deploy_tokens::arguments::Arguments};

#[tokio::main]
async fn main() {
    // Only `<cwd>/.env` is read. Values already present in the environment
    // take precedence over it.
    dotenvy::from_path(".env").ok();
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{err}");
            std::process::exit(1);
        }
    };
    observe::tracing::initialize(&args.log_filter);
    tracing::debug!("running deploy-tokens with arguments:\n{}", args);

    match deploy_tokens::run(&args).await {
        Ok(deployment) => print!("{deployment}"),
        Err(err) => {
            eprintln!("Error: {err:?}");
            std::process::exit(1);
        }
    }
}
