use clap::Parser;

fn main() {
    use livecoding::util::cli::*;

    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let opts = Options::parse();
    if let Err(e) = run_cli_action(opts) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
