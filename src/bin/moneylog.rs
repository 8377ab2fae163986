use moneylog::cli;

fn main() {
    moneylog::init();
    if let Err(err) = cli::run_cli() {
        cli::output::error(&err);
        std::process::exit(1);
    }
}
