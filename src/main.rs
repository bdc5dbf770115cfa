use bankist::{app, config::Config, logging};

fn main() {
    let config = Config::from_cli();
    logging::set_up(config.verbose);

    if let Err(e) = app::run(&config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
