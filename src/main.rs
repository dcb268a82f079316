use bookstore_queries::{config, runner};

fn main() {
    env_logger::init();

    let config = config::load_config();

    runner::run_reported(&config, std::io::stdout().lock(), &mut std::io::stderr());
}
