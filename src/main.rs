use std::io;
use std::process;

use toy_rsa::demo::{run_demo, DemoConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = DemoConfig::from_args(std::env::args().skip(1))
        .and_then(|config| run_demo(&config, &mut io::stdout().lock(), &mut rand::thread_rng()));

    if let Err(e) = result {
        eprintln!("Error running demo: {:#}", e);
        process::exit(1);
    }
}
