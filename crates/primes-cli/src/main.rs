use clap::Parser;
use primes_cli::Cli;
use primes_core::errors::PrimesErrorCode;

fn main() {
    primes_core::tracing::init_tracing();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    if let Err(e) = primes_cli::run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e.coded_string());
        std::process::exit(1);
    }
}
