fn main() {
    if let Err(e) = structscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
