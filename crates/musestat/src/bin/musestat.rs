fn main() {
    if let Err(err) = musestat::run() {
        eprintln!("{}", musestat::format_error(&err));
        std::process::exit(1);
    }
}
