fn main() {
    if let Err(err) = supply_map::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
