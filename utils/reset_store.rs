use content_catalyst::Config;

fn main() {
    let config = Config::from_env();

    let Some(path) = config.store_path else {
        println!("CATALYST_STORE_PATH is not set, nothing to reset");
        return;
    };

    match std::fs::remove_file(&path) {
        Ok(()) => println!("Store reset successfully: {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("Store file does not exist: {}", path.display())
        }
        Err(e) => eprintln!("Failed to reset store {}: {}", path.display(), e),
    }
}
