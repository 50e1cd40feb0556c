fn main() {
    #[cfg(feature = "cli")]
    fuzzyhash::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("fuzzyhash: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
