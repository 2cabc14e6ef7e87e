fn main() {
    schedout::app::cli::run();
}
