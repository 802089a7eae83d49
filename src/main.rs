fn main() {
    swapnext::app::cli::run();
}
