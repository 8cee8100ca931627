fn main() {
    stencil::app::cli::run();
}
