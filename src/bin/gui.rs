fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    colour_transition::run_gui()
}
