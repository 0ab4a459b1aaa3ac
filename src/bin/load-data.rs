use std::process::ExitCode;

fn main() -> ExitCode {
    vigil_ui_terminal::load_data::main()
}
