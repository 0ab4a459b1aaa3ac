use std::process::ExitCode;

fn main() -> ExitCode {
    vigil_ui_terminal::batch_score::main()
}
