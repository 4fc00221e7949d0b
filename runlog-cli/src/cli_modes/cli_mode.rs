/// Whether a mode handled the invocation or the next mode should run.
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
