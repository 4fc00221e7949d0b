mod cli_mode;
mod read_mode;
mod shell_mode;
mod use_color;

pub use cli_mode::CliModeResult;
pub use read_mode::read_mode;
pub use shell_mode::shell_mode;
pub use use_color::use_color;
