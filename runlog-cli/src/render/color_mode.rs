use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
