/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full sentences, e.g. `192.0.2.5 is in 192.0.2.0/24`.
    #[default]
    Descriptive,
    /// Bare values suitable for scripting, e.g. `true`.
    Short,
}

pub struct Config {
    pub output: OutputMode,
    /// Allows ANSI colors in descriptive output.
    ///
    /// Short output is never colored.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputMode::Descriptive,
            color: true,
        }
    }
}
