#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub save: bool,
    pub default: bool,
    pub quiet: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_numeric: bool,
    pub no_special: bool,
    pub space: bool,
    /// Registry function name, or `list`.
    pub function: Option<String>,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    /// Raw `KEY=VALUE` registry parameters.
    pub params: Vec<String>,
    pub output: Option<String>,
}

impl CliFlags {
    pub fn function(&self) -> &str {
        self.function.as_deref().unwrap_or("password")
    }

    /// True when any password option was given on the command line.
    pub fn has_password_args(&self) -> bool {
        self.length.is_some()
            || self.no_lower
            || self.no_upper
            || self.no_numeric
            || self.no_special
            || self.space
    }

    /// True when any option stored by `--save` was given.
    pub fn has_saveable_args(&self) -> bool {
        self.has_password_args() || self.number.is_some() || self.output.is_some()
    }
}
