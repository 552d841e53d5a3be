//! CLI context - bundles settings, flags, registry and clipboard state.

use std::fmt;
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use fakepass::pass::{self, output};
use fakepass::{LookupError, MapParams, Registry, lookup, rng};

use super::{CliFlags, ParseError, prompts, quiet, text};
use crate::settings::Settings;

const DEFAULT_OUTPUT: &str = "fakepass.txt";

#[derive(Debug)]
pub enum CliError {
    Parse(ParseError),
    Lookup(LookupError),
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "{}", e),
            CliError::Lookup(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<LookupError> for CliError {
    fn from(e: LookupError) -> Self {
        CliError::Lookup(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    registry: Registry,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse arguments and load saved defaults (unless `--default`).
    pub fn new(args: &[String]) -> Result<Self, CliError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_load_failed(&e);
                Settings::default()
            })
        };

        Ok(Self::with_settings(flags, settings))
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self {
            settings,
            flags,
            registry: Registry::builtin(),
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.apply_flags();
        self.handle_save();

        if self.flags.function() == "list" {
            text::print_list(&self.registry);
            return Ok(());
        }
        if !self.handle_clipboard() {
            return Ok(());
        }
        self.generate_output()
    }

    /// Returns true when the run is finished.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            text::print_help();
            return true;
        }
        if self.flags.version {
            println!("fakepass {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags on top of the loaded settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number = num;
        }

        if self.flags.no_lower {
            self.settings.lower = false;
        }
        if self.flags.no_upper {
            self.settings.upper = false;
        }
        if self.flags.no_numeric {
            self.settings.numeric = false;
        }
        if self.flags.no_special {
            self.settings.special = false;
        }
        if self.flags.space {
            self.settings.space = true;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output_path(path);
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        if !self.flags.has_saveable_args() {
            prompts::nothing_to_save();
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    /// Returns false when the user declined to continue without a clipboard.
    fn handle_clipboard(&mut self) -> bool {
        if !self.flags.clipboard {
            return true;
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(_) => prompts::clipboard_fallback_prompt(),
        }
    }

    /// Registry parameters: explicit `-p` pairs win over settings.
    pub fn params(&self) -> Result<MapParams, CliError> {
        let mut params = MapParams::new();
        for raw in &self.flags.params {
            params.parse_pair(raw)?;
        }

        if self.flags.function() == "password" {
            let s = &self.settings;
            let derived = [
                ("length", s.pass_length.to_string()),
                ("lower", s.lower.to_string()),
                ("upper", s.upper.to_string()),
                ("numeric", s.numeric.to_string()),
                ("special", s.special.to_string()),
                ("space", s.space.to_string()),
            ];
            for (key, value) in derived {
                if !params.contains(key) {
                    params.set(key, value);
                }
            }
        }

        Ok(params)
    }

    /// Entropy estimate for password runs.
    fn entropy(&self, params: &MapParams) -> Option<(f64, &'static str)> {
        if self.flags.function() != "password" {
            return None;
        }
        let info = self.registry.get("password")?;
        let config = lookup::pass_config(params, info).ok()?;
        let bits = pass::entropy_bits(&config);
        Some((bits, pass::strength(bits)))
    }

    /// Generate values and send them to the clipboard, a file or stdout.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let function = self.flags.function().to_string();
        let params = self.params()?;
        let count = self.settings.number.max(1);

        let mut rng = match self.flags.seed {
            Some(seed) => rng::seeded(seed),
            None => rng::from_entropy(),
        };

        // The first value surfaces parameter errors before anything is written.
        let first = self.registry.generate(&function, &mut rng, &params)?;
        let mut pending = Some(first);
        let registry = &self.registry;
        let next = || match pending.take() {
            Some(value) => Ok(value),
            None => registry
                .generate(&function, &mut rng, &params)
                .map_err(CliError::from),
        };

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut values = output::collect(count, next)?;
            let res = ctx.set_contents(values.clone());
            values.zeroize();
            match res {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        } else if !self.settings.output_file_path.is_empty() {
            let path = self.settings.output_file_path.clone();
            output::to_file(Path::new(&path), count, next)?;
            let full_path = std::fs::canonicalize(&path)
                .map(|p| p.display().to_string())
                .unwrap_or(path);
            prompts::written(count, &full_path, self.entropy(&params));
        } else {
            output::to_stdout(count, next)?;
        }

        Ok(())
    }
}

/// Resolve an `-o` argument to a file path.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}
