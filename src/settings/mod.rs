//! Persisted CLI defaults.

mod file;

use std::path::Path;

use fakepass::PassConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number: usize,
    pub lower: bool,
    pub upper: bool,
    pub numeric: bool,
    pub special: bool,
    pub space: bool,
    pub output_file_path: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(Path::new(&file::default_path()))
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(Path::new(&file::default_path()))
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = PassConfig::default();
        Self {
            pass_length: config.length,
            number: 1,
            lower: config.lower,
            upper: config.upper,
            numeric: config.numeric,
            special: config.special,
            space: config.space,
            output_file_path: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_pass_config() {
        let settings = Settings::default();
        let config = PassConfig::default();
        assert_eq!(settings.pass_length, config.length);
        assert_eq!(
            (settings.lower, settings.upper, settings.numeric),
            (config.lower, config.upper, config.numeric)
        );
        assert_eq!((settings.special, settings.space), (config.special, config.space));
        assert_eq!(settings.number, 1);
    }
}
