use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    options::{Options, CHARACTER_CLASSES, MAX_LENGTH, MIN_LENGTH},
};

const APP_DIR: &str = "passgen";
const SETTINGS_FILE: &str = "settings.toml";
const GENERATOR_TABLE: &str = "generator";

/// Locates the settings file, `$XDG_CONFIG_HOME` takes precedence over `$HOME/.config`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_home = match xdg_config_home {
        Some(p) => p.clone(),
        None => match home {
            Some(h) => h.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };

    Ok(config_home.join(APP_DIR).join(SETTINGS_FILE))
}

pub fn file_settings(file: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(file.to_path_buf()).required(false)
}

fn key(name: &str) -> String {
    format!("{GENERATOR_TABLE}.{name}")
}

fn default_settings() -> Result<config::Config> {
    let defaults = Options::default();
    let mut settings = config::Config::default();
    settings.set_default(&key("length"), defaults.length() as i64)?;
    for (class, _) in CHARACTER_CLASSES.iter() {
        settings.set_default(&key(class.key()), defaults.is_enabled(*class))?;
    }
    Ok(settings)
}

/// Reads the settings, falling back to the built in defaults for anything the file doesn't set.
/// Returns the settings together with the path of the file they were read from.
pub fn read_config(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(config::Config, PathBuf)> {
    let config_file_location = xdg_config_file_location(home, xdg_config_home)?;

    let mut settings = default_settings()?;
    settings.merge(file_settings(&config_file_location))?;

    Ok((settings, config_file_location))
}

pub fn options_from_config(settings: &config::Config) -> Result<Options> {
    let length = settings.get_int(&key("length"))?;
    let length = length.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize;

    let mut enabled = [false; 4];
    for (flag, (class, _)) in enabled.iter_mut().zip(CHARACTER_CLASSES.iter()) {
        *flag = settings.get_bool(&key(class.key()))?;
    }
    let [uppercase, lowercase, numbers, symbols] = enabled;

    Options::new(length, uppercase, lowercase, numbers, symbols)
}

/// Stores `options` as the defaults for the next start.
pub fn save_config(options: &Options, config_file_location: &Path) -> Result<()> {
    let mut generator = toml::Table::new();
    generator.insert(
        "length".to_owned(),
        toml::Value::Integer(options.length() as i64),
    );
    for (class, _) in CHARACTER_CLASSES.iter() {
        generator.insert(
            class.key().to_owned(),
            toml::Value::Boolean(options.is_enabled(*class)),
        );
    }

    let mut settings = toml::Table::new();
    settings.insert(GENERATOR_TABLE.to_owned(), toml::Value::Table(generator));

    if let Some(parent) = config_file_location.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(config_file_location, toml::to_string(&settings)?)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod tests;
