use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Everything a run needs. Built once at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The directory holding the `.md` posts.
    pub input_directory: PathBuf,

    /// The directory the pages are written to. Must be empty or absent.
    pub output_directory: PathBuf,

    /// The blog title.
    pub title: String,

    /// Posts per page; `0` puts every post on one page.
    pub posts_per_page: usize,
}

/// A possibly-incomplete set of settings, either from the command line or
/// from a project file. Layers are combined with [`Settings::or`] and turned
/// into a [`Config`] with [`Settings::into_config`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub posts_per_page: Option<usize>,
}

impl Settings {
    /// Loads settings from a YAML project file, e.g.:
    ///
    /// ```yaml
    /// input: posts
    /// output: public
    /// title: My Blog
    /// posts-per-page: 5
    /// ```
    ///
    /// Relative `input` and `output` paths are resolved against the directory
    /// containing the project file.
    pub fn from_project_file(path: &Path) -> Result<Settings> {
        let file = File::open(path)
            .with_context(|| format!("Opening project file `{}`", path.display()))?;
        let settings: Settings = serde_yaml::from_reader(file)
            .with_context(|| format!("Parsing project file `{}`", path.display()))?;
        let project_root = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Settings {
            input: settings.input.map(|p| project_root.join(p)),
            output: settings.output.map(|p| project_root.join(p)),
            ..settings
        })
    }

    /// Fills every unset field of `self` from `fallback`.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            input: self.input.or(fallback.input),
            output: self.output.or(fallback.output),
            title: self.title.or(fallback.title),
            posts_per_page: self.posts_per_page.or(fallback.posts_per_page),
        }
    }

    /// Validates the settings, failing if a required value is missing.
    pub fn into_config(self) -> Result<Config> {
        fn required<T>(value: Option<T>, key: &str) -> Result<T> {
            value.ok_or_else(|| anyhow!("Missing required setting `{}`", key))
        }

        Ok(Config {
            input_directory: required(self.input, "input")?,
            output_directory: required(self.output, "output")?,
            title: required(self.title, "title")?,
            posts_per_page: self.posts_per_page.unwrap_or(0),
        })
    }
}
