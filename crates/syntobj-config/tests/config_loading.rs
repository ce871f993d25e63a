//! Behaviour tests for layered configuration loading.

use std::cell::RefCell;
use std::ffi::OsString;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use camino::Utf8PathBuf;
use once_cell::sync::Lazy;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

use syntobj_config::{CONFIG_PATH_ENV, Config, ConfigError, ENV_PREFIX, LogFormat};

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Environment variables set for one scenario. Holds the process-wide lock
/// while any override is live and restores previous values on drop.
#[derive(Default)]
struct EnvOverrides {
    previous: Vec<(String, Option<OsString>)>,
    guard: Option<MutexGuard<'static, ()>>,
}

impl EnvOverrides {
    fn set_var(&mut self, key: &str, value: &str) {
        if self.guard.is_none() {
            self.guard = Some(
                ENV_MUTEX
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner),
            );
        }
        self.previous.push((key.to_owned(), std::env::var_os(key)));
        // Environment mutation is unsafe in edition 2024; the mutex keeps
        // overriding tests from racing each other.
        unsafe { std::env::set_var(key, value) };
    }
}

impl Drop for EnvOverrides {
    fn drop(&mut self) {
        while let Some((key, value)) = self.previous.pop() {
            match value {
                Some(previous) => unsafe { std::env::set_var(&key, previous) },
                None => unsafe { std::env::remove_var(&key) },
            }
        }
        drop(self.guard.take());
    }
}

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

struct World {
    temp_dir: TempDir,
    env: EnvOverrides,
    explicit: Option<Utf8PathBuf>,
    outcome: Option<Result<Config, ConfigError>>,
}

impl World {
    fn path(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.temp_dir.path().join(name))
            .unwrap_or_else(|path| panic!("non UTF-8 temp path: {}", path.display()))
    }

    fn write(&self, name: &str, text: &str) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text).unwrap_or_else(|err| panic!("write {path}: {err}"));
        path
    }

    fn loaded(&self) -> &Config {
        match &self.outcome {
            Some(Ok(config)) => config,
            other => panic!("expected loaded configuration, got {other:?}"),
        }
    }
}

#[fixture]
fn world() -> RefCell<World> {
    let temp_dir = TempDir::new().unwrap_or_else(|err| panic!("temp dir: {err}"));
    RefCell::new(World {
        temp_dir,
        env: EnvOverrides::default(),
        explicit: None,
        outcome: None,
    })
}

#[given("the environment names a file containing {text}")]
fn env_file(world: &RefCell<World>, text: QuotedString) {
    let mut w = world.borrow_mut();
    let path = w.write("env.yaml", &text.0);
    w.env.set_var(CONFIG_PATH_ENV, path.as_str());
}

#[given("the environment sets {field} to {value}")]
fn env_field(world: &RefCell<World>, field: QuotedString, value: QuotedString) {
    let key = format!("{ENV_PREFIX}{}", field.0);
    world.borrow_mut().env.set_var(&key, &value.0);
}

#[given("an explicit file containing {text}")]
fn explicit_file(world: &RefCell<World>, text: QuotedString) {
    let mut w = world.borrow_mut();
    let path = w.write("explicit.yaml", &text.0);
    w.explicit = Some(path);
}

#[when("configuration is loaded")]
fn load(world: &RefCell<World>) {
    let mut w = world.borrow_mut();
    let outcome = Config::discover(w.explicit.as_deref());
    w.outcome = Some(outcome);
}

#[then("the log format is {format}")]
fn log_format_is(world: &RefCell<World>, format: QuotedString) {
    let expected = LogFormat::from_str(&format.0).unwrap_or_else(|err| panic!("format: {err}"));
    assert_eq!(world.borrow().loaded().log_format(), expected);
}

#[then("the log filter is {filter}")]
fn log_filter_is(world: &RefCell<World>, filter: QuotedString) {
    assert_eq!(world.borrow().loaded().log_filter(), filter.0);
}

#[then("loading fails with a load error")]
fn load_error(world: &RefCell<World>) {
    let w = world.borrow();
    assert!(
        matches!(w.outcome, Some(Err(ConfigError::Load { .. }))),
        "expected load error, got {:?}",
        w.outcome
    );
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Environment variable selects the configuration file"
)]
fn environment_selects_file(world: RefCell<World>) {
    drop(world);
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Explicit path overrides the environment"
)]
fn explicit_overrides_environment(world: RefCell<World>) {
    drop(world);
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Environment variables override single fields"
)]
fn environment_overrides_fields(world: RefCell<World>) {
    drop(world);
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Environment names a malformed file"
)]
fn environment_malformed_file(world: RefCell<World>) {
    drop(world);
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Invalid explicit file"
)]
fn invalid_explicit_file(world: RefCell<World>) {
    drop(world);
}
