use serde::Deserialize;
use std::{env, fmt, fs, net::SocketAddr};

use crate::interface_adapters::state::StaticCredentials;

const DEFAULT_USER: &str = "user";
const DEFAULT_PASSWORD: &str = "password";

pub fn server_addr() -> SocketAddr {
    env::var("PEOPLE_SERVER_ADDR")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3004)))
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: std::io::Error },
    Parse(toml::de::Error),
    NoUsers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => write!(f, "failed to read {path}: {source}"),
            ConfigError::Parse(err) => write!(f, "invalid users file: {err}"),
            ConfigError::NoUsers => write!(f, "users file defines no users"),
        }
    }
}

impl std::error::Error for ConfigError {}

// Users file layout:
//
// [[users]]
// name = "user"
// password = "password"
#[derive(Debug, Deserialize)]
struct UsersFile {
    #[serde(default)]
    users: Vec<UserEntry>,
}

#[derive(Debug, Deserialize)]
struct UserEntry {
    name: String,
    password: String,
}

// `PEOPLE_USERS_FILE` wins; otherwise a single pair from `PEOPLE_USER` / `PEOPLE_PASSWORD`.
pub fn credentials() -> Result<StaticCredentials, ConfigError> {
    if let Ok(path) = env::var("PEOPLE_USERS_FILE") {
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        return parse_users(&text);
    }

    let user = env::var("PEOPLE_USER").unwrap_or_else(|_| DEFAULT_USER.to_string());
    let password = env::var("PEOPLE_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());
    Ok(StaticCredentials::single(user, password))
}

pub fn parse_users(text: &str) -> Result<StaticCredentials, ConfigError> {
    let file: UsersFile = toml::from_str(text).map_err(ConfigError::Parse)?;

    let credentials = file
        .users
        .into_iter()
        .fold(StaticCredentials::default(), |acc, entry| {
            acc.with_user(entry.name, entry.password)
        });
    if credentials.is_empty() {
        return Err(ConfigError::NoUsers);
    }
    Ok(credentials)
}
