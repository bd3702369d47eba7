use crate::common::*;

#[doc = r#"
    Reads an environment variable and falls back to `default` when it is unset.

    The program takes no command line arguments, so every path it touches has
    a built-in default that the environment (or `.env`) may override.

    # Arguments
    * `key`     - Environment variable name
    * `default` - Value used when the variable is not set

    # Returns
    * `String` - The environment value or the default
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[doc = r#"
    Path of the TOML server configuration file.

    Taken from `SERVER_CONFIG_PATH`, defaulting to `./config/server_config.toml`.
    The file holds the input/output paths, the chart service endpoint and the
    rendering options. When the file does not exist the built-in defaults are
    used instead.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("SERVER_CONFIG_PATH", "./config/server_config.toml"));
