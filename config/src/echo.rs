use console_fixtures_common::constants::{ECHO_LINE_COUNT, ECHO_MAX_LINE_LEN};

use super::Config;

#[derive(Debug, serde_wrapper::Deserialize)]
pub struct EchoConfig {
    pub line_count: usize,
    pub max_len: usize,
}

impl Config for EchoConfig {
    const PREFIX: &'static str = "ECHO";

    fn defaults() -> Vec<(&'static str, String)> {
        vec![
            ("linecount", ECHO_LINE_COUNT.to_string()),
            ("maxlen", ECHO_MAX_LINE_LEN.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn read_config() {
        std::env::set_var("CONSOLE_FIXTURES_ECHO_LINECOUNT", "3");
        std::env::remove_var("CONSOLE_FIXTURES_ECHO_MAXLEN");
        let config = <EchoConfig as Config>::from_env();
        std::env::remove_var("CONSOLE_FIXTURES_ECHO_LINECOUNT");

        let config = config.unwrap();
        assert_eq!(config.line_count, 3);
        assert_eq!(config.max_len, ECHO_MAX_LINE_LEN);
    }

    #[test]
    #[serial]
    fn rejects_non_numeric_limit() {
        std::env::set_var("CONSOLE_FIXTURES_ECHO_MAXLEN", "lots");
        let config = <EchoConfig as Config>::from_env();
        std::env::remove_var("CONSOLE_FIXTURES_ECHO_MAXLEN");

        assert!(config.is_err());
    }
}
