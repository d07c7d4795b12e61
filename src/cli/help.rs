/// Tracing filter for a `-v` count, `None` to fall back to the configured level
pub fn get_log_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        2 => Some("trace"),
        _ => Some("trace,hyper=debug,tower=debug"), // -vvv shows everything including dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert_eq!(get_log_level(0), None);
        assert_eq!(get_log_level(1), Some("debug"));
        assert_eq!(get_log_level(2), Some("trace"));
        assert!(get_log_level(5).unwrap().starts_with("trace,"));
    }
}
