use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use tone_core::{Industry, Origin};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let industry: Industry = parse_enum("government", "industry").expect("industry should parse");
        assert_eq!(industry, Industry::Government);
    }

    #[test]
    fn parses_hyphenated_and_upper_case_aliases() {
        let origin: Origin = parse_enum("File-Import", "origin").expect("origin should parse");
        assert_eq!(origin, Origin::FileImport);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Industry>("retail", "industry").expect_err("should fail");
        assert!(err.to_string().contains("invalid industry 'retail'"));
    }
}
