use schemars::JsonSchema;
use serde::Deserialize;

/// Log output format style, one per `tracing_subscriber::fmt` format
#[derive(Debug, Default, Deserialize, JsonSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatStyle {
    /// Human-readable, single-line logs
    #[default]
    Full,
    /// Single-line logs optimized for short line lengths
    Compact,
    /// Newline-delimited JSON logs
    Json,
    /// Multi-line logs with source locations
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::FormatStyle;
    use rstest::rstest;
    use serde::Deserialize;
    use serde::de::value::{Error, StrDeserializer};

    #[test]
    fn full_style_returned_as_default() {
        assert_eq!(FormatStyle::default(), FormatStyle::Full);
    }

    #[rstest]
    #[case("full", FormatStyle::Full)]
    #[case("compact", FormatStyle::Compact)]
    #[case("json", FormatStyle::Json)]
    #[case("pretty", FormatStyle::Pretty)]
    fn yaml_deserialization_deserializes_into_the_correct_format_style(
        #[case] yaml_value: &str,
        #[case] expected: FormatStyle,
    ) {
        let actual: FormatStyle = serde_yaml::from_str(yaml_value).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case("Full")]
    #[case("JSON")]
    #[case("plain")]
    fn direct_deserialization_of_invalid_style_results_in_an_unknown_variant_error(
        #[case] invalid_value: &str,
    ) {
        let de = StrDeserializer::<Error>::new(invalid_value);
        let err = FormatStyle::deserialize(de).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}
