use klaviyo_core::{ApiError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::env;

// ${VAR} and ${VAR:-default}
static ENV_VAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}").expect("invalid regex pattern")
});

/// Expand `${VAR}` / `${VAR:-default}` references in raw config text
/// before YAML parsing. A referenced variable with neither a value nor
/// a default is a hard error so a half-expanded config never loads.
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = input.to_string();
    let mut missing = Vec::new();

    for cap in ENV_VAR_REGEX.captures_iter(input) {
        let full_match = &cap[0];
        let var_name = &cap[1];
        let default_value = cap.get(2).map(|m| m.as_str());

        match env::var(var_name) {
            Ok(value) => {
                result = result.replace(full_match, &value);
            }
            Err(_) => match default_value {
                Some(default) => {
                    result = result.replace(full_match, default);
                }
                None => missing.push(var_name.to_string()),
            },
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::ConfigError(format!(
            "missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_with_value_and_default() {
        env::set_var("KLAVIYO_SUBST_TEST", "live");
        let out =
            substitute_env_vars("mode: ${KLAVIYO_SUBST_TEST}\nfallback: ${KLAVIYO_NOPE:-off}")
                .unwrap();
        assert_eq!(out, "mode: live\nfallback: off");
        env::remove_var("KLAVIYO_SUBST_TEST");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let err = substitute_env_vars("token: ${KLAVIYO_DEFINITELY_UNSET}").unwrap_err();
        assert!(err.to_string().contains("KLAVIYO_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let input = "base_url: https://a.klaviyo.com";
        assert_eq!(substitute_env_vars(input).unwrap(), input);
    }
}
