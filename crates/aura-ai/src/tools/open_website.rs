//! The `open_website` tool.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use url::Url;

use super::executor::ToolOutcome;
use super::launcher::UrlLauncher;

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("static regex pattern must compile")
});

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Normalize a model-supplied URL.
///
/// A URL without a scheme gets `default_scheme` prefixed. The result must
/// parse, carry a host, and use http or https. The returned string is the
/// input as written (plus any prefix), not the parser's re-serialization.
pub fn canonicalize_url(raw: &str, default_scheme: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("url is empty".to_string());
    }

    let candidate = if SCHEME_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{default_scheme}://{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| format!("invalid url '{trimmed}': {e}"))?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(format!("unsupported url scheme '{}'", parsed.scheme()));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(format!("url '{trimmed}' has no host"));
    }

    Ok(candidate)
}

pub(super) fn run(arguments: &Value, default_scheme: &str, launcher: &dyn UrlLauncher) -> ToolOutcome {
    let url = match required_string(arguments, "url") {
        Ok(url) => url,
        Err(reason) => return ToolOutcome::failure(reason),
    };

    let canonical = match canonicalize_url(url, default_scheme) {
        Ok(canonical) => canonical,
        Err(reason) => return ToolOutcome::failure(reason),
    };

    if let Err(e) = launcher.launch(&canonical) {
        return ToolOutcome::failure(format!("could not dispatch {canonical}: {e}"));
    }

    ToolOutcome::success(
        format!("Opening {canonical}"),
        serde_json::json!({ "status": "dispatched", "url": canonical }),
    )
}

/// Extract a required, non-blank string argument. Other JSON types are
/// rejected rather than coerced.
fn required_string<'a>(arguments: &'a Value, key: &str) -> Result<&'a str, String> {
    let value = match arguments {
        Value::Object(map) => map.get(key),
        Value::Null => None,
        other => {
            return Err(format!(
                "arguments must be an object, got {}",
                json_type_name(other)
            ))
        }
    };

    match value {
        None | Some(Value::Null) => Err(format!("missing required argument '{key}'")),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(format!("missing required argument '{key}'"))
        }
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(format!(
            "argument '{key}' must be a string, got {}",
            json_type_name(other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_common::PlatformError;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        opened: Mutex<Vec<String>>,
    }

    impl UrlLauncher for Recorder {
        fn launch(&self, url: &str) -> Result<(), PlatformError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl UrlLauncher for Broken {
        fn launch(&self, _url: &str) -> Result<(), PlatformError> {
            Err(PlatformError::LaunchError("no browser".into()))
        }
    }

    #[test]
    fn bare_host_gets_default_scheme() {
        assert_eq!(
            canonicalize_url("example.com", "https").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            canonicalize_url("  localhost:3000/docs ", "http").unwrap(),
            "http://localhost:3000/docs"
        );
    }

    #[test]
    fn existing_scheme_is_kept_verbatim() {
        assert_eq!(
            canonicalize_url("http://example.com/a?b=c", "https").unwrap(),
            "http://example.com/a?b=c"
        );
        assert_eq!(
            canonicalize_url("HTTPS://Example.com", "https").unwrap(),
            "HTTPS://Example.com"
        );
    }

    #[test]
    fn non_web_schemes_are_rejected() {
        let err = canonicalize_url("file:///etc/passwd", "https").unwrap_err();
        assert!(err.contains("unsupported url scheme 'file'"));
        assert!(canonicalize_url("javascript://alert(1)", "https").is_err());
    }

    #[test]
    fn unparseable_urls_are_rejected() {
        assert!(canonicalize_url("exa mple.com", "https").is_err());
        assert!(canonicalize_url("   ", "https").is_err());
    }

    #[test]
    fn run_dispatches_canonical_url() {
        let recorder = Recorder::default();
        let outcome = run(&json!({ "url": "example.com" }), "https", &recorder);
        match outcome {
            ToolOutcome::Success { summary, payload } => {
                assert_eq!(summary, "Opening https://example.com");
                assert_eq!(payload["status"], "dispatched");
                assert_eq!(payload["url"], "https://example.com");
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(*recorder.opened.lock().unwrap(), vec!["https://example.com"]);
    }

    #[test]
    fn missing_url_fails_without_launching() {
        let recorder = Recorder::default();
        for args in [json!({}), json!(null), json!({ "url": null }), json!({ "url": "  " })] {
            let outcome = run(&args, "https", &recorder);
            assert_eq!(
                outcome,
                ToolOutcome::failure("missing required argument 'url'"),
                "args: {args}"
            );
        }
        assert!(recorder.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn wrong_shaped_url_is_not_coerced() {
        let recorder = Recorder::default();
        let outcome = run(&json!({ "url": 42 }), "https", &recorder);
        assert_eq!(
            outcome,
            ToolOutcome::failure("argument 'url' must be a string, got number")
        );

        let outcome = run(&json!({ "url": ["example.com"] }), "https", &recorder);
        assert!(matches!(outcome, ToolOutcome::Failure { ref reason } if reason.contains("array")));
        assert!(recorder.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn non_object_arguments_fail() {
        let outcome = run(&json!("example.com"), "https", &Recorder::default());
        assert_eq!(
            outcome,
            ToolOutcome::failure("arguments must be an object, got string")
        );
    }

    #[test]
    fn launcher_failure_is_a_failure_outcome() {
        let outcome = run(&json!({ "url": "example.com" }), "https", &Broken);
        match outcome {
            ToolOutcome::Failure { reason } => {
                assert!(reason.starts_with("could not dispatch https://example.com"));
                assert!(reason.contains("no browser"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
