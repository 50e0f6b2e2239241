//! The `logsieve levels` command.

use console::style;
use logsieve_core::config::configured_overrides;
use logsieve_core::FilterPolicy;
use std::fmt::Write;

fn render(policy: &FilterPolicy) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", style("Resolved defaults").bold());
    let _ = writeln!(out, "  verbose:            {}", policy.verbose());
    let _ = writeln!(out, "  ci detected:        {}", policy.ci_detected());
    let _ = writeln!(out, "  system default:     {}", policy.system_default_level());
    let _ = writeln!(out, "  user default:       {}", policy.user_default_level());
    let _ = writeln!(out, "  effective default:  {}", policy.effective_default_level());

    let overrides = configured_overrides(policy.config());
    let _ = write!(out, "{}", style("Overrides").bold());
    if overrides.is_empty() {
        let _ = write!(out, "\n  {}", style("(none)").dim());
    }
    for (category, level) in &overrides {
        let _ = write!(out, "\n  {category:<30} {level}");
    }
    out
}

/// Execute the levels command.
pub fn execute(policy: &FilterPolicy) -> anyhow::Result<()> {
    if policy.ci_detected() {
        tracing::info!(target: "Host.Cli", "CI environment detected, host output is verbose");
    }

    println!("{}", render(policy));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsieve_core::HostConfig;
    use std::sync::Arc;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn render_defaults_without_config() {
        console::set_colors_enabled(false);
        let policy = FilterPolicy::with_probe(None, None, &no_env);
        let out = render(&policy);

        assert!(out.contains("system default:     Warning"));
        assert!(out.contains("user default:       Information"));
        assert!(out.contains("(none)"));
    }

    #[test]
    fn render_reports_ci_from_policy() {
        console::set_colors_enabled(false);
        let ci = |name: &str| (name == "RUN_ID").then(|| "7".to_string());

        let out = render(&FilterPolicy::with_probe(None, None, &ci));
        assert!(out.contains("ci detected:        true"));
        assert!(out.contains("verbose:            true"));

        let out = render(&FilterPolicy::with_probe(None, Some(false), &ci));
        assert!(out.contains("ci detected:        false"));
    }

    #[test]
    fn render_lists_overrides() {
        console::set_colors_enabled(false);
        let config = HostConfig::from_json_str(
            r#"{ "logging": { "logLevel": { "default": "Error", "Host.Results": "Trace" } } }"#,
        )
        .unwrap();
        let policy = FilterPolicy::with_probe(Some(Arc::new(config)), Some(true), &no_env);
        let out = render(&policy);

        assert!(out.contains("verbose:            true"));
        assert!(out.contains("system default:     Error"));
        assert!(out.contains("Host.Results"));
        assert!(!out.contains("(none)"));
    }
}
