//! The `logsieve check` command.

use clap::Args;
use console::style;
use logsieve_core::{CategoryKind, FilterPolicy, SeverityLevel};
use std::fmt::Write;

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Log category, e.g. `Host.Startup` or `Function.HttpTrigger.User`
    pub category: String,

    /// Record level: Trace, Debug, Information, Warning, Error, Critical or None
    pub level: SeverityLevel,
}

/// Outcome of checking one record against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub kind: CategoryKind,
    pub override_level: Option<SeverityLevel>,
    pub should_emit: bool,
    pub is_enabled: bool,
}

impl Decision {
    pub fn evaluate(policy: &FilterPolicy, category: &str, level: SeverityLevel) -> Self {
        Self {
            kind: CategoryKind::of(category),
            override_level: policy.override_for(category),
            should_emit: policy.should_emit(category, level),
            is_enabled: policy.is_enabled(category, level),
        }
    }

    /// Printed to the console only if both gates pass.
    pub fn printed(&self) -> bool {
        self.should_emit && self.is_enabled
    }
}

fn yes_no(value: bool) -> String {
    if value {
        style("yes").green().to_string()
    } else {
        style("no").red().to_string()
    }
}

fn render(args: &CheckArgs, decision: &Decision) -> String {
    let mut out = String::new();
    let override_level = decision
        .override_level
        .map_or_else(|| "none".to_string(), |level| level.to_string());

    let _ = writeln!(out, "Category:     {} ({})", args.category, decision.kind.as_str());
    let _ = writeln!(out, "Level:        {}", args.level);
    let _ = writeln!(out, "Override:     {override_level}");
    let _ = writeln!(out, "should_emit:  {}", yes_no(decision.should_emit));
    let _ = writeln!(out, "is_enabled:   {}", yes_no(decision.is_enabled));
    let _ = write!(
        out,
        "Console:      {}",
        if decision.printed() {
            style("printed").green().bold()
        } else {
            style("hidden").dim()
        }
    );
    out
}

/// Execute the check command.
pub fn execute(args: CheckArgs, policy: &FilterPolicy) -> anyhow::Result<()> {
    let decision = Decision::evaluate(policy, &args.category, args.level);
    tracing::debug!(target: "Host.Cli", ?decision, "Checked {}", args.category);

    println!("{}", render(&args, &decision));
    Ok(())
}
