//! Classification of log categories into host (system) and user code.
//!
//! The host runtime names its own categories with a small set of prefixes.
//! User code writes under `Function.<name>.User`, which sits inside the
//! `Function.` prefix but is not system output.

/// Prefixes of categories produced by the host runtime itself.
pub const SYSTEM_CATEGORY_PREFIXES: &[&str] =
    &["Microsoft.Azure.WebJobs.", "Function.", "Worker.", "Host."];

const FUNCTION_PREFIX: &str = "Function.";
const USER_SUFFIX: &str = ".User";

/// Origin of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Emitted by the host runtime's internal machinery
    System,
    /// Emitted by user-authored code
    User,
}

impl CategoryKind {
    /// Classify a category name.
    pub fn of(category: &str) -> Self {
        if is_system_category(category) {
            Self::System
        } else {
            Self::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// `Function.<name>.User`, with a non-empty function name.
fn is_function_user_category(category: &str) -> bool {
    category
        .strip_prefix(FUNCTION_PREFIX)
        .and_then(|rest| rest.strip_suffix(USER_SUFFIX))
        .is_some_and(|name| !name.is_empty())
}

/// Whether `category` belongs to the host runtime rather than user code.
pub fn is_system_category(category: &str) -> bool {
    SYSTEM_CATEGORY_PREFIXES
        .iter()
        .any(|prefix| category.starts_with(prefix))
        && !is_function_user_category(category)
}
