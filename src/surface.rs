//! User confirmation / notification capability.
//!
//! Each screen implements [`Surface`] with whatever modality it has: native
//! alert dialogs on mobile, `window.confirm` or an in-page banner on the web.
//! The engine only needs a yes/no answer for destructive actions and a way to
//! show a non-blocking message.
//!
//! [`Platform`] carries the small behavioral differences between the two
//! screens so the engine itself stays shared.

use crate::domain::chart::ChartMode;
use serde::{Deserialize, Serialize};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A yes/no question for a destructive action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Confirmation {
    /// The prompt shown before wiping the conversion history.
    pub fn clear_history() -> Self {
        Self {
            title: "Clear History".to_string(),
            message: "Are you sure you want to clear all conversion history?".to_string(),
            confirm_label: "Clear".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// Presentation-layer capability consumed by the controller.
#[allow(async_fn_in_trait)]
pub trait Surface {
    /// Ask the user; resolve to `true` only on an explicit affirmative answer.
    async fn confirm(&self, request: &Confirmation) -> bool;

    /// Show a message without waiting for the user.
    fn notify(&self, notice: Notice);
}

impl<T: Surface + ?Sized> Surface for &T {
    async fn confirm(&self, request: &Confirmation) -> bool {
        (**self).confirm(request).await
    }

    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// Which screen the engine is driving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Native mobile screen: fixed-width label axis, silent save failures.
    #[default]
    Mobile,
    /// Web screen: full-series chart, save failures shown to the user.
    Web,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Web => "web",
        }
    }

    /// Chart rendering mode used by this screen.
    pub fn chart_mode(&self) -> ChartMode {
        match self {
            Self::Mobile => ChartMode::LabelThinned,
            Self::Web => ChartMode::Full,
        }
    }

    /// Whether a failed history save is shown to the user (it is always logged).
    pub fn surfaces_save_failures(&self) -> bool {
        matches!(self, Self::Web)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_policies() {
        assert_eq!(Platform::Mobile.chart_mode(), ChartMode::LabelThinned);
        assert_eq!(Platform::Web.chart_mode(), ChartMode::Full);
        assert!(!Platform::Mobile.surfaces_save_failures());
        assert!(Platform::Web.surfaces_save_failures());
    }

    #[test]
    fn test_notice_constructors() {
        let notice = Notice::warning("Save failed", "disk full");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Save failed");
    }

    #[test]
    fn test_platform_serde() {
        let p: Platform = serde_json::from_str("\"web\"").unwrap();
        assert_eq!(p, Platform::Web);
    }
}
