//! Share flow for a finished result.
//!
//! Native share when the platform has it; otherwise the page URL goes to the
//! clipboard and the caller shows a confirmation. A failed native share (user
//! cancel included) is logged and swallowed; it never falls through to the
//! clipboard.

use thiserror::Error;

use crate::core::result_type::{ResultKind, ResultType};
use crate::core::score::Score;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The native share sheet rejected the request (`AbortError` on cancel).
    #[error("share rejected: {0}")]
    Rejected(String),
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl ShareError {
    /// The user closed the share sheet.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ShareError::Rejected(name) if name == "AbortError")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Payload for `result`, with copy from the active locale.
    pub fn for_result(result: &ResultType, url: String) -> Self {
        Self {
            title: crate::t!("share-title"),
            text: crate::t!("share-text", title = result.title.as_str(), score = result.score),
            url,
        }
    }
}

/// In-app path that reproduces a result view, e.g. `/result/fox/80/60`.
pub fn result_path(kind: ResultKind, score: &Score) -> String {
    format!("/result/{}/{}/{}", kind.slug(), score.l, score.e)
}

/// Platform capabilities the share action needs.
#[allow(async_fn_in_trait)]
pub trait ShareSurface {
    fn supports_native_share(&self) -> bool;

    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError>;

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;

    fn current_url(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet completed.
    Shared,
    /// Native share failed or was cancelled; nothing to show.
    Dismissed,
    /// No native share; the link is on the clipboard.
    LinkCopied { url: String },
    /// No native share and the clipboard refused the link.
    CopyFailed { url: String },
}

impl ShareOutcome {
    /// User-facing notice for this outcome, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            ShareOutcome::Shared | ShareOutcome::Dismissed => None,
            ShareOutcome::LinkCopied { .. } => Some(crate::t!("share-copied")),
            ShareOutcome::CopyFailed { url } => {
                Some(crate::t!("share-copy-failed", url = url.as_str()))
            }
        }
    }
}

/// Share `result` through `surface`.
pub async fn share_result<S: ShareSurface>(surface: &S, result: &ResultType) -> ShareOutcome {
    let url = surface.current_url();

    if surface.supports_native_share() {
        let payload = SharePayload::for_result(result, url);
        return match surface.native_share(&payload).await {
            Ok(()) => {
                tracing::debug!(kind = %result.id, "native share completed");
                ShareOutcome::Shared
            }
            Err(err) if err.is_cancellation() => {
                tracing::info!("share sheet dismissed");
                ShareOutcome::Dismissed
            }
            Err(err) => {
                tracing::warn!("error sharing: {err}");
                ShareOutcome::Dismissed
            }
        };
    }

    match surface.copy_to_clipboard(&url).await {
        Ok(()) => ShareOutcome::LinkCopied { url },
        Err(err) => {
            tracing::warn!("could not copy share link: {err}");
            ShareOutcome::CopyFailed { url }
        }
    }
}
