//! Worker-to-UI events and the error model for image loading.

use crate::ui::images::DecodedImage;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    ImageLoaded {
        reference: String,
        image: DecodedImage,
    },
    ImageFailed {
        reference: String,
        error: UiError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Decode,
    Missing,
    Disabled,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    ImageFetch,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("remote images are disabled") {
            UiErrorCategory::Disabled
        } else if message_lower.contains("not found")
            || message_lower.contains("no such file")
            || message_lower.contains("cannot find")
            || message_lower.contains("404")
            || message_lower.contains("empty image reference")
        {
            UiErrorCategory::Missing
        } else if message_lower.contains("decode")
            || message_lower.contains("format")
            || message_lower.contains("unsupported")
        {
            UiErrorCategory::Decode
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("dns")
            || message_lower.contains("disconnected")
            || message_lower.contains("queue is full")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Startup failures leave the worker unable to serve any further request.
    pub fn is_fatal(&self) -> bool {
        self.context == UiErrorContext::BackendStartup
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "transport",
        UiErrorCategory::Decode => "decode",
        UiErrorCategory::Missing => "missing",
        UiErrorCategory::Disabled => "disabled",
        UiErrorCategory::Unknown => "unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_missing_assets() {
        let err = UiError::from_message(
            UiErrorContext::ImageFetch,
            "failed to read './public/placeholder.jpg': No such file or directory (os error 2)",
        );
        assert_eq!(err.category(), UiErrorCategory::Missing);
        assert!(!err.is_fatal());
    }

    #[test]
    fn classifies_http_failures_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::ImageFetch,
            "error sending request: connection refused",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err_label(err.category()), "transport");
    }

    #[test]
    fn classifies_decoder_errors() {
        let err = UiError::from_message(
            UiErrorContext::ImageFetch,
            "The image format could not be determined",
        );
        assert_eq!(err.category(), UiErrorCategory::Decode);
    }

    #[test]
    fn offline_mode_is_its_own_category() {
        let err = UiError::from_message(
            UiErrorContext::ImageFetch,
            "remote images are disabled (offline mode)",
        );
        assert_eq!(err.category(), UiErrorCategory::Disabled);
    }

    #[test]
    fn startup_failures_are_fatal() {
        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "backend worker startup failure: failed to build runtime",
        );
        assert!(err.is_fatal());
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert!(err.message().contains("startup"));
    }
}
