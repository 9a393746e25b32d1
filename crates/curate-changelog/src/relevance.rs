//! User-facing relevance gate

use tracing::debug;

/// Terms that indicate a change users can see or touch
pub const USER_FACING_KEYWORDS: &[&str] = &[
    "voice", "audio", "chat", "conversation", "talk", "speak",
    "tutor", "ai", "learning", "study", "education", "student",
    "quiz", "test", "assessment", "question", "answer",
    "session", "lesson", "course", "curriculum",
    "dashboard", "profile", "progress", "tracking",
    "note", "annotation", "highlight", "bookmark",
    "document", "pdf", "file", "upload", "download",
    "mobile", "responsive", "touch", "gesture",
    "interface", "design", "layout", "theme", "style",
    "personalization", "customization", "preference",
    "notification", "alert", "reminder",
    "search", "filter", "sort", "navigation",
    "login", "authentication", "account", "user",
    "subscription", "payment", "billing", "credit",
    "feedback", "rating", "review", "comment",
    "share", "collaborate", "team", "group",
    "export", "import", "sync", "backup",
    "accessibility", "language", "translation",
    "speed", "performance", "loading", "fast",
    "button", "menu", "sidebar", "header", "footer",
    "page", "screen", "view", "display", "show",
    "hide", "toggle", "switch", "enable", "disable",
    "add", "remove", "update", "change", "modify",
    "improve", "enhance", "better", "fix", "resolve",
    "create", "build", "make", "develop", "implement",
    "feature", "functionality", "capability", "option",
    "setting", "configuration", "control", "panel",
    "form", "input", "field", "validation", "error",
    "message", "text", "content", "data", "information",
    "icon", "image", "picture", "graphic", "visual",
    "color", "font", "size", "spacing", "margin",
    "animation", "transition", "effect", "interaction",
    "click", "hover", "focus", "scroll", "swipe",
    "drag", "drop", "select", "choose", "pick",
    "connect", "disconnect", "refresh", "reload",
    "save", "load", "open", "close", "start", "stop",
    "pause", "resume", "play", "record", "capture",
    "edit", "delete", "copy", "paste", "cut", "undo",
    "redo", "cancel", "confirm", "submit", "send",
    "receive", "get", "fetch", "retrieve", "obtain",
];

/// Decides whether a cleaned message is worth showing to users.
///
/// By default the keyword check only feeds logging: messages without a
/// keyword are still accepted. A strict gate rejects them.
#[derive(Debug, Clone)]
pub struct RelevanceGate {
    keywords: Vec<String>,
    strict: bool,
}

impl RelevanceGate {
    /// Create a gate with the built-in keywords
    pub fn new() -> Self {
        Self {
            keywords: USER_FACING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            strict: false,
        }
    }

    /// Create a gate that rejects messages without a user-facing keyword
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::new()
        }
    }

    /// First keyword found in the message, if any
    pub fn matched_keyword(&self, message: &str) -> Option<&str> {
        let message = message.to_lowercase();
        self.keywords
            .iter()
            .find(|k| message.contains(k.as_str()))
            .map(String::as_str)
    }

    /// Check if a cleaned message is user-facing
    pub fn is_user_facing(&self, message: &str) -> bool {
        if self.matched_keyword(message).is_some() {
            return true;
        }

        if self.strict {
            debug!(message, "no user-facing keyword, rejected");
            return false;
        }

        debug!(message, "no user-facing keyword, keeping anyway");
        true
    }
}

impl Default for RelevanceGate {
    fn default() -> Self {
        Self::new()
    }
}
