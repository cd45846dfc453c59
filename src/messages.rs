use chrono::{DateTime, Duration, Utc};
use hourglass_rs::SafeTimeProvider;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// how long an alert stays up before it dismisses itself
pub const DEFAULT_AUTO_DISMISS_SECS: i64 = 5;

/// generic text shown when a request fails for an unexpected reason
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "alert-success",
            MessageKind::Error => "alert-danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MessageKind::Success => "check-circle",
            MessageKind::Error => "exclamation-triangle",
        }
    }
}

/// a dismissible banner message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    /// bootstrap alert markup; the text is HTML-escaped
    pub fn render_html(&self) -> String {
        format!(
            concat!(
                "<div class=\"alert {} alert-dismissible fade show\" role=\"alert\">\n",
                "    <i class=\"bi bi-{}\"></i> {}\n",
                "    <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\"></button>\n",
                "</div>"
            ),
            self.kind.alert_class(),
            self.kind.icon(),
            escape_html(&self.text),
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// sink for banner messages
pub trait MessageSink {
    fn show(&mut self, message: Message);
}

/// a message on the board, with the time it was posted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedMessage {
    pub id: Uuid,
    pub message: Message,
    pub posted_at: DateTime<Utc>,
}

/// messages currently on screen, newest first
///
/// The board does not own a clock; callers pass the time provider.
#[derive(Debug, Clone)]
pub struct MessageBoard {
    messages: Vec<PostedMessage>,
    auto_dismiss: Duration,
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_AUTO_DISMISS_SECS))
    }
}

impl MessageBoard {
    pub fn new(auto_dismiss: Duration) -> Self {
        Self {
            messages: Vec::new(),
            auto_dismiss,
        }
    }

    /// put a message at the top of the board
    pub fn post(&mut self, message: Message, time: &SafeTimeProvider) -> Uuid {
        let id = Uuid::new_v4();
        self.messages.insert(
            0,
            PostedMessage {
                id,
                message,
                posted_at: time.now(),
            },
        );
        id
    }

    /// close one message; returns false when it was already gone
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    /// remove every message older than the auto-dismiss delay
    pub fn dismiss_expired(&mut self, time: &SafeTimeProvider) -> Vec<PostedMessage> {
        let now = time.now();
        let auto_dismiss = self.auto_dismiss;
        let (expired, live): (Vec<_>, Vec<_>) = self
            .messages
            .drain(..)
            .partition(|m| now - m.posted_at >= auto_dismiss);
        self.messages = live;

        if !expired.is_empty() {
            debug!("auto-dismissed {} message(s)", expired.len());
        }
        expired
    }

    pub fn messages(&self) -> &[PostedMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// markup for every message on the board, newest first
    pub fn render_html(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.message.render_html())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// a board paired with the clock it posts against
pub struct TimedMessageSink<'a> {
    pub board: &'a mut MessageBoard,
    pub time: &'a SafeTimeProvider,
}

impl MessageSink for TimedMessageSink<'_> {
    fn show(&mut self, message: Message) {
        self.board.post(message, self.time);
    }
}

impl MessageSink for Vec<Message> {
    fn show(&mut self, message: Message) {
        self.push(message);
    }
}
