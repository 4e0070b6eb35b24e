//! Resource kinds and identifier envelopes

use serde::{Deserialize, Serialize};

/// The four simulated resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Post,
    User,
    Comment,
    Todo,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Post,
        ResourceKind::User,
        ResourceKind::Comment,
        ResourceKind::Todo,
    ];

    /// Lowercase singular name, used in validation messages
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Post => "post",
            ResourceKind::User => "user",
            ResourceKind::Comment => "comment",
            ResourceKind::Todo => "todo",
        }
    }

    /// Capitalized name, used in delete receipts
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Post => "Post",
            ResourceKind::User => "User",
            ResourceKind::Comment => "Comment",
            ResourceKind::Todo => "Todo",
        }
    }

    /// Plural collection name, used as the HTTP path segment
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Post => "posts",
            ResourceKind::User => "users",
            ResourceKind::Comment => "comments",
            ResourceKind::Todo => "todos",
        }
    }

    pub fn from_collection(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection().eq_ignore_ascii_case(segment))
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" | "posts" => Ok(ResourceKind::Post),
            "user" | "users" => Ok(ResourceKind::User),
            "comment" | "comments" => Ok(ResourceKind::Comment),
            "todo" | "todos" => Ok(ResourceKind::Todo),
            _ => Err(format!("Unknown resource kind: {}", s)),
        }
    }
}

/// Inclusive range from which synthetic identifiers are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdEnvelope {
    start: i64,
    end: i64,
}

impl IdEnvelope {
    /// Panics if `start > end`; envelopes are static schema data.
    pub const fn new(start: i64, end: i64) -> Self {
        assert!(start <= end, "envelope start must not exceed its end");
        Self { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn contains(&self, id: i64) -> bool {
        (self.start..=self.end).contains(&id)
    }

    /// Number of identifiers in the envelope
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }

    /// Map an arbitrary position onto the envelope, wrapping around
    pub fn nth(&self, n: u64) -> i64 {
        let offset = n % self.len();
        self.start + offset as i64
    }

    /// Clamp a value into the envelope
    pub fn clamp(&self, id: i64) -> i64 {
        id.clamp(self.start, self.end)
    }
}

impl std::fmt::Display for IdEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(ResourceKind::Post.name(), "post");
        assert_eq!(ResourceKind::Todo.label(), "Todo");
        assert_eq!(ResourceKind::Comment.collection(), "comments");
        assert_eq!(ResourceKind::User.to_string(), "user");
    }

    #[test]
    fn kind_from_collection() {
        assert_eq!(
            ResourceKind::from_collection("posts"),
            Some(ResourceKind::Post)
        );
        assert_eq!(
            ResourceKind::from_collection("TODOS"),
            Some(ResourceKind::Todo)
        );
        assert_eq!(ResourceKind::from_collection("albums"), None);
    }

    #[test]
    fn kind_from_str_accepts_singular_and_plural() {
        assert_eq!("user".parse::<ResourceKind>(), Ok(ResourceKind::User));
        assert_eq!("Comments".parse::<ResourceKind>(), Ok(ResourceKind::Comment));
        assert!("photo".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn envelope_contains_bounds() {
        let envelope = IdEnvelope::new(101, 200);
        assert!(envelope.contains(101));
        assert!(envelope.contains(200));
        assert!(!envelope.contains(100));
        assert!(!envelope.contains(201));
        assert_eq!(envelope.len(), 100);
    }

    #[test]
    fn envelope_nth_wraps() {
        let envelope = IdEnvelope::new(11, 20);
        assert_eq!(envelope.nth(0), 11);
        assert_eq!(envelope.nth(9), 20);
        assert_eq!(envelope.nth(10), 11);
    }

    #[test]
    fn envelope_clamp() {
        let envelope = IdEnvelope::new(201, 300);
        assert_eq!(envelope.clamp(7), 201);
        assert_eq!(envelope.clamp(250), 250);
        assert_eq!(envelope.clamp(9999), 300);
    }
}
