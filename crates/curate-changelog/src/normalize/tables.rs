//! Word lists used by the normalization steps

/// Conventional commit types stripped from the start of a message
pub const COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "chore", "docs", "style", "refactor", "test", "build", "ci", "perf",
];

/// Technical terms and their user-facing replacements, applied in order
pub const SYNONYMS: &[(&str, &str)] = &[
    ("component", "interface"),
    ("components", "interfaces"),
    ("api", "service"),
    ("apis", "services"),
    ("endpoint", "feature"),
    ("endpoints", "features"),
    ("auth", "authentication"),
    ("ui", "interface"),
    ("ux", "user experience"),
    ("implement", "add"),
    ("functionality", "feature"),
    ("hook", "feature"),
    ("hooks", "features"),
    ("pdf", "document"),
    ("pdfs", "documents"),
    ("backend", "service"),
    ("frontend", "interface"),
];

/// Source file extensions (regex alternation, without the dot)
pub const SOURCE_EXTENSIONS: &str = r"tsx?|jsx?|py|md|json|ya?ml|css|scss|html|sql";

/// Directory names that start a path fragment
pub const PATH_ROOTS: &[&str] = &["src", "components", "pages", "hooks", "lib", "utils"];

/// Acronyms removed as whole words (case-sensitive)
pub const ACRONYMS: &[&str] = &[
    "RLS", "SQL", "HTTP", "API", "URL", "URI", "JSON", "XML", "HTML", "CSS", "JS", "TS",
];
