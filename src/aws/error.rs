//! AWS error hints
//!
//! Maps tagging API error codes to short, user-facing suggestions.

/// Error code to suggestion mapping
const HINTS: &[(&str, &str)] = &[
    (
        "AccessDeniedException",
        "Permission denied. The caller needs tag:GetResources.",
    ),
    (
        "UnrecognizedClientException",
        "Credentials were rejected. Check your AWS profile or access keys.",
    ),
    (
        "InvalidClientTokenId",
        "Credentials were rejected. Check your AWS profile or access keys.",
    ),
    (
        "ExpiredTokenException",
        "Session credentials expired. Refresh them (e.g. 'aws sso login').",
    ),
    (
        "ThrottledException",
        "AWS API rate limit hit. Wait a moment and run again.",
    ),
    (
        "ThrottlingException",
        "AWS API rate limit hit. Wait a moment and run again.",
    ),
    (
        "InvalidParameterException",
        "The request was rejected. Check the region name.",
    ),
    (
        "PaginationTokenExpiredException",
        "The pagination token expired mid-scan. Run again.",
    ),
    (
        "InternalServiceException",
        "AWS service temporarily unavailable. Please try again.",
    ),
];

/// Suggestion for a known error code
pub fn hint_for_code(code: &str) -> Option<&'static str> {
    HINTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, hint)| *hint)
}

/// One-line rendering of an error for stderr, with hint if any
pub fn format_aws_error(message: &str, hint: Option<&str>) -> String {
    // Control characters from service messages would garble the terminal
    let sanitized: String = message
        .chars()
        .filter(|c| !c.is_control())
        .collect();

    match hint {
        Some(hint) => format!("{}\n  hint: {}", sanitized, hint),
        None => sanitized,
    }
}
