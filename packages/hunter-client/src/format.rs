//! Text rendering for Hunter responses.
//!
//! Optional fields that are absent produce no line at all. The only
//! placeholders are `Unknown` and `N/A` in the domain-search table.

use serde_json::Value;
use std::fmt::Write;

use crate::error::{HunterError, Result};
use crate::types::{DomainEmail, DomainSearchData, EmailFinderData};

/// Render a found email-finder result.
///
/// Fails when the `score` key is absent or not a number. A `null` score
/// omits the score line.
pub fn render_email(data: &EmailFinderData, email: &str) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "Email found: {}", email);

    match &data.score {
        None => {
            return Err(HunterError::MalformedResponse(
                "response is missing 'score'".into(),
            ))
        }
        Some(Value::Null) => {}
        Some(Value::Number(score)) => {
            let _ = writeln!(out, "Confidence score: {}%", score);
        }
        Some(Value::String(score)) => {
            let _ = writeln!(out, "Confidence score: {}%", score);
        }
        Some(other) => {
            return Err(HunterError::MalformedResponse(format!(
                "unexpected 'score' value: {}",
                other
            )))
        }
    }

    if let Some(status) = data.verification.as_ref().and_then(|v| v.status.as_deref()) {
        let _ = writeln!(out, "Verification status: {}", status);
    }
    if let Some(position) = non_empty(&data.position) {
        let _ = writeln!(out, "Position: {}", position);
    }
    if let Some(company) = non_empty(&data.company) {
        let _ = writeln!(out, "Company: {}", company);
    }
    match &data.sources {
        Some(sources) if !sources.is_empty() => {
            let _ = writeln!(out, "Found in {} sources", sources.len());
        }
        _ => {}
    }

    Ok(out)
}

/// Render a non-empty domain-search result as a Markdown table.
pub fn render_domain_search(domain: &str, emails: &[DomainEmail], data: &DomainSearchData) -> String {
    let mut out = String::from("Hunter Email Finder\n");
    let _ = writeln!(out, "I found {} email addresses for {}:\n", emails.len(), domain);

    out.push_str("| Name | Title | Email |\n");
    out.push_str("|------|-------|-------|\n");

    for email in emails {
        let name = match (&email.first_name, &email.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => "Unknown".to_string(),
        };
        let position = email.position.as_deref().unwrap_or("Unknown");
        let address = email.value.as_deref().unwrap_or("N/A");
        let _ = writeln!(out, "| {} | {} | {} |", name, position, address);
    }

    if let Some(organization) = data.organization() {
        let _ = write!(out, "\nOrganization: {}", organization);
    }

    out
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finder(json: serde_json::Value) -> EmailFinderData {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_email_and_score_only() {
        let data = finder(serde_json::json!({"email": "jane@example.com", "score": 95}));
        let out = render_email(&data, "jane@example.com").unwrap();
        assert_eq!(out, "Email found: jane@example.com\nConfidence score: 95%\n");
    }

    #[test]
    fn test_all_optional_lines() {
        let data = finder(serde_json::json!({
            "email": "jane@example.com",
            "score": 88,
            "verification": {"status": "valid"},
            "position": "CTO",
            "company": "Example Inc",
            "sources": [{"uri": "https://a"}, {"uri": "https://b"}]
        }));
        let out = render_email(&data, "jane@example.com").unwrap();
        assert_eq!(
            out,
            "Email found: jane@example.com\n\
             Confidence score: 88%\n\
             Verification status: valid\n\
             Position: CTO\n\
             Company: Example Inc\n\
             Found in 2 sources\n"
        );
    }

    #[test]
    fn test_empty_optional_fields_are_skipped() {
        let data = finder(serde_json::json!({
            "email": "jane@example.com",
            "score": 40,
            "verification": {"status": null},
            "position": "",
            "company": null,
            "sources": []
        }));
        let out = render_email(&data, "jane@example.com").unwrap();
        assert_eq!(out, "Email found: jane@example.com\nConfidence score: 40%\n");
    }

    #[test]
    fn test_missing_score_is_malformed() {
        let data = finder(serde_json::json!({"email": "jane@example.com"}));
        let err = render_email(&data, "jane@example.com").unwrap_err();
        assert!(matches!(err, HunterError::MalformedResponse(_)));
    }

    #[test]
    fn test_null_score_omits_line() {
        let data = finder(serde_json::json!({
            "email": "jane@example.com",
            "score": null,
            "position": "CTO"
        }));
        let out = render_email(&data, "jane@example.com").unwrap();
        assert_eq!(out, "Email found: jane@example.com\nPosition: CTO\n");
    }

    #[test]
    fn test_domain_table_placeholders() {
        let data: DomainSearchData = serde_json::from_value(serde_json::json!({
            "domain": "example.com",
            "organization": "Example",
            "emails": [
                {"value": "jane@example.com", "first_name": "Jane", "last_name": "Doe", "position": "CEO"},
                {"first_name": "Solo"}
            ]
        }))
        .unwrap();
        let emails = data.emails.clone().unwrap();

        let out = render_domain_search("example.com", &emails, &data);
        assert_eq!(
            out,
            "Hunter Email Finder\n\
             I found 2 email addresses for example.com:\n\
             \n\
             | Name | Title | Email |\n\
             |------|-------|-------|\n\
             | Jane Doe | CEO | jane@example.com |\n\
             | Unknown | Unknown | N/A |\n\
             \n\
             Organization: Example"
        );
    }
}
