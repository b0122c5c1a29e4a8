//! The inquiry model and the validation rules shared with the form client.

/// One contact-form submission from a prospective traveller.
///
/// Constructed only after the wire form has passed validation; the required
/// fields are therefore plain `String`s. The submission is rendered into two
/// email bodies and then discarded, nothing is persisted.
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Self-reported readiness to book (`committed`, `interested`,
    /// `exploring`, or any raw code a newer form variant sends).
    pub commitment_level: String,
    /// Offered itinerary code or `custom`.
    pub trip_selection: String,
    pub availability: Option<String>,
    pub comments: Option<String>,
    /// RFC 3339 submission time as sent by the form client.
    pub timestamp: Option<String>,
    /// Which form produced the submission (e.g. `web`).
    pub source: Option<String>,
    /// Page the form was submitted from.
    pub page_url: Option<String>,
}

/// Check that an address has a plausible `local@domain.tld` shape.
///
/// This intentionally mirrors the rule the form client applies before
/// submitting, so users get the same verdict on both sides: at least one
/// character before the `@`, a domain with a dot and a non-empty tail, and no
/// whitespace anywhere. It is not a full RFC 5322 parser; the delivery
/// provider has the final say.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
