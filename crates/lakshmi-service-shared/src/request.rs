//! The wire form for contact submissions and its validation.

use serde::{Deserialize, Serialize};
use serde_json::json;

use lakshmi_lib::{validate_email, Inquiry};

use crate::ApiError;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return an [`ApiError`]
/// describing the first failure. The error is boxed to keep `Result::Err`
/// small.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    fn validate(&self) -> Result<(), Box<ApiError>>;
}

/// Contact-form submission as it arrives on the wire.
///
/// Field names are the kebab-case ones the site's form posts. The four
/// required fields deserialize as `Option` on purpose: a missing field must
/// produce a per-field validation report, not a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiryForm {
    #[serde(rename = "full-name", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(
        rename = "commitment-level",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub commitment_level: Option<String>,

    #[serde(
        rename = "trip-selection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trip_selection: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl Validate for InquiryForm {
    fn validate(&self) -> Result<(), Box<ApiError>> {
        let full_name_missing = is_blank(&self.full_name);
        let email_missing = is_blank(&self.email);
        let commitment_missing = is_blank(&self.commitment_level);
        let trip_missing = is_blank(&self.trip_selection);

        if full_name_missing || email_missing || commitment_missing || trip_missing {
            let mark = |missing: bool| if missing { "missing" } else { "ok" };
            return Err(Box::new(ApiError::missing_fields(json!({
                "fullName": mark(full_name_missing),
                "email": mark(email_missing),
                "commitmentLevel": mark(commitment_missing),
                "tripSelection": mark(trip_missing),
            }))));
        }

        if !validate_email(self.email.as_deref().unwrap_or_default()) {
            return Err(Box::new(ApiError::invalid_email()));
        }

        Ok(())
    }
}

impl InquiryForm {
    /// Convert a validated form into the domain model.
    ///
    /// Call [`Validate::validate`] first; if that contract is broken the
    /// required fields default to empty strings rather than panicking.
    pub fn into_inquiry(self) -> Inquiry {
        Inquiry {
            full_name: self.full_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            commitment_level: self.commitment_level.unwrap_or_default(),
            trip_selection: self.trip_selection.unwrap_or_default(),
            availability: self.availability,
            comments: self.comments,
            timestamp: self.timestamp,
            source: self.source,
            page_url: self.page_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn complete_form() -> InquiryForm {
        serde_json::from_value(json!({
            "full-name": "Asha Rao",
            "email": "asha@example.com",
            "commitment-level": "interested",
            "trip-selection": "mysore-mystique",
            "timestamp": "2025-01-01T00:00:00Z",
            "source": "web",
            "page_url": "https://site/tours/mysore",
        }))
        .unwrap()
    }

    #[test]
    fn complete_form_validates() {
        assert!(complete_form().validate().is_ok());
    }

    #[test]
    fn kebab_case_field_names_deserialize() {
        let form = complete_form();
        assert_eq!(form.full_name.as_deref(), Some("Asha Rao"));
        assert_eq!(form.commitment_level.as_deref(), Some("interested"));
        assert_eq!(form.trip_selection.as_deref(), Some("mysore-mystique"));
        assert_eq!(form.page_url.as_deref(), Some("https://site/tours/mysore"));
    }

    #[test]
    fn missing_name_marks_exactly_that_field() {
        let mut form = complete_form();
        form.full_name = None;
        let err = form.validate().unwrap_err();

        assert_eq!(err.code, "missing_required_field");
        let details = err.details.as_ref().unwrap();
        assert_eq!(details["fullName"], "missing");
        assert_eq!(details["email"], "ok");
        assert_eq!(details["commitmentLevel"], "ok");
        assert_eq!(details["tripSelection"], "ok");
    }

    #[test]
    fn multiple_missing_fields_all_marked() {
        let mut form = complete_form();
        form.email = None;
        form.trip_selection = Some("   ".to_string());
        let err = form.validate().unwrap_err();

        let details = err.details.as_ref().unwrap();
        assert_eq!(details["email"], "missing");
        assert_eq!(details["tripSelection"], "missing");
        assert_eq!(details["fullName"], "ok");
    }

    #[test]
    fn blank_string_counts_as_missing() {
        let mut form = complete_form();
        form.full_name = Some(String::new());
        let err = form.validate().unwrap_err();
        assert_eq!(err.details.as_ref().unwrap()["fullName"], "missing");
    }

    #[test]
    fn bad_email_is_a_distinct_error() {
        let mut form = complete_form();
        form.email = Some("not-an-address".to_string());
        let err = form.validate().unwrap_err();

        assert_eq!(err.code, "invalid_email");
        assert_eq!(err.error, "Invalid email format");
        assert!(err.details.is_none());
    }

    #[test]
    fn missing_fields_reported_before_email_shape() {
        let mut form = complete_form();
        form.full_name = None;
        form.email = Some("not-an-address".to_string());
        let err = form.validate().unwrap_err();
        assert_eq!(err.code, "missing_required_field");
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let form = complete_form();
        assert!(form.phone.is_none());
        assert!(form.availability.is_none());
        assert!(form.comments.is_none());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn into_inquiry_carries_all_fields() {
        let mut form = complete_form();
        form.phone = Some("+91 98765 43210".to_string());
        form.comments = Some("Travelling solo.".to_string());

        let inquiry = form.into_inquiry();
        assert_eq!(inquiry.full_name, "Asha Rao");
        assert_eq!(inquiry.email, "asha@example.com");
        assert_eq!(inquiry.phone.as_deref(), Some("+91 98765 43210"));
        assert_eq!(inquiry.commitment_level, "interested");
        assert_eq!(inquiry.trip_selection, "mysore-mystique");
        assert_eq!(inquiry.comments.as_deref(), Some("Travelling solo."));
        assert_eq!(inquiry.timestamp.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(inquiry.source.as_deref(), Some("web"));
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        let form: InquiryForm = serde_json::from_value(json!({
            "full-name": "Asha Rao",
            "email": "asha@example.com",
            "commitment-level": "interested",
            "trip-selection": "custom",
            "newsletter-opt-in": true,
        }))
        .unwrap();
        assert!(form.validate().is_ok());
    }
}
