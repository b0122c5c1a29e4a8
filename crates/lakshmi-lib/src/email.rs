//! Email rendering for contact inquiries.
//!
//! Two messages are rendered per accepted inquiry: an operator notification
//! (HTML plus plaintext, reply-to set to the submitter) and a customer
//! confirmation (HTML only) acknowledging receipt and promising a response
//! within 24 hours. All submitter-controlled values are HTML-escaped before
//! interpolation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::display::{commitment_display, trip_display};
use crate::inquiry::Inquiry;

/// A rendered email ready for the delivery provider.
///
/// The field names and shapes match the Resend send API, so the struct
/// serializes directly into the request body.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    /// Sender, either a bare address or `Display Name <address>`.
    pub from: String,

    /// Recipient addresses.
    pub to: Vec<String>,

    /// Address replies should go to, when different from `from`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    pub subject: String,

    /// HTML body.
    pub html: String,

    /// Plaintext alternative, rendered for the operator notification only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Render the operator notification for an inquiry.
///
/// `from` is the configured sender identity and `to` the operator mailbox.
/// Reply-to is set to the submitter so the operator can answer directly from
/// their mail client.
pub fn operator_notification(inquiry: &Inquiry, from: &str, to: &str) -> EmailMessage {
    let commitment = commitment_display(&inquiry.commitment_level);
    let trip = trip_display(&inquiry.trip_selection);

    EmailMessage {
        from: from.to_string(),
        to: vec![to.to_string()],
        reply_to: Some(inquiry.email.clone()),
        subject: format!("New Sacred Inquiry from {} - {}", inquiry.full_name, commitment),
        html: operator_html(inquiry, commitment, trip),
        text: Some(operator_text(inquiry, commitment, trip)),
    }
}

/// Render the customer confirmation for an inquiry.
///
/// Sent to the submitter to acknowledge receipt and set the expectation of a
/// personal reply within 24 hours.
pub fn customer_confirmation(inquiry: &Inquiry, from: &str) -> EmailMessage {
    let trip = trip_display(&inquiry.trip_selection);

    EmailMessage {
        from: from.to_string(),
        to: vec![inquiry.email.clone()],
        reply_to: None,
        subject: "Your Sacred Journey Inquiry - Lakshmi Trails".to_string(),
        html: confirmation_html(inquiry, trip),
        text: None,
    }
}

fn operator_html(inquiry: &Inquiry, commitment: &str, trip: &str) -> String {
    let name = escape_html(&inquiry.full_name);
    let email = escape_html(&inquiry.email);

    let commitment_class = match inquiry.commitment_level.as_str() {
        "committed" => "commitment-high",
        "interested" => "commitment-medium",
        _ => "commitment-low",
    };

    let phone_block = match inquiry.phone.as_deref() {
        Some(phone) => format!(
            "<div class=\"field\"><span class=\"label\">Phone/WhatsApp:</span> \
             <span class=\"value\">{}</span></div>\n",
            escape_html(phone)
        ),
        None => String::new(),
    };

    let availability_block = match inquiry.availability.as_deref() {
        Some(availability) => format!(
            "<div class=\"field\"><span class=\"label\">Best Time to Contact:</span> \
             <span class=\"value\">{}</span></div>\n",
            escape_html(availability)
        ),
        None => String::new(),
    };

    let comments_block = match inquiry.comments.as_deref() {
        Some(comments) => format!(
            "<div class=\"comments\"><div class=\"label\">What draws them to this journey:</div>\
             <p>{}</p></div>\n",
            escape_html(comments).replace('\n', "<br>")
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
  .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
  h2 {{ color: #B8941F; border-bottom: 2px solid #B8941F; padding-bottom: 10px; }}
  .field {{ margin: 15px 0; }}
  .label {{ font-weight: bold; color: #666; }}
  .value {{ margin-left: 10px; color: #333; }}
  .commitment-high {{ color: #28a745; font-weight: bold; }}
  .commitment-medium {{ color: #ffc107; font-weight: bold; }}
  .commitment-low {{ color: #6c757d; }}
  .comments {{ background: #f8f9fa; padding: 15px; border-left: 3px solid #B8941F; margin: 20px 0; }}
  .metadata {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 12px; color: #666; }}
</style>
</head>
<body>
<div class="container">
<h2>New Sacred Journey Inquiry</h2>
<div class="field"><span class="label">Name:</span> <span class="value">{name}</span></div>
<div class="field"><span class="label">Email:</span> <span class="value"><a href="mailto:{email}">{email}</a></span></div>
{phone_block}<div class="field"><span class="label">Commitment Level:</span> <span class="value {commitment_class}">{commitment}</span></div>
<div class="field"><span class="label">Trip Selection:</span> <span class="value"><strong>{trip}</strong></span></div>
{availability_block}{comments_block}<div class="metadata">
<div><strong>Submitted:</strong> {submitted}</div>
<div><strong>Source:</strong> {source}</div>
<div><strong>Page:</strong> {page}</div>
</div>
</div>
</body>
</html>
"#,
        name = name,
        email = email,
        phone_block = phone_block,
        commitment_class = commitment_class,
        commitment = escape_html(commitment),
        trip = escape_html(trip),
        availability_block = availability_block,
        comments_block = comments_block,
        submitted = escape_html(&format_timestamp(inquiry.timestamp.as_deref())),
        source = escape_html(inquiry.source.as_deref().unwrap_or("unknown")),
        page = page_link(inquiry.page_url.as_deref()),
    )
}

fn operator_text(inquiry: &Inquiry, commitment: &str, trip: &str) -> String {
    format!(
        "New Sacred Journey Inquiry\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Commitment Level: {}\n\
         Trip Selection: {}\n\
         Best Time to Contact: {}\n\
         \n\
         What draws them to this journey:\n\
         {}\n\
         \n\
         ---\n\
         Submitted: {}\n\
         Source: {}\n\
         Page: {}\n",
        inquiry.full_name,
        inquiry.email,
        inquiry.phone.as_deref().unwrap_or("Not provided"),
        commitment,
        trip,
        inquiry.availability.as_deref().unwrap_or("Not specified"),
        inquiry.comments.as_deref().unwrap_or("No additional comments"),
        format_timestamp(inquiry.timestamp.as_deref()),
        inquiry.source.as_deref().unwrap_or("unknown"),
        inquiry.page_url.as_deref().unwrap_or("unknown"),
    )
}

fn confirmation_html(inquiry: &Inquiry, trip: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
  .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
  h2 {{ color: #B8941F; border-bottom: 2px solid #B8941F; padding-bottom: 10px; }}
  .trip {{ background: #f8f9fa; padding: 15px; border-left: 3px solid #B8941F; margin: 20px 0; }}
  .signature {{ margin-top: 30px; color: #666; }}
</style>
</head>
<body>
<div class="container">
<h2>Thank You for Your Inquiry</h2>
<p>Dear {name},</p>
<p>We have received your inquiry and are delighted that you are considering
a journey with us. A member of our team will reply personally within
24 hours.</p>
<div class="trip"><strong>Your selected journey:</strong> {trip}</div>
<p>If anything changes in the meantime, simply reply to this email.</p>
<p class="signature">Warm regards,<br>The Lakshmi Trails Team</p>
</div>
</body>
</html>
"#,
        name = escape_html(&inquiry.full_name),
        trip = escape_html(trip),
    )
}

/// Format an RFC 3339 submission timestamp for humans.
///
/// Unparseable or absent timestamps degrade gracefully rather than failing
/// the whole email render.
fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "unknown".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Utc)
            .format("%b %-d, %Y %H:%M UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn page_link(page_url: Option<&str>) -> String {
    match page_url {
        Some(url) => {
            let url = escape_html(url);
            format!("<a href=\"{url}\">{url}</a>")
        }
        None => "unknown".to_string(),
    }
}

/// Minimal HTML escaping for interpolated form values.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inquiry() -> Inquiry {
        Inquiry {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("+91 98765 43210".to_string()),
            commitment_level: "interested".to_string(),
            trip_selection: "mysore-mystique".to_string(),
            availability: Some("Weekday evenings".to_string()),
            comments: Some("Drawn to the temple towns.\nTravelling solo.".to_string()),
            timestamp: Some("2025-01-01T00:00:00Z".to_string()),
            source: Some("web".to_string()),
            page_url: Some("https://site/tours/mysore".to_string()),
        }
    }

    #[test]
    fn operator_subject_names_submitter_and_commitment() {
        let message = operator_notification(&sample_inquiry(), "from@example.com", "ops@example.com");
        assert!(message.subject.contains("Asha Rao"));
        assert!(message.subject.contains("Very Interested"));
    }

    #[test]
    fn operator_message_addressing() {
        let message = operator_notification(&sample_inquiry(), "from@example.com", "ops@example.com");
        assert_eq!(message.to, vec!["ops@example.com".to_string()]);
        assert_eq!(message.reply_to.as_deref(), Some("asha@example.com"));
        assert!(message.text.is_some());
    }

    #[test]
    fn operator_body_contains_trip_display() {
        let mut inquiry = sample_inquiry();
        inquiry.trip_selection = "sacred-waters".to_string();
        let message = operator_notification(&inquiry, "from@example.com", "ops@example.com");
        assert!(message
            .html
            .contains("The Sacred Water Odyssey (Dec 30, 2025 – Jan 13, 2026)"));
        assert!(message
            .text
            .as_deref()
            .unwrap()
            .contains("The Sacred Water Odyssey (Dec 30, 2025 – Jan 13, 2026)"));
    }

    #[test]
    fn unrecognized_trip_code_renders_raw() {
        let mut inquiry = sample_inquiry();
        inquiry.trip_selection = "foo".to_string();
        let message = operator_notification(&inquiry, "from@example.com", "ops@example.com");
        assert!(message.html.contains("<strong>foo</strong>"));
    }

    #[test]
    fn operator_body_escapes_submitter_values() {
        let mut inquiry = sample_inquiry();
        inquiry.full_name = "<script>alert(1)</script>".to_string();
        let message = operator_notification(&inquiry, "from@example.com", "ops@example.com");
        assert!(!message.html.contains("<script>"));
        assert!(message.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn operator_comments_preserve_line_breaks() {
        let message = operator_notification(&sample_inquiry(), "from@example.com", "ops@example.com");
        assert!(message.html.contains("Drawn to the temple towns.<br>Travelling solo."));
    }

    #[test]
    fn operator_body_omits_optional_blocks_when_absent() {
        let mut inquiry = sample_inquiry();
        inquiry.phone = None;
        inquiry.availability = None;
        inquiry.comments = None;
        let message = operator_notification(&inquiry, "from@example.com", "ops@example.com");
        assert!(!message.html.contains("Phone/WhatsApp"));
        assert!(!message.html.contains("Best Time to Contact"));
        assert!(!message.html.contains("What draws them"));
        assert!(message.text.as_deref().unwrap().contains("Phone: Not provided"));
    }

    #[test]
    fn confirmation_goes_to_submitter_with_24_hour_promise() {
        let message = customer_confirmation(&sample_inquiry(), "from@example.com");
        assert_eq!(message.to, vec!["asha@example.com".to_string()]);
        assert!(message.reply_to.is_none());
        assert!(message.text.is_none());
        assert!(message.html.contains("24 hours"));
        assert!(message.html.contains("Asha Rao"));
        assert!(message
            .html
            .contains("The Spirit of Karnataka (Feb 16 – Mar 2, 2025)"));
    }

    #[test]
    fn timestamp_formats_rfc3339_and_falls_back_on_garbage() {
        assert_eq!(
            format_timestamp(Some("2025-01-01T00:00:00Z")),
            "Jan 1, 2025 00:00 UTC"
        );
        assert_eq!(format_timestamp(Some("yesterday-ish")), "yesterday-ish");
        assert_eq!(format_timestamp(None), "unknown");
    }

    #[test]
    fn message_serializes_to_provider_shape() {
        let message = operator_notification(&sample_inquiry(), "from@example.com", "ops@example.com");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["from"], "from@example.com");
        assert_eq!(json["to"][0], "ops@example.com");
        assert_eq!(json["reply_to"], "asha@example.com");
        assert!(json.get("text").is_some());

        let confirmation = customer_confirmation(&sample_inquiry(), "from@example.com");
        let json = serde_json::to_value(&confirmation).unwrap();
        assert!(json.get("reply_to").is_none());
        assert!(json.get("text").is_none());
    }
}
