//! Demo-request lead capture.
//!
//! The landing page's demo form submits a [`DemoRequest`] through a Leptos
//! server function. Requests are validated on both sides of the wire, then
//! logged server-side with a generated lead id. There is no persistence:
//! downstream routing of leads is an operational concern, not a site one.

use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A demo request as entered in the landing-page form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Team size bucket picked from a select ("1-10", "11-50", ...).
    pub team_size: String,
    pub message: String,
}

/// Validation failure for a [`DemoRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LeadError {
    #[display("Please tell us your name.")]
    EmptyName,
    #[display("That email address doesn't look right.")]
    InvalidEmail,
    #[display("Please tell us your company.")]
    EmptyCompany,
}

impl DemoRequest {
    /// Check the request before submission. The same check runs inside the
    /// server function, so a bypassed client still can't submit garbage.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::EmptyName);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(LeadError::InvalidEmail);
        }
        if self.company.trim().is_empty() {
            return Err(LeadError::EmptyCompany);
        }
        Ok(())
    }
}

/// Structural email check: one `@`, non-empty local part, domain with a dot
/// that isn't at either edge. Deliverability is the mail server's problem.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Acknowledgement returned to the client after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

#[server]
pub async fn submit_demo_request(request: DemoRequest) -> Result<LeadReceipt, ServerFnError> {
    request
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let receipt = LeadReceipt {
        id: Uuid::new_v4(),
        received_at: Utc::now(),
    };

    tracing::info!(
        lead_id = %receipt.id,
        company = %request.company.trim(),
        team_size = %request.team_size,
        "demo request received"
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DemoRequest {
        DemoRequest {
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            company: "Northwind Logistics".to_string(),
            team_size: "11-50".to_string(),
            message: "We cover four states with eight reps.".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_message_and_team_size_are_optional() {
        let mut req = request();
        req.team_size = String::new();
        req.message = String::new();

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut req = request();
        req.name = "   ".to_string();

        assert_eq!(req.validate(), Err(LeadError::EmptyName));
    }

    #[test]
    fn test_empty_company_rejected() {
        let mut req = request();
        req.company = String::new();

        assert_eq!(req.validate(), Err(LeadError::EmptyCompany));
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["", "dana", "dana@", "@example.com", "dana@example", "dana@.com", "dana@example.", "dana@ex@ample.com"] {
            let mut req = request();
            req.email = email.to_string();

            assert_eq!(req.validate(), Err(LeadError::InvalidEmail), "{email:?}");
        }
    }

    #[test]
    fn test_email_with_surrounding_whitespace_accepted() {
        let mut req = request();
        req.email = "  dana@example.com  ".to_string();

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_subdomain_email_accepted() {
        let mut req = request();
        req.email = "dana@mail.example.co".to_string();

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            LeadError::InvalidEmail.to_string(),
            "That email address doesn't look right."
        );
    }
}
