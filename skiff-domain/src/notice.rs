use serde::{Deserialize, Serialize};

/// Notification severities the widget actually emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Alert,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Error => "error",
        }
    }
}

/// Every user-facing message the widget can show. Closed set so that no
/// free-form strings leak into the notification layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    DateRequired,
    NoAvailability,
    LegalAdviceRequired,
    TermsNotAccepted,
    PricingOptionRequired,
    ClientNameRequired,
    PaymentError,
    ServiceUnavailable,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DateRequired => "You have to select a date",
            Self::NoAvailability => "There is no availability for this day",
            Self::LegalAdviceRequired => "Legal advice has to be accepted",
            Self::TermsNotAccepted => "Terms and conditions have to be accepted",
            Self::PricingOptionRequired => "You have to select a pricing option",
            Self::ClientNameRequired => "You have to introduce your name",
            Self::PaymentError => {
                "It seems that there was an error redirecting to the payment gateway"
            }
            Self::ServiceUnavailable => "Something went wrong, please try again in a moment",
        }
    }
}
