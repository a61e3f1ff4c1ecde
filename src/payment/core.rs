//! Defines the core data models for payments.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// How a payment was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    Card,
    /// Direct bank transfer.
    BankTransfer,
    /// Cash at the school office.
    Cash,
    /// Paper check.
    Check,
}

impl PaymentMethod {
    /// The human-readable label, e.g. "Bank Transfer".
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Check => "Check",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wire = match self {
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Check => "check",
        };

        write!(f, "{wire}")
    }
}

/// The processing state of a payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// The money has been received.
    Completed,
    /// The payment was logged but not yet confirmed.
    Pending,
    /// The payment did not go through.
    Failed,
    /// The payment was returned to the payer.
    Refunded,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        };

        write!(f, "{label}")
    }
}

/// A logged payment against one or more fee categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Opaque string ID assigned by the store.
    pub id: String,
    /// The ID of the paying student.
    pub student_id: String,
    /// The student's name, copied at creation time and never synced.
    pub student_name: String,
    /// The amount received, always non-negative.
    pub amount: f64,
    /// The names of the fee categories this payment covers. Free text; a
    /// renamed category leaves these entries behind.
    pub fee_categories: Vec<String>,
    /// How the payment was made.
    pub payment_method: PaymentMethod,
    /// The processing state.
    pub status: PaymentStatus,
    /// The assigned transaction reference, e.g. "TXN123456789".
    pub transaction_id: String,
    /// The date the payment was made.
    pub payment_date: Date,
    /// The date the payment was due.
    pub due_date: Date,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Payment {
    /// Whether the payment matches a search `term`.
    ///
    /// Matches a case-insensitive substring of the student name or the
    /// transaction ID. An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term_lower = term.to_lowercase();

        self.student_name.to_lowercase().contains(&term_lower)
            || self.transaction_id.to_lowercase().contains(&term_lower)
    }
}

/// The fields of a payment, as entered in the log-payment form.
///
/// The draft carries the denormalized student name alongside the ID because
/// that is what the form captures when a student is picked; the store does
/// not resolve it again.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    /// The ID of the paying student.
    pub student_id: String,
    /// The student's name as shown in the form.
    pub student_name: String,
    /// The amount received.
    pub amount: f64,
    /// The names of the fee categories this payment covers.
    pub fee_categories: Vec<String>,
    /// How the payment was made.
    pub payment_method: PaymentMethod,
    /// The processing state.
    pub status: PaymentStatus,
    /// The date the payment was made. Defaults to today when left blank.
    pub payment_date: Option<Date>,
    /// The date the payment was due.
    pub due_date: Date,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl PaymentDraft {
    /// Validate the draft and build a [Payment].
    ///
    /// `today` fills in a blank payment date.
    ///
    /// # Errors
    ///
    /// This function will return an:
    /// - [Error::EmptyField] if the student ID is empty,
    /// - [Error::NegativeAmount] if the amount is negative.
    pub fn into_payment(
        self,
        id: String,
        transaction_id: String,
        today: Date,
    ) -> Result<Payment, Error> {
        if self.student_id.is_empty() {
            return Err(Error::EmptyField("student"));
        }

        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        Ok(Payment {
            id,
            student_id: self.student_id,
            student_name: self.student_name,
            amount: self.amount,
            fee_categories: self.fee_categories,
            payment_method: self.payment_method,
            status: self.status,
            transaction_id,
            payment_date: self.payment_date.unwrap_or(today),
            due_date: self.due_date,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod payment_tests {
    use time::macros::date;

    use crate::Error;

    use super::{PaymentDraft, PaymentMethod, PaymentStatus};

    fn test_draft() -> PaymentDraft {
        PaymentDraft {
            student_id: "1".to_string(),
            student_name: "Alice Johnson".to_string(),
            amount: 1600.0,
            fee_categories: vec!["Tuition Fee".to_string(), "Library Fee".to_string()],
            payment_method: PaymentMethod::Card,
            status: PaymentStatus::Completed,
            payment_date: None,
            due_date: date!(2024 - 12 - 05),
            notes: None,
        }
    }

    #[test]
    fn draft_defaults_the_payment_date_to_today() {
        let today = date!(2024 - 12 - 20);

        let payment = test_draft()
            .into_payment("4".to_string(), "TXN000000004".to_string(), today)
            .unwrap();

        assert_eq!(payment.payment_date, today);
        assert_eq!(payment.transaction_id, "TXN000000004");
    }

    #[test]
    fn draft_keeps_an_explicit_payment_date() {
        let draft = PaymentDraft {
            payment_date: Some(date!(2024 - 12 - 10)),
            ..test_draft()
        };

        let payment = draft
            .into_payment(
                "4".to_string(),
                "TXN000000004".to_string(),
                date!(2024 - 12 - 20),
            )
            .unwrap();

        assert_eq!(payment.payment_date, date!(2024 - 12 - 10));
    }

    #[test]
    fn draft_fails_without_a_student() {
        let draft = PaymentDraft {
            student_id: String::new(),
            ..test_draft()
        };

        let result = draft.into_payment(
            "4".to_string(),
            "TXN000000004".to_string(),
            date!(2024 - 12 - 20),
        );

        assert_eq!(result, Err(Error::EmptyField("student")));
    }

    #[test]
    fn draft_fails_with_a_negative_amount() {
        let draft = PaymentDraft {
            amount: -500.0,
            ..test_draft()
        };

        let result = draft.into_payment(
            "4".to_string(),
            "TXN000000004".to_string(),
            date!(2024 - 12 - 20),
        );

        assert_eq!(result, Err(Error::NegativeAmount(-500.0)));
    }

    #[test]
    fn search_matches_student_name_or_transaction_id() {
        let payment = test_draft()
            .into_payment(
                "4".to_string(),
                "TXN123456789".to_string(),
                date!(2024 - 12 - 20),
            )
            .unwrap();

        assert!(payment.matches_search("alice"));
        assert!(payment.matches_search("txn1234"));
        assert!(!payment.matches_search("bob"));
        assert!(payment.matches_search(""));
    }

    #[test]
    fn bank_transfer_serializes_in_snake_case() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();

        assert_eq!(json, "\"bank_transfer\"");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_str::<PaymentStatus>("\"cancelled\"");

        assert!(result.is_err());
    }

    #[test]
    fn absent_notes_are_omitted_from_json() {
        let payment = test_draft()
            .into_payment(
                "4".to_string(),
                "TXN000000004".to_string(),
                date!(2024 - 12 - 20),
            )
            .unwrap();

        let json = serde_json::to_string(&payment).unwrap();

        assert!(!json.contains("notes"));
        assert!(json.contains("\"studentName\":\"Alice Johnson\""));
    }
}
