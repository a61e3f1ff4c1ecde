//! The in-memory payment store.

use time::Date;

use crate::{
    Error,
    ids::next_id_after,
    payment::{Payment, PaymentDraft, PaymentStatus},
};

/// The status dropdown of the payment screen: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Do not filter by status.
    #[default]
    All,
    /// Keep only payments with the given status.
    Only(PaymentStatus),
}

impl StatusFilter {
    fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == *wanted,
        }
    }
}

/// Owns the payment list.
///
/// Record IDs and transaction references both come from the same monotonic
/// counter, so repeated runs assign the same identifiers in the same order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentStore {
    payments: Vec<Payment>,
    next_id: u64,
}

impl InMemoryPaymentStore {
    /// Create a store seeded with `payments`.
    pub fn new(payments: Vec<Payment>) -> Self {
        let next_id = next_id_after(payments.iter().map(|payment| payment.id.as_str()));

        Self { payments, next_id }
    }

    /// All payments, in insertion order.
    pub fn get_all(&self) -> &[Payment] {
        &self.payments
    }

    /// The payment with the given `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    /// The payments matching the search `term` and status `filter`.
    ///
    /// See [Payment::matches_search] for the text matching rules.
    pub fn search(&self, term: &str, filter: StatusFilter) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|payment| payment.matches_search(term) && filter.matches(payment.status))
            .collect()
    }

    /// Validate `draft`, assign it an ID and transaction reference, and add
    /// it to the list.
    ///
    /// `today` fills in a blank payment date.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyField] or
    /// [Error::NegativeAmount] if the draft is invalid.
    pub fn create(&mut self, draft: PaymentDraft, today: Date) -> Result<&Payment, Error> {
        let id = self.next_id.to_string();
        let transaction_id = format!("TXN{:09}", self.next_id);
        let payment = draft.into_payment(id, transaction_id, today)?;

        self.next_id += 1;
        self.payments.push(payment);

        Ok(self.payments.last().expect("just pushed"))
    }

    /// Replace the stored record with the same ID as `payment`.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::UpdateMissingPayment] if no
    /// payment with that ID exists.
    pub fn update(&mut self, payment: Payment) -> Result<(), Error> {
        match self.payments.iter_mut().find(|p| p.id == payment.id) {
            Some(existing) => {
                *existing = payment;
                Ok(())
            }
            None => Err(Error::UpdateMissingPayment),
        }
    }

    /// Remove the payment with the given `id`.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::DeleteMissingPayment] if no
    /// payment with that ID exists.
    pub fn delete(&mut self, id: &str) -> Result<(), Error> {
        let before = self.payments.len();
        self.payments.retain(|payment| payment.id != id);

        if self.payments.len() == before {
            Err(Error::DeleteMissingPayment)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod store_tests {
    use time::macros::date;

    use crate::{
        Error, fixtures,
        payment::{PaymentDraft, PaymentMethod, PaymentStatus},
    };

    use super::{InMemoryPaymentStore, StatusFilter};

    fn seeded_store() -> InMemoryPaymentStore {
        InMemoryPaymentStore::new(fixtures::payments())
    }

    fn test_draft() -> PaymentDraft {
        PaymentDraft {
            student_id: "2".to_string(),
            student_name: "Bob Smith".to_string(),
            amount: 300.0,
            fee_categories: vec!["Transport Fee".to_string()],
            payment_method: PaymentMethod::Cash,
            status: PaymentStatus::Completed,
            payment_date: None,
            due_date: date!(2025 - 01 - 05),
            notes: None,
        }
    }

    #[test]
    fn create_assigns_id_and_transaction_reference() {
        let mut store = seeded_store();

        let payment = store.create(test_draft(), date!(2024 - 12 - 20)).unwrap();

        assert_eq!(payment.id, "4");
        assert_eq!(payment.transaction_id, "TXN000000004");
        assert_eq!(payment.payment_date, date!(2024 - 12 - 20));
        assert_eq!(store.get_all().len(), 4);
    }

    #[test]
    fn create_rejects_an_invalid_draft() {
        let mut store = seeded_store();
        let draft = PaymentDraft {
            student_id: String::new(),
            ..test_draft()
        };

        assert_eq!(
            store.create(draft, date!(2024 - 12 - 20)),
            Err(Error::EmptyField("student"))
        );
        assert_eq!(store.get_all().len(), 3);
    }

    #[test]
    fn search_matches_student_name_or_transaction_id() {
        let store = seeded_store();

        assert_eq!(store.search("alice", StatusFilter::All).len(), 1);
        assert_eq!(store.search("TXN123456790", StatusFilter::All).len(), 1);
        assert_eq!(store.search("", StatusFilter::All).len(), 3);
        assert_eq!(store.search("nobody", StatusFilter::All).len(), 0);
    }

    #[test]
    fn search_filters_by_status() {
        let store = seeded_store();

        let completed = store.search("", StatusFilter::Only(PaymentStatus::Completed));
        let pending = store.search("", StatusFilter::Only(PaymentStatus::Pending));
        let refunded = store.search("", StatusFilter::Only(PaymentStatus::Refunded));

        assert_eq!(completed.len(), 2);
        assert_eq!(pending.len(), 1);
        assert_eq!(refunded.len(), 0);
    }

    #[test]
    fn search_combines_term_and_status() {
        let store = seeded_store();

        // Carol's payment is pending; searching for her among completed
        // payments finds nothing.
        let results = store.search("carol", StatusFilter::Only(PaymentStatus::Completed));

        assert!(results.is_empty());
    }

    #[test]
    fn update_replaces_the_whole_record() {
        let mut store = seeded_store();
        let mut payment = store.get("3").unwrap().clone();
        payment.status = PaymentStatus::Completed;

        store.update(payment).unwrap();

        assert_eq!(store.get("3").unwrap().status, PaymentStatus::Completed);
    }

    #[test]
    fn update_fails_for_a_missing_id() {
        let mut store = seeded_store();
        let mut payment = store.get("1").unwrap().clone();
        payment.id = "999".to_string();

        assert_eq!(store.update(payment), Err(Error::UpdateMissingPayment));
    }

    #[test]
    fn delete_removes_the_payment() {
        let mut store = seeded_store();

        store.delete("1").unwrap();

        assert!(store.get("1").is_none());
        assert_eq!(store.get_all().len(), 2);
    }

    #[test]
    fn delete_fails_for_a_missing_id() {
        let mut store = seeded_store();

        assert_eq!(store.delete("999"), Err(Error::DeleteMissingPayment));
    }

    #[test]
    fn deleting_a_student_leaves_their_payments_behind() {
        // There is no referential integrity between the lists; the payment
        // list never reacts to student edits.
        let mut students = crate::student::InMemoryStudentStore::new(fixtures::students());
        let store = seeded_store();

        students.delete("1").unwrap();

        assert_eq!(store.search("alice", StatusFilter::All).len(), 1);
    }
}
