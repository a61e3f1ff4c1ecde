//! The mock dataset the application starts from.
//!
//! Every list here is consumed read-only at startup to seed the in-memory
//! stores; nothing ever writes back to it. The records match the dataset the
//! system has shipped with since the first prototype, including its known
//! quirks (denormalized student names, categories referenced by name).

use time::macros::date;

use crate::{
    auth::{Credential, Role, User},
    dashboard::{DashboardStats, MethodBreakdown},
    fee::{FeeCategory, Frequency},
    outstanding::{FeeLineItem, OutstandingDue},
    payment::{Payment, PaymentMethod, PaymentStatus},
    student::{Student, StudentStatus},
};

/// The fixed list of users that can log in.
pub fn mock_users() -> Vec<Credential> {
    vec![
        Credential::new(
            User {
                id: "1".to_string(),
                username: "admin".to_string(),
                email: "admin@school.edu".to_string(),
                role: Role::Admin,
                name: "Administrator".to_string(),
            },
            "admin123",
        ),
        Credential::new(
            User {
                id: "2".to_string(),
                username: "staff".to_string(),
                email: "staff@school.edu".to_string(),
                role: Role::Staff,
                name: "Staff Member".to_string(),
            },
            "staff123",
        ),
        Credential::new(
            User {
                id: "3".to_string(),
                username: "accountant".to_string(),
                email: "accountant@school.edu".to_string(),
                role: Role::Accountant,
                name: "School Accountant".to_string(),
            },
            "acc123",
        ),
    ]
}

/// The initial student list.
pub fn students() -> Vec<Student> {
    vec![
        Student {
            id: "1".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice.johnson@email.com".to_string(),
            phone: "+1234567890".to_string(),
            class: "10th".to_string(),
            section: "A".to_string(),
            roll_number: "101".to_string(),
            guardian_name: "Robert Johnson".to_string(),
            guardian_phone: "+1234567891".to_string(),
            address: "123 Main St, City, State 12345".to_string(),
            join_date: date!(2024 - 01 - 15),
            status: StudentStatus::Active,
        },
        Student {
            id: "2".to_string(),
            name: "Bob Smith".to_string(),
            email: "bob.smith@email.com".to_string(),
            phone: "+1234567892".to_string(),
            class: "9th".to_string(),
            section: "B".to_string(),
            roll_number: "201".to_string(),
            guardian_name: "Mary Smith".to_string(),
            guardian_phone: "+1234567893".to_string(),
            address: "456 Oak Ave, City, State 12345".to_string(),
            join_date: date!(2024 - 01 - 20),
            status: StudentStatus::Active,
        },
        Student {
            id: "3".to_string(),
            name: "Carol Davis".to_string(),
            email: "carol.davis@email.com".to_string(),
            phone: "+1234567894".to_string(),
            class: "11th".to_string(),
            section: "A".to_string(),
            roll_number: "301".to_string(),
            guardian_name: "James Davis".to_string(),
            guardian_phone: "+1234567895".to_string(),
            address: "789 Pine Rd, City, State 12345".to_string(),
            join_date: date!(2024 - 02 - 01),
            status: StudentStatus::Active,
        },
    ]
}

/// The initial fee category list.
pub fn fee_categories() -> Vec<FeeCategory> {
    vec![
        FeeCategory {
            id: "1".to_string(),
            name: "Tuition Fee".to_string(),
            amount: 1500.0,
            description: "Monthly tuition fee for academic instruction".to_string(),
            frequency: Frequency::Monthly,
            mandatory: true,
        },
        FeeCategory {
            id: "2".to_string(),
            name: "Library Fee".to_string(),
            amount: 100.0,
            description: "Access to library resources and books".to_string(),
            frequency: Frequency::Monthly,
            mandatory: true,
        },
        FeeCategory {
            id: "3".to_string(),
            name: "Lab Fee".to_string(),
            amount: 200.0,
            description: "Science and computer lab usage".to_string(),
            frequency: Frequency::Monthly,
            mandatory: false,
        },
        FeeCategory {
            id: "4".to_string(),
            name: "Transport Fee".to_string(),
            amount: 300.0,
            description: "School bus transportation service".to_string(),
            frequency: Frequency::Monthly,
            mandatory: false,
        },
        FeeCategory {
            id: "5".to_string(),
            name: "Annual Registration".to_string(),
            amount: 500.0,
            description: "Yearly registration and administrative fee".to_string(),
            frequency: Frequency::Yearly,
            mandatory: true,
        },
    ]
}

/// The initial payment list.
pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "1".to_string(),
            student_id: "1".to_string(),
            student_name: "Alice Johnson".to_string(),
            amount: 1600.0,
            fee_categories: vec!["Tuition Fee".to_string(), "Library Fee".to_string()],
            payment_method: PaymentMethod::Card,
            status: PaymentStatus::Completed,
            transaction_id: "TXN123456789".to_string(),
            payment_date: date!(2024 - 12 - 01),
            due_date: date!(2024 - 12 - 05),
            notes: Some("Payment for December 2024".to_string()),
        },
        Payment {
            id: "2".to_string(),
            student_id: "2".to_string(),
            student_name: "Bob Smith".to_string(),
            amount: 1800.0,
            fee_categories: vec![
                "Tuition Fee".to_string(),
                "Library Fee".to_string(),
                "Lab Fee".to_string(),
            ],
            payment_method: PaymentMethod::BankTransfer,
            status: PaymentStatus::Completed,
            transaction_id: "TXN123456790".to_string(),
            payment_date: date!(2024 - 12 - 02),
            due_date: date!(2024 - 12 - 05),
            notes: Some("Payment for December 2024".to_string()),
        },
        Payment {
            id: "3".to_string(),
            student_id: "3".to_string(),
            student_name: "Carol Davis".to_string(),
            amount: 1500.0,
            fee_categories: vec!["Tuition Fee".to_string()],
            payment_method: PaymentMethod::Card,
            status: PaymentStatus::Pending,
            transaction_id: "TXN123456791".to_string(),
            payment_date: date!(2024 - 12 - 15),
            due_date: date!(2024 - 12 - 05),
            notes: Some("Payment for December 2024".to_string()),
        },
    ]
}

/// The pre-aggregated outstanding dues list.
pub fn outstanding_dues() -> Vec<OutstandingDue> {
    vec![OutstandingDue {
        student_id: "3".to_string(),
        student_name: "Carol Davis".to_string(),
        class: "11th A".to_string(),
        total_due: 100.0,
        overdue_days: 10,
        fee_breakdown: vec![FeeLineItem {
            category_name: "Library Fee".to_string(),
            amount: 100.0,
            due_date: date!(2024 - 12 - 05),
        }],
    }]
}

/// The pre-aggregated dashboard overview numbers.
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_students: 150,
        total_revenue: 185000.0,
        pending_payments: 12,
        overdue_amount: 8500.0,
        monthly_revenue: vec![
            15000.0, 18000.0, 22000.0, 19000.0, 21000.0, 24000.0, 23000.0, 25000.0, 27000.0,
            26000.0, 28000.0, 30000.0,
        ],
        payment_method_breakdown: vec![
            MethodBreakdown {
                method: "Card".to_string(),
                count: 45,
                amount: 67500.0,
            },
            MethodBreakdown {
                method: "Bank Transfer".to_string(),
                count: 32,
                amount: 48000.0,
            },
            MethodBreakdown {
                method: "Cash".to_string(),
                count: 28,
                amount: 42000.0,
            },
            MethodBreakdown {
                method: "Check".to_string(),
                count: 15,
                amount: 22500.0,
            },
        ],
    }
}

#[cfg(test)]
mod fixture_tests {
    use super::{fee_categories, mock_users, outstanding_dues, payments, students};

    #[test]
    fn three_users_can_log_in() {
        let usernames: Vec<String> = mock_users()
            .into_iter()
            .map(|credential| credential.user.username)
            .collect();

        assert_eq!(usernames, vec!["admin", "staff", "accountant"]);
    }

    #[test]
    fn payment_student_names_match_the_student_list_at_seed_time() {
        let students = students();
        let payments = payments();

        for payment in &payments {
            let student = students
                .iter()
                .find(|student| student.id == payment.student_id)
                .expect("payment references a seeded student");
            assert_eq!(payment.student_name, student.name);
        }
    }

    #[test]
    fn payment_categories_exist_in_the_fee_list_at_seed_time() {
        let names: Vec<String> = fee_categories()
            .into_iter()
            .map(|category| category.name)
            .collect();

        for payment in payments() {
            for category in &payment.fee_categories {
                assert!(names.contains(category), "unknown category {category}");
            }
        }
    }

    #[test]
    fn amounts_are_non_negative() {
        assert!(fee_categories().iter().all(|c| c.amount >= 0.0));
        assert!(payments().iter().all(|p| p.amount >= 0.0));
        assert!(outstanding_dues().iter().all(|d| d.total_due >= 0.0));
    }
}
