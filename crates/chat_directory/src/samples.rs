//! Sample rosters - the prototype's hard-coded conversation lists
//!
//! Read-only demo data, not the product's real data model. Students see
//! teacher contacts and vice versa.

use crate::summary::ChatSummary;
use brainbuddy_core::UserRole;

/// Roster for the given raw role literal as stored under `userType`.
/// An unrecognized literal yields an empty roster.
pub fn roster_for(user_type: &str) -> Vec<ChatSummary> {
    match UserRole::parse(user_type) {
        Some(UserRole::Student) => student_roster(),
        Some(UserRole::Teacher) => teacher_roster(),
        None => Vec::new(),
    }
}

/// What a student sees: their teachers.
fn student_roster() -> Vec<ChatSummary> {
    vec![
        ChatSummary {
            id: "teacher-dr-sarah-johnson".to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            role: UserRole::Teacher,
            subject: Some("Mathematics".to_string()),
            school: None,
            avatar: "/teacher-woman-professional.jpg".to_string(),
            last_message:
                "Great question! When using integration by parts with definite integrals..."
                    .to_string(),
            timestamp: "10:47 AM".to_string(),
            unread: 0,
            is_online: true,
        },
        ChatSummary {
            id: "teacher-prof-michael-chen".to_string(),
            name: "Prof. Michael Chen".to_string(),
            role: UserRole::Teacher,
            subject: Some("Chemistry".to_string()),
            school: None,
            avatar: "/teacher-man-professional.jpg".to_string(),
            last_message: "I've uploaded the organic chemistry notes you requested.".to_string(),
            timestamp: "Yesterday".to_string(),
            unread: 2,
            is_online: false,
        },
        ChatSummary {
            id: "teacher-dr-emily-davis".to_string(),
            name: "Dr. Emily Davis".to_string(),
            role: UserRole::Teacher,
            subject: Some("Physics".to_string()),
            school: None,
            avatar: "/teacher-woman-physics.jpg".to_string(),
            last_message:
                "The physics problem you shared is quite interesting. Let me explain..."
                    .to_string(),
            timestamp: "2 days ago".to_string(),
            unread: 0,
            is_online: true,
        },
    ]
}

/// What a teacher sees: their students.
fn teacher_roster() -> Vec<ChatSummary> {
    vec![
        ChatSummary {
            id: "student-rahul-sharma".to_string(),
            name: "Rahul Sharma".to_string(),
            role: UserRole::Student,
            subject: None,
            school: Some("Delhi Public School".to_string()),
            avatar: "/student-avatar.png".to_string(),
            last_message: "Thank you for the calculus explanation! It's much clearer now."
                .to_string(),
            timestamp: "2 hours ago".to_string(),
            unread: 1,
            is_online: false,
        },
        ChatSummary {
            id: "student-priya-patel".to_string(),
            name: "Priya Patel".to_string(),
            role: UserRole::Student,
            subject: None,
            school: Some("Mumbai International School".to_string()),
            avatar: "/diverse-student-profiles.png".to_string(),
            last_message: "Can you help me with the integration by parts method?".to_string(),
            timestamp: "1 day ago".to_string(),
            unread: 0,
            is_online: true,
        },
        ChatSummary {
            id: "student-arjun-kumar".to_string(),
            name: "Arjun Kumar".to_string(),
            role: UserRole::Student,
            subject: None,
            school: Some("Bangalore Public School".to_string()),
            avatar: "/placeholder.svg?key=student3".to_string(),
            last_message: "When will you upload the next video on differential equations?"
                .to_string(),
            timestamp: "2 days ago".to_string(),
            unread: 3,
            is_online: false,
        },
    ]
}
