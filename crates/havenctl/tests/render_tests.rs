//! Rendering tests for havenctl output.

use chrono::{NaiveTime, TimeZone, Utc, Weekday};
use haven_shared::chat::{ChatGroup, ChatMessage};
use haven_shared::library::{Article, Category, Library};
use haven_shared::schedule::{ScheduleSlot, WeeklySchedule};
use havenctl::render;

fn article(id: &str, category: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        body: String::new(),
        category_id: category.to_string(),
        author: None,
        created_at: Utc.with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap(),
    }
}

#[test]
fn test_empty_lists() {
    assert_eq!(render::categories(&[]), "No categories.");
    assert_eq!(render::articles(&[]), "No articles.");
    assert_eq!(render::groups(&[]), "No groups.");
    assert_eq!(render::messages(&[]), "No messages.");
}

#[test]
fn test_article_detail() {
    let mut a = article("a1", "c1", "Box breathing");
    a.author = Some("Dr. Lind".to_string());
    a.body = "Inhale for four.".to_string();

    let out = render::article(&a);
    assert!(out.starts_with("Box breathing\nby Dr. Lind\n2026-02-10 09:00 UTC"));
    assert!(out.ends_with("Inhale for four."));
}

#[test]
fn test_library_groups_by_category() {
    let library = Library {
        categories: vec![
            Category { id: "c1".into(), name: "Anxiety".into() },
            Category { id: "c2".into(), name: "Sleep".into() },
            Category { id: "c3".into(), name: "Empty".into() },
        ],
        articles: vec![
            article("a2", "c2", "Wind-down routine"),
            article("a1", "c1", "Box breathing"),
            article("a9", "zz", "Orphan"),
        ],
    };

    let out = render::library(&library);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Anxiety");
    assert!(lines[1].contains("Box breathing"));
    assert_eq!(lines[2], "Sleep");
    assert!(!out.contains("Empty"));
    assert!(out.contains("Other"));
    assert!(out.ends_with("Orphan"));
}

#[test]
fn test_groups_with_and_without_topic() {
    let out = render::groups(&[
        ChatGroup {
            id: "g1".into(),
            name: "Evening circle".into(),
            topic: Some("Sleep".into()),
            member_count: 12,
        },
        ChatGroup {
            id: "g2".into(),
            name: "Open room".into(),
            topic: None,
            member_count: 3,
        },
    ]);
    assert!(out.contains("Evening circle (Sleep) - 12 members"));
    assert!(out.contains("Open room - 3 members"));
}

#[test]
fn test_messages_show_alias_only() {
    let out = render::messages(&[ChatMessage {
        id: "m1".into(),
        group_id: "g1".into(),
        alias: "river".into(),
        body: "hi all".into(),
        sent_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
    }]);
    assert_eq!(out, "[10:00] river: hi all");
}

#[test]
fn test_schedule_by_day() {
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    let schedule = WeeklySchedule {
        therapist_id: "th-1".into(),
        timezone: "Europe/Oslo".into(),
        slots: vec![
            ScheduleSlot::new(Weekday::Wed, t(13, 0), t(16, 30)),
            ScheduleSlot::new(Weekday::Mon, t(12, 0), t(13, 0)),
            ScheduleSlot::new(Weekday::Mon, t(9, 0), t(11, 0)),
        ],
    };

    assert_eq!(
        render::schedule(&schedule),
        "th-1 (Europe/Oslo)\n  Mon  09:00-11:00, 12:00-13:00\n  Wed  13:00-16:30"
    );

    let empty = WeeklySchedule { slots: vec![], ..schedule };
    assert!(render::schedule(&empty).ends_with("no availability"));
}
