//! Plain-text rendering of backend payloads.

use haven_shared::chat::{ChatGroup, ChatMessage, Membership};
use haven_shared::library::{Article, Category, Library};
use haven_shared::schedule::WeeklySchedule;
use std::fmt::Write;

pub fn categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories.".to_string();
    }
    categories
        .iter()
        .map(|c| format!("{:<10} {}", c.id, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn articles(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No articles.".to_string();
    }
    articles
        .iter()
        .map(|a| {
            format!(
                "{:<10} {}  [{}] {}",
                a.id,
                a.created_at.format("%Y-%m-%d"),
                a.category_id,
                a.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn article(article: &Article) -> String {
    let mut out = format!("{}\n", article.title);
    if let Some(author) = &article.author {
        let _ = writeln!(out, "by {}", author);
    }
    let _ = writeln!(out, "{}", article.created_at.format("%Y-%m-%d %H:%M UTC"));
    if !article.body.is_empty() {
        let _ = write!(out, "\n{}", article.body);
    }
    out.trim_end().to_string()
}

/// Articles grouped under their category names, categories in server order.
pub fn library(library: &Library) -> String {
    let mut out = String::new();
    for category in &library.categories {
        let in_category: Vec<&Article> = library.in_category(&category.id).collect();
        if in_category.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", category.name);
        for a in in_category {
            let _ = writeln!(out, "  {:<10} {}", a.id, a.title);
        }
    }

    let uncategorized: Vec<&Article> = library
        .articles
        .iter()
        .filter(|a| library.category_name(&a.category_id).is_none())
        .collect();
    if !uncategorized.is_empty() {
        let _ = writeln!(out, "Other");
        for a in uncategorized {
            let _ = writeln!(out, "  {:<10} {}", a.id, a.title);
        }
    }

    if out.is_empty() {
        return "No articles.".to_string();
    }
    out.trim_end().to_string()
}

pub fn groups(groups: &[ChatGroup]) -> String {
    if groups.is_empty() {
        return "No groups.".to_string();
    }
    groups
        .iter()
        .map(|g| match &g.topic {
            Some(topic) => format!("{:<8} {} ({}) - {} members", g.id, g.name, topic, g.member_count),
            None => format!("{:<8} {} - {} members", g.id, g.name, g.member_count),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn membership(membership: &Membership) -> String {
    format!("Joined {} as {}", membership.group_id, membership.alias)
}

pub fn messages(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return "No messages.".to_string();
    }
    messages
        .iter()
        .map(|m| format!("[{}] {}: {}", m.sent_at.format("%H:%M"), m.alias, m.body))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn schedule(schedule: &WeeklySchedule) -> String {
    let mut out = format!("{} ({})\n", schedule.therapist_id, schedule.timezone);
    let days = schedule.by_day();
    if days.is_empty() {
        out.push_str("  no availability");
        return out;
    }
    for (weekday, slots) in days {
        let windows: Vec<String> = slots
            .iter()
            .map(|s| format!("{}-{}", s.start.format("%H:%M"), s.end.format("%H:%M")))
            .collect();
        let _ = writeln!(out, "  {}  {}", weekday, windows.join(", "));
    }
    out.trim_end().to_string()
}
