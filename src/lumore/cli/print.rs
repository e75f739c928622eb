use chrono::{DateTime, Utc};
use colored::Colorize;
use lumore_admin::filters::{DisplayEntry, FieldDescriptor, QueryParams};
use lumore_admin::recipients::Recipients;
use lumore_admin::session::AdminSession;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const KEY_WIDTH: usize = 24;
const KIND_WIDTH: usize = 9;
const TOKEN_PREVIEW: usize = 6;

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn print_rejected(key: &str, reason: &str) {
    eprintln!("{} {}: {}", "skipped".yellow(), key.bold(), reason);
}

pub(super) fn print_fields(fields: &[FieldDescriptor]) {
    for field in fields {
        let label_width = LINE_WIDTH.saturating_sub(KEY_WIDTH + KIND_WIDTH + 30);
        let label = truncate_to_width(field.label, label_width);
        println!(
            "{}{}{}{}",
            pad_to_width(field.key, KEY_WIDTH).yellow(),
            pad_to_width(&label, label_width + 2),
            pad_to_width(&field.kind.to_string(), KIND_WIDTH).cyan(),
            field.hint().dimmed()
        );
    }
}

pub(super) fn print_display_list(entries: &[DisplayEntry]) {
    if entries.is_empty() {
        println!("No filters applied.");
        return;
    }

    println!("{}", format!("Filters ({}):", entries.len()).bold());
    let label_width = entries
        .iter()
        .map(|e| e.label.width())
        .max()
        .unwrap_or(0)
        + 2;
    let available = LINE_WIDTH.saturating_sub(label_width + 2);
    for entry in entries {
        println!(
            "  {}{}",
            pad_to_width(&entry.label, label_width),
            truncate_to_width(&entry.value, available)
        );
    }
}

pub(super) fn print_query(params: &QueryParams) {
    if params.is_empty() {
        return;
    }
    println!();
    println!("{}", "Query:".bold());
    for (key, value) in params {
        println!("  {}={}", key.yellow(), value);
    }
}

pub(super) fn print_json(rendered: &str) {
    println!();
    println!("{}", rendered);
}

pub(super) fn print_recipients(recipients: &Recipients) {
    if recipients.is_empty() {
        println!("No recipients.");
        return;
    }
    print_group("User ids", &recipients.user_ids);
    print_group("Usernames", &recipients.usernames);
}

fn print_group(title: &str, values: &[String]) {
    println!("{}", format!("{} ({}):", title, values.len()).bold());
    for value in values {
        println!("  {}", value);
    }
}

pub(super) fn print_session(session: Option<&AdminSession>) {
    let Some(session) = session else {
        println!("No session saved.");
        return;
    };

    let role = if session.is_admin() {
        "admin".green()
    } else {
        "not admin".red()
    };
    println!(
        "Signed in as {} ({})",
        session.user.username.bold(),
        role
    );
    println!("  {}{}", pad_to_width("user id", 10), session.user.id);
    if let Some(email) = &session.user.email {
        println!("  {}{}", pad_to_width("email", 10), email);
    }
    println!(
        "  {}{}",
        pad_to_width("token", 10),
        mask_token(&session.access_token)
    );
    if let Some(saved_at) = session.saved_at {
        println!("  {}{}", pad_to_width("saved", 10), format_time_ago(saved_at).dimmed());
    }
}

pub(super) fn print_config(entries: &[(&str, String)]) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(TOKEN_PREVIEW).collect();
    if visible.chars().count() < token.chars().count() {
        format!("{}…", visible)
    } else {
        visible
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
