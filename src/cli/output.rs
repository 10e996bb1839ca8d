//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::client::{DocumentVersion, Participant, Requirement, RequirementStatus};
use crate::session::UserProfile;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn status_color(status: RequirementStatus) -> Color {
    match status {
        RequirementStatus::Draft => Color::Yellow,
        RequirementStatus::Active | RequirementStatus::InProgress => Color::Cyan,
        RequirementStatus::Completed => Color::Green,
        RequirementStatus::Unknown => Color::Grey,
    }
}

/// Reformat a backend ISO timestamp for display
fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Print a table of requirements
pub fn print_requirement_table(requirements: &[Requirement]) {
    if requirements.is_empty() {
        info("No requirements found. Create one with 'reqdoc create --title <title>'");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("Creator").fg(Color::Cyan),
            Cell::new("Updated").fg(Color::Cyan),
        ]);

    for req in requirements {
        table.add_row(vec![
            Cell::new(&req.id),
            Cell::new(&req.title),
            Cell::new(req.status.to_string()).fg(status_color(req.status)),
            Cell::new(req.role.as_deref().unwrap_or("-")),
            Cell::new(req.creator_name.as_deref().unwrap_or("-")),
            Cell::new(format_timestamp(req.updated_at.as_deref())),
        ]);
    }

    println!("{table}");
}

/// Print detailed requirement info
pub fn print_requirement_detail(req: &Requirement) {
    println!("{}", "Requirement".bold().underline());
    println!();
    println!("  {} {}", "Id:".bold(), req.id);
    println!("  {} {}", "Title:".bold(), req.title);
    println!("  {} {}", "Status:".bold(), req.status);

    if let Some(description) = &req.description {
        println!("  {} {}", "Description:".bold(), description);
    }

    if let Some(creator) = &req.creator_name {
        println!("  {} {}", "Creator:".bold(), creator);
    }

    println!(
        "  {} {}",
        "Created:".bold(),
        format_timestamp(req.created_at.as_deref())
    );
    println!(
        "  {} {}",
        "Updated:".bold(),
        format_timestamp(req.updated_at.as_deref())
    );
}

/// Print a table of document versions
pub fn print_version_table(versions: &[DocumentVersion]) {
    if versions.is_empty() {
        info("No documents generated yet. Run 'reqdoc generate <id>' first");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Version").fg(Color::Cyan),
            Cell::new("Generated").fg(Color::Cyan),
            Cell::new("Size").fg(Color::Cyan),
        ]);

    for doc in versions {
        table.add_row(vec![
            Cell::new(doc.version),
            Cell::new(format_timestamp(doc.generated_at.as_deref())),
            Cell::new(format!("{} chars", doc.content.chars().count())),
        ]);
    }

    println!("{table}");
}

/// Print a table of participants
pub fn print_participant_table(participants: &[Participant]) {
    if participants.is_empty() {
        info("No participants found");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Username").fg(Color::Cyan),
            Cell::new("Role").fg(Color::Cyan),
        ]);

    for participant in participants {
        let role_color = if participant.role == "owner" {
            Color::Green
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(participant.id),
            Cell::new(&participant.username),
            Cell::new(&participant.role).fg(role_color),
        ]);
    }

    println!("{table}");
}

/// Print the logged-in user's profile
pub fn print_profile(user: &UserProfile) {
    println!("  {} {}", "Username:".bold(), user.username);
    println!("  {} {}", "Email:".bold(), user.email);
    println!(
        "  {} {}",
        "Active:".bold(),
        if user.is_active { "yes" } else { "no" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_backend_shape() {
        assert_eq!(
            format_timestamp(Some("2024-03-01T09:30:00")),
            "2024-03-01 09:30"
        );
        assert_eq!(
            format_timestamp(Some("2024-03-01T09:30:00.123456")),
            "2024-03-01 09:30"
        );
    }

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(format_timestamp(None), "-");
    }
}
