// Rust guideline compliant 2026-10-14

//! Markdown rendering of the whole portfolio as a single page.

use crate::git::CommitInfo;
use folio_app::SiteContent;
use folio_core::{calculate_period, Config, Contact, Record, Section};
use std::fmt::Write;

/// Renders every non-empty section of the site as Markdown.
///
/// Dated records show their boundaries and the detailed period label. The
/// footer names the last commit when one is known.
pub fn render_page(config: &Config, content: &SiteContent, commit: Option<&CommitInfo>) -> String {
    let mut page = format!("# {}\n", config.site_title);
    if !config.owner_name.is_empty() {
        let _ = write!(page, "\n**{}**\n", config.owner_name);
    }

    render_section(&mut page, &content.experience);
    render_section(&mut page, &content.education);
    render_section(&mut page, &content.organizations);
    render_section(&mut page, &content.projects);
    render_section(&mut page, &content.certificates);
    render_contacts(&mut page, &content.contacts);

    if let Some(commit) = commit {
        let reference = match &commit.url {
            Some(url) => format!("[{}]({})", commit.short_sha(), url),
            None => commit.short_sha().to_string(),
        };
        let _ = write!(
            page,
            "\n---\n\n_Last updated {} ({})_\n",
            commit.date.format("%Y-%m-%d"),
            reference
        );
    }

    page
}

fn render_section<T: Record>(page: &mut String, records: &[T]) {
    if records.is_empty() {
        return;
    }
    let _ = write!(page, "\n## {}\n", T::SECTION.heading());
    for record in records {
        render_record(page, record);
    }
}

fn render_record<T: Record>(page: &mut String, record: &T) {
    let _ = write!(page, "\n### {}\n\n", record.title());

    let subtitle = record.subtitle();
    if !subtitle.is_empty() {
        let _ = writeln!(page, "**{}**\n", subtitle);
    }

    if let Some((start, end)) = record.timeframe() {
        let end_label = end.filter(|e| !e.trim().is_empty()).unwrap_or("Present");
        let period = calculate_period(Some(start), end);
        if period.is_empty() {
            let _ = writeln!(page, "_{} - {}_\n", start, end_label);
        } else {
            let _ = writeln!(page, "_{} - {} · {}_\n", start, end_label, period);
        }
    }

    if let Some(image) = record.image() {
        let _ = writeln!(page, "![{}]({})\n", record.title(), image.url);
    }

    let mut description = None;
    for (label, value) in record.display_fields() {
        if value.is_empty() || value == record.title() || subtitle.contains(value.as_str()) {
            continue;
        }
        if label == "Description" {
            description = Some(value);
        } else {
            let _ = writeln!(page, "- **{}:** {}", label, linkify(&value));
        }
    }

    if let Some(description) = description {
        let _ = writeln!(page, "\n{}", description.trim_end());
    }
}

fn render_contacts(page: &mut String, contacts: &[Contact]) {
    if contacts.is_empty() {
        return;
    }
    let _ = write!(page, "\n## {}\n\n", Section::Contacts.heading());
    for contact in contacts {
        let label = if contact.label.is_empty() {
            contact.url.as_str()
        } else {
            contact.label.as_str()
        };
        let _ = writeln!(page, "- **{}:** [{}]({})", contact.platform, label, contact.url);
    }
}

fn linkify(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        format!("[{}]({})", value, value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use folio_core::{Experience, Project};

    fn content() -> SiteContent {
        SiteContent {
            experience: vec![Experience {
                id: "exp-a1b2c3".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                location: "Berlin".to_string(),
                start_date: "2020-01-01".to_string(),
                end_date: Some("2021-07-15".to_string()),
                description: "Built things.".to_string(),
                skills: vec!["Rust".to_string(), "SQL".to_string()],
                ..Experience::default()
            }],
            projects: vec![Project {
                id: "prj-d4e5f6".to_string(),
                title: "Folio".to_string(),
                link: "https://folio.example.com".to_string(),
                ..Project::default()
            }],
            contacts: vec![Contact {
                id: "cnt-0a0b0c".to_string(),
                platform: "GitHub".to_string(),
                label: String::new(),
                url: "https://github.com/me".to_string(),
            }],
            ..SiteContent::default()
        }
    }

    #[test]
    fn test_render_page_sections() {
        let config = Config {
            site_title: "Jo's Portfolio".to_string(),
            owner_name: "Jo".to_string(),
            ..Config::default()
        };
        let page = render_page(&config, &content(), None);

        assert!(page.starts_with("# Jo's Portfolio\n"));
        assert!(page.contains("\n## Experience\n"));
        assert!(page.contains("### Engineer"));
        assert!(page.contains("**Acme · Berlin**"));
        assert!(page.contains("_2020-01-01 - 2021-07-15 · 1.5 years_"));
        assert!(page.contains("- **Skills:** Rust, SQL"));
        assert!(page.contains("\nBuilt things.\n"));
        assert!(page.contains("- **Link:** [https://folio.example.com](https://folio.example.com)"));
        assert!(page.contains("- **GitHub:** [https://github.com/me](https://github.com/me)"));
        assert!(!page.contains("## Education"));
        assert!(!page.contains("Last updated"));
    }

    #[test]
    fn test_render_page_footer_links_commit() {
        let commit = CommitInfo {
            sha: "0123456789abcdef".to_string(),
            message: "Update".to_string(),
            date: Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap(),
            url: Some("https://github.com/me/site/commit/0123456789abcdef".to_string()),
        };
        let page = render_page(&Config::default(), &SiteContent::default(), Some(&commit));
        assert!(page.starts_with("# Portfolio\n"));
        assert!(page.ends_with(
            "_Last updated 2026-10-01 ([0123456](https://github.com/me/site/commit/0123456789abcdef))_\n"
        ));
    }
}
