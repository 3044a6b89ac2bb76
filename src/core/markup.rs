use super::content::{
    ContactAction, Identity, Skill, CONTACTS, CONTACT_TITLE, FOOTER_TEXT, PROJECT_LINK_TEXT,
    SITE_OWNER, SKILLS, SKILLS_TITLE,
};
use super::marker::ProjectLink;
use super::navigation::Section;
use super::scene::InfoCard;
use std::fmt::Write;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Class list of the page root for the given section.
pub fn root_class(active: Section) -> String {
    format!("app {}", active.slug())
}

pub fn header_html(active: Section) -> String {
    let mut html = format!("<h1>{}</h1><nav>", escape(SITE_OWNER));
    for section in Section::ALL {
        let class = if section == active {
            "nav-btn active"
        } else {
            "nav-btn"
        };
        _ = write!(
            html,
            "<button type=\"button\" class=\"{}\" data-section=\"{}\">{}</button>",
            class,
            section.slug(),
            escape(section.label())
        );
    }
    html.push_str("</nav>");
    html
}

pub fn footer_html() -> String {
    format!("<p>{}</p>", escape(FOOTER_TEXT))
}

fn skill_card(skill: &Skill) -> String {
    format!(
        "<div class=\"skill-card\"><div class=\"skill-icon\">{}</div><h3>{}</h3><p>{}</p></div>",
        escape(skill.icon),
        escape(skill.name),
        escape(skill.description)
    )
}

pub fn skills_html() -> String {
    let cards: String = SKILLS.iter().map(skill_card).collect();
    format!(
        "<div class=\"section skills-section\"><h2 class=\"section-title\">{}</h2><div class=\"skills-grid\">{}</div></div>",
        escape(SKILLS_TITLE),
        cards
    )
}

fn contact_item(action: &ContactAction) -> String {
    let target = if action.opens_new_tab() {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a href=\"{}\" class=\"contact-item\"{}>{} {}</a>",
        escape(action.href),
        target,
        escape(action.icon),
        escape(action.label)
    )
}

pub fn contact_html() -> String {
    let items: String = CONTACTS.iter().map(contact_item).collect();
    format!(
        "<div class=\"section contact-section\"><h2 class=\"section-title\">{}</h2><div class=\"contact-grid\">{}</div></div>",
        escape(CONTACT_TITLE),
        items
    )
}

/// Flat panel for a DOM-only section; the projects view has none.
pub fn section_panel_html(section: Section) -> Option<String> {
    match section {
        Section::Projects => None,
        Section::Skills => Some(skills_html()),
        Section::Contact => Some(contact_html()),
    }
}

/// Inner HTML of a marker's floating card. The anchor is omitted entirely
/// for markers without a link.
pub fn info_card_html(card: &InfoCard) -> String {
    let mut html = format!(
        "<div class=\"project-card\"><h3>{}</h3><p>{}</p>",
        escape(card.label),
        escape(card.description)
    );
    if let ProjectLink::Url(url) = card.link {
        _ = write!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape(url),
            escape(PROJECT_LINK_TEXT)
        );
    }
    html.push_str("</div>");
    html
}

pub fn identity_card_html(identity: &Identity) -> String {
    format!(
        "<div class=\"project-card\"><h3>{}</h3><p>{}</p><p>{}</p></div>",
        escape(identity.name),
        escape(identity.role),
        escape(identity.location)
    )
}
