//! Print-ready HTML for a render description. Output is deterministic for a
//! given description, and every piece of user text is escaped.

use std::fmt::Write;

use crate::preview::projector::{
    RenderDescription, RenderHeader, RenderSection, SkillGroup, TimelineItem,
};
use crate::preview::styles::StyleBundle;

const PRINT_CSS: &str = "@page{size:letter;margin:0.5in}\
body{font-family:Inter,Helvetica,Arial,sans-serif;margin:0;color:#111827}\
header{padding:2rem}\
section{padding:0 2rem 1rem}\
h2{border-bottom-width:2px;border-bottom-style:solid;padding-bottom:0.25rem}\
.description{white-space:pre-line}\
.badge{display:inline-block;padding:0.125rem 0.5rem;margin:0 0.25rem 0.25rem 0;border-radius:9999px}";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_html(render: &RenderDescription) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut html, render);
    html
}

fn write_document(out: &mut String, render: &RenderDescription) -> std::fmt::Result {
    write!(
        out,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{} - Resume</title><style>{}</style></head>\
         <body class=\"template-{}\">",
        escape(&render.header.name),
        PRINT_CSS,
        render.template
    )?;
    write_header(out, &render.header, &render.style)?;
    for section in &render.sections {
        write_section(out, section, &render.style)?;
    }
    out.push_str("</body></html>");
    Ok(())
}

fn write_header(out: &mut String, header: &RenderHeader, style: &StyleBundle) -> std::fmt::Result {
    write!(
        out,
        "<header class=\"{} {}\">",
        style.header_background, style.header_text
    )?;
    if let Some(photo) = &header.photo {
        write!(out, "<img class=\"photo\" src=\"{}\" alt=\"\">", escape(photo))?;
    }
    write!(out, "<h1>{}</h1>", escape(&header.name))?;
    if !header.contacts.is_empty() {
        out.push_str("<ul class=\"contacts\">");
        for contact in &header.contacts {
            match &contact.href {
                Some(href) => write!(
                    out,
                    "<li><a href=\"{}\">{}</a></li>",
                    escape(href),
                    escape(&contact.label)
                )?,
                None => write!(out, "<li>{}</li>", escape(&contact.label))?,
            }
        }
        out.push_str("</ul>");
    }
    out.push_str("</header>");
    Ok(())
}

fn write_section(out: &mut String, section: &RenderSection, style: &StyleBundle) -> std::fmt::Result {
    write!(
        out,
        "<section><h2 class=\"{}\">{}</h2>",
        style.accent_border,
        escape(section.title())
    )?;
    match section {
        RenderSection::Summary { text, .. } => write!(out, "<p>{}</p>", escape(text))?,
        RenderSection::Experience { items, .. } | RenderSection::Education { items, .. } => {
            for item in items {
                write_timeline_item(out, item, style)?;
            }
        }
        RenderSection::Skills { groups, .. } => {
            for group in groups {
                write_skill_group(out, group, style)?;
            }
        }
    }
    out.push_str("</section>");
    Ok(())
}

fn write_timeline_item(
    out: &mut String,
    item: &TimelineItem,
    style: &StyleBundle,
) -> std::fmt::Result {
    write!(
        out,
        "<article><h3>{}</h3><p class=\"{}\">{}</p><p class=\"dates\">{}</p>",
        escape(&item.title),
        style.organization_text,
        escape(&item.organization),
        escape(&item.dates)
    )?;
    for extra in [&item.location, &item.detail].into_iter().flatten() {
        write!(out, "<p>{}</p>", escape(extra))?;
    }
    if let Some(description) = &item.description {
        write!(out, "<p class=\"description\">{}</p>", escape(description))?;
    }
    out.push_str("</article>");
    Ok(())
}

fn write_skill_group(out: &mut String, group: &SkillGroup, style: &StyleBundle) -> std::fmt::Result {
    write!(out, "<div class=\"skill-group\"><h3>{}</h3>", escape(&group.category))?;
    for badge in &group.skills {
        write!(
            out,
            "<span class=\"badge {}\">{}</span>",
            style.skill_badge,
            escape(&badge.label)
        )?;
    }
    out.push_str("</div>");
    Ok(())
}
