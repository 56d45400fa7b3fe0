//! Plain-text rendering of the people page.
//!
//! Links print as the person's name; a trailing `*` marks a female record and
//! a trailing `?` marks a parent name with no matching record.

use peoplebook_core::{
    AppView, FilterPanel, LinkEmphasis, PageBody, ParentCell, PeoplePageView, PeopleTable,
    PersonLink, SortIndicator,
};
use std::fmt::Write;

const TITLE: &str = "People Page";
const LEGEND: &str = "* female   ? no matching record   > selected";

pub fn render_app_view(view: &AppView) -> String {
    match view {
        AppView::Home => "Home Page\n".to_string(),
        AppView::Redirect(target) => format!("Redirect: {target}\n"),
        AppView::NotFound => "Page not found\n".to_string(),
        AppView::People(page) => render_people_page(page),
    }
}

fn render_people_page(page: &PeoplePageView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    if let Some(filters) = &page.filters {
        out.push_str(&render_filters(filters));
    }
    out.push('\n');

    match &page.body {
        PageBody::Loading => out.push_str("Loading...\n"),
        PageBody::Table(table) => out.push_str(&render_table(table)),
        other => {
            let _ = writeln!(out, "{}", other.message().unwrap_or_default());
        }
    }
    out
}

fn render_filters(filters: &FilterPanel) -> String {
    let sex = filters
        .sex_options
        .iter()
        .map(|option| mark(option.label, option.active))
        .collect::<Vec<_>>()
        .join(" ");
    let centuries = filters
        .centuries
        .iter()
        .map(|option| mark(&option.century.to_string(), option.selected))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "Filters: sex {sex} | query \"{}\" | centuries {centuries}\n",
        filters.query
    )
}

fn mark(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

fn render_table(table: &PeopleTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    let mut header = vec![String::new()];
    header.extend(table.columns.iter().map(|column| {
        let arrow = match column.indicator {
            SortIndicator::Unsorted => "",
            SortIndicator::Ascending => " ^",
            SortIndicator::Descending => " v",
        };
        format!("{}{arrow}", column.label)
    }));
    header.push("Mother".to_string());
    header.push("Father".to_string());
    lines.push(header);

    for row in &table.rows {
        lines.push(vec![
            if row.selected { ">" } else { "" }.to_string(),
            link_text(&row.person),
            row.sex.to_string(),
            row.born.to_string(),
            row.died.to_string(),
            parent_text(&row.mother),
            parent_text(&row.father),
        ]);
    }

    let widths = (0..lines[0].len())
        .map(|col| {
            lines
                .iter()
                .map(|line| line[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    for line in &lines {
        let cells = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    let _ = writeln!(out, "\n{LEGEND}");
    out
}

fn link_text(link: &PersonLink) -> String {
    match link.emphasis {
        LinkEmphasis::Female => format!("{}*", link.name),
        LinkEmphasis::None => link.name.clone(),
    }
}

fn parent_text(cell: &ParentCell) -> String {
    match cell {
        ParentCell::Missing => "-".to_string(),
        ParentCell::Plain(name) => format!("{name}?"),
        ParentCell::Link(link) => link_text(link),
    }
}
