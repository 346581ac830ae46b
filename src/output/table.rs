use comfy_table::Color;

use datasrc::source::RepoInfo;
use datasrc::{Resolution, ResolutionOrigin, SourceKey};

use crate::output::format::{create_styled_table, header_cell, or_dash, styled_cell};

fn origin_text(origin: ResolutionOrigin) -> &'static str {
    match origin {
        ResolutionOrigin::Query => "from ?source= query",
        ResolutionOrigin::Stored => "from saved preference",
        ResolutionOrigin::Default => "default",
    }
}

pub(crate) fn render_resolution_table(resolution: &Resolution, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Source", use_color),
        header_cell("Owner", use_color),
        header_cell("Repository", use_color),
        header_cell("Label", use_color),
        header_cell("Active", use_color),
    ]);

    for key in SourceKey::ALL {
        let source = resolution.sources.get(key);
        let active = key == resolution.key;
        let color = (active && use_color).then_some(Color::Green);
        table.add_row(vec![
            styled_cell(key.as_str(), color, active),
            styled_cell(&source.owner, color, false),
            styled_cell(&source.repo_name, color, false),
            styled_cell(&source.label, color, false),
            styled_cell(if active { "*" } else { "" }, color, active),
        ]);
    }

    format!(
        "{table}\n\n  Active: {} ({})\n  Data:   {}\n",
        resolution.key,
        origin_text(resolution.origin),
        resolution.config.data_base_url()
    )
}

pub(crate) fn print_resolution_table(resolution: &Resolution, use_color: bool) {
    println!("{}", render_resolution_table(resolution, use_color));
}

pub(crate) fn print_infer_table(href: &str, info: &RepoInfo, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Page", use_color),
        header_cell("Owner", use_color),
        header_cell("Repository", use_color),
    ]);
    table.add_row(vec![
        styled_cell(href, None, false),
        styled_cell(or_dash(info.owner.as_deref()), None, false),
        styled_cell(or_dash(info.repo_name.as_deref()), None, false),
    ]);
    println!("{table}");
}
