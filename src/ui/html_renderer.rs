//! HTML rendering surface.
//!
//! Turns a [`LibraryView`] into the markup of the bookmark list. The page
//! script swaps it into `#bookmarkList` and toggles `#emptyState`.

use crate::types::view::{BookmarkCard, LibraryView};

/// Anything that can display the library view.
pub trait RenderSurface {
    fn present(&mut self, view: &LibraryView);
}

/// Keeps the most recently rendered list markup.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    list_html: String,
    empty_state_visible: bool,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_html(&self) -> &str {
        &self.list_html
    }

    pub fn empty_state_visible(&self) -> bool {
        self.empty_state_visible
    }
}

impl RenderSurface for HtmlSurface {
    fn present(&mut self, view: &LibraryView) {
        self.empty_state_visible = view.is_empty();
        self.list_html = render_list(view);
    }
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Renders every card; an empty view renders to an empty string.
pub fn render_list(view: &LibraryView) -> String {
    view.cards.iter().map(render_card).collect()
}

fn render_card(card: &BookmarkCard) -> String {
    let url = escape_html(&card.url);
    let id = escape_html(&card.id);
    let mut html = String::with_capacity(512);
    html.push_str("<li class=\"bookmark-card\">");
    html.push_str(&format!(
        "<a href=\"{url}\" class=\"bookmark-url\" target=\"_blank\" rel=\"noopener\">{url}</a>"
    ));
    if let Some(title) = &card.title {
        html.push_str(&format!("<div class=\"bookmark-title\">{}</div>", escape_html(title)));
    }
    html.push_str("<div class=\"tag-list\">");
    for tag in &card.tags {
        let tag = escape_html(tag);
        html.push_str(&format!("<button class=\"tag\" data-tag=\"{tag}\">{tag}</button>"));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        "<div class=\"meta\"><span>Added on {}</span><div class=\"actions\">\
         <button class=\"btn btn-ghost btn-edit\" data-id=\"{id}\">✏ Edit</button>\
         <button class=\"btn btn-ghost btn-delete\" data-id=\"{id}\">🗑 Delete</button>\
         </div></div>",
        escape_html(&card.added_on)
    ));
    html.push_str("</li>");
    html
}
