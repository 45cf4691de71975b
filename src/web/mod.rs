// Web module - HTML rendering and the page server

pub mod render;
pub mod server;

/// Document envelope the route table is placed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub title: String,
    pub style: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        let page = crate::config::PageConfig::default();
        PageTemplate {
            title: page.title,
            style: page.style,
        }
    }
}

impl PageTemplate {
    pub fn wrap(&self, body: &str) -> String {
        format!(
            "<html><head><title>{}</title><style>{}</style></head><body>\n{}\n</body></html>",
            self.title, self.style, body
        )
    }
}
