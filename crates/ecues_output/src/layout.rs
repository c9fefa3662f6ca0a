//! Page layout of a [`ReportDocument`].
//!
//! Vertical positions are abstract units on a page of `page_height`; an entry
//! that starts below the bottom edge moves to a fresh page. The header band
//! sits on the first page only, the footer on every page.
use ecues_core::ReportDocument;
use serde::Serialize;

const LABEL_COLUMN: usize = 22;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub page_height: u32,
    /// Where content starts on the first page, below the header band.
    pub first_page_top: u32,
    pub continuation_top: u32,
    pub banner_advance: u32,
    pub line_advance: u32,
    pub field_gap: u32,
    pub section_gap: u32,
    /// Maximum characters per wrapped value line.
    pub wrap_columns: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_height: 280,
            first_page_top: 50,
            continuation_top: 20,
            banner_advance: 10,
            line_advance: 6,
            field_gap: 4,
            section_gap: 5,
            wrap_columns: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PageLine {
    Banner(String),
    Field { label: String, lines: Vec<String> },
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: usize,
    pub lines: Vec<PageLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedReport {
    pub title: String,
    pub generated_at: String,
    pub attribution: String,
    pub pages: Vec<Page>,
}

impl PagedReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn footer(&self, page: &Page) -> String {
        format!(
            "Página {} de {} - {}",
            page.number,
            self.page_count(),
            self.attribution
        )
    }

    /// Plain-text rendition; pages are separated by a form feed.
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(LABEL_COLUMN + 60);
        let mut rendered = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let mut out = String::new();
            if page.number == 1 {
                out.push_str(&rule);
                out.push('\n');
                out.push_str(&format!("{}    {}\n", self.title, self.generated_at));
                out.push_str(&rule);
                out.push_str("\n\n");
            }
            for line in &page.lines {
                match line {
                    PageLine::Banner(title) => out.push_str(&format!("== {title} ==\n")),
                    PageLine::Field { label, lines } if label.is_empty() => {
                        for value in lines {
                            out.push_str(value);
                            out.push('\n');
                        }
                    }
                    PageLine::Field { label, lines } => {
                        for (i, value) in lines.iter().enumerate() {
                            let lead = if i == 0 { label.as_str() } else { "" };
                            let row = format!("{lead:<LABEL_COLUMN$} {value}");
                            out.push_str(row.trim_end());
                            out.push('\n');
                        }
                    }
                    PageLine::Spacer => out.push('\n'),
                }
            }
            out.push('\n');
            out.push_str(&self.footer(page));
            out.push('\n');
            rendered.push(out);
        }
        rendered.join("\u{0C}\n")
    }
}

struct Cursor<'a> {
    layout: &'a PageLayout,
    pages: Vec<Page>,
    y: u32,
}

impl<'a> Cursor<'a> {
    fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            pages: vec![Page {
                number: 1,
                lines: Vec::new(),
            }],
            y: layout.first_page_top,
        }
    }

    fn place(&mut self, line: PageLine, advance: u32) {
        if self.y > self.layout.page_height {
            let number = self.pages.len() + 1;
            self.pages.push(Page {
                number,
                lines: Vec::new(),
            });
            self.y = self.layout.continuation_top;
        }
        self.current().lines.push(line);
        self.y += advance;
    }

    fn gap(&mut self) {
        self.current().lines.push(PageLine::Spacer);
        self.y += self.layout.section_gap;
    }

    fn current(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

/// Lays the document out on pages.
pub fn paginate(doc: &ReportDocument, layout: &PageLayout, generated_at: &str) -> PagedReport {
    let mut cursor = Cursor::new(layout);
    for section in &doc.sections {
        cursor.place(PageLine::Banner(section.title.clone()), layout.banner_advance);
        for field in &section.fields {
            let lines = wrap(&field.value, layout.wrap_columns);
            let advance = lines.len() as u32 * layout.line_advance + layout.field_gap;
            cursor.place(
                PageLine::Field {
                    label: field.label.clone(),
                    lines,
                },
                advance,
            );
        }
        cursor.gap();
    }

    PagedReport {
        title: doc.title.clone(),
        generated_at: generated_at.to_string(),
        attribution: doc.attribution.clone(),
        pages: cursor.pages,
    }
}

/// Greedy word wrap. Explicit newlines are kept; words longer than a line are
/// split. Always yields at least one line.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut width = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > columns {
                if width > 0 {
                    lines.push(std::mem::take(&mut line));
                    width = 0;
                }
                let rest = word.split_off(columns);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }
            let needed = if width == 0 { word.len() } else { width + 1 + word.len() };
            if needed > columns {
                lines.push(std::mem::take(&mut line));
                width = 0;
            }
            if width > 0 {
                line.push(' ');
                width += 1;
            }
            line.extend(word.iter());
            width += word.len();
        }
        lines.push(line);
    }
    lines
}
