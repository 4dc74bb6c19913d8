//! # BookCard Component
//!
//! Renders one book as a bordered card: title with publish year, author,
//! price, star rating, and the favourite marker. The grid stamps these out
//! at fixed size, so the card is a plain renderable builder rather than a
//! stateful component.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::book::Book;

/// Total card height in rows: 6 content lines plus top/bottom borders.
pub const CARD_HEIGHT: u16 = 8;

/// Narrowest card the grid will lay out.
pub const MIN_CARD_WIDTH: u16 = 28;

pub struct BookCard<'a> {
    book: &'a Book,
    currency: &'a str,
    selected: bool,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a Book, currency: &'a str, selected: bool) -> Self {
        Self {
            book,
            currency,
            selected,
        }
    }

    /// Build the card as a widget for the given card width.
    pub fn paragraph(&self, card_width: u16) -> Paragraph<'a> {
        let inner_width = card_width.saturating_sub(2) as usize;
        let book = self.book;

        let title = match &book.name {
            Some(name) => format!("{} ({})", name, book.publish_year),
            None => format!("(untitled) ({})", book.publish_year),
        };

        // Title gets up to two wrapped lines; anything longer is truncated.
        let wrapped = textwrap::wrap(&title, inner_width.max(1));
        let title_first = wrapped.first().map(|s| s.to_string()).unwrap_or_default();
        let title_second = match wrapped.len() {
            0 | 1 => String::new(),
            2 => wrapped[1].to_string(),
            _ => truncate_to_width(&wrapped[1..].join(" "), inner_width),
        };

        let title_style = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let stars = "★".repeat(book.rating as usize);
        let rating_line = Line::from(vec![
            Span::styled(stars, Style::default().fg(Color::Yellow)),
            Span::styled(format!(" ({} Star)", book.rating), dim),
        ]);

        let favourite_line = if book.is_favorite {
            Line::styled("♥ Favourite", Style::default().fg(Color::Red))
        } else {
            Line::styled("♡ Favourite", dim)
        };

        let text = Text::from(vec![
            Line::styled(title_first, title_style),
            Line::styled(title_second, title_style),
            Line::styled(format!("By: {}", book.author), dim),
            Line::styled(
                format!("{}{:.2}", self.currency, book.price),
                Style::default().fg(Color::Green),
            ),
            rating_line,
            favourite_line,
        ]);

        let border_style = if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(image) = &book.image {
            // Opaque asset reference; shown, never resolved.
            block = block.title_bottom(
                Line::styled(format!(" {image} "), dim).alignment(Alignment::Right),
            );
        }

        Paragraph::new(text).block(block)
    }
}

/// Truncate to a display width, appending "..." when something was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0usize;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > keep {
            break;
        }
        width += cw;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn sample_book(favorite: bool) -> Book {
        Book {
            id: 1,
            name: Some("The Great Gatsby".to_string()),
            author: "F. Scott Fitzgerald".to_string(),
            publish_year: 1925,
            price: 12.99,
            rating: 4,
            is_favorite: favorite,
            image: Some("gatsby.png".to_string()),
        }
    }

    fn render_card(book: &Book, width: u16) -> String {
        let backend = TestBackend::new(width, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let card = BookCard::new(book, "$", false);
                let area = Rect::new(0, 0, width, CARD_HEIGHT);
                f.render_widget(card.paragraph(width), area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_card_shows_title_year_author_price_and_stars() {
        let text = render_card(&sample_book(false), 40);
        assert!(text.contains("The Great Gatsby (1925)"));
        assert!(text.contains("By: F. Scott Fitzgerald"));
        assert!(text.contains("$12.99"));
        assert!(text.contains("★★★★"));
        assert!(text.contains("(4 Star)"));
        assert!(text.contains("gatsby.png"));
    }

    #[test]
    fn test_card_favourite_marker_reflects_state() {
        assert!(render_card(&sample_book(false), 40).contains("♡ Favourite"));
        assert!(render_card(&sample_book(true), 40).contains("♥ Favourite"));
    }

    #[test]
    fn test_card_renders_placeholder_for_untitled_book() {
        let mut book = sample_book(false);
        book.name = None;
        let text = render_card(&book, 40);
        assert!(text.contains("(untitled) (1925)"));
    }

    #[test]
    fn test_card_without_image_omits_footer() {
        let mut book = sample_book(false);
        book.image = None;
        let text = render_card(&book, 40);
        assert!(!text.contains(".png"));
    }

    #[test]
    fn test_zero_rating_shows_no_stars() {
        let mut book = sample_book(false);
        book.rating = 0;
        let text = render_card(&book, 40);
        assert!(!text.contains('★'));
        assert!(text.contains("(0 Star)"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a very long title indeed", 10), "a very ...");
    }
}
