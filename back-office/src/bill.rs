//! Bill rendering
//!
//! Fixed-width text receipt for one order. Pure function of the order; the
//! result is shown and printed, never persisted.

use shared::models::Order;

const BILL_WIDTH: usize = 42;
const STORE_NAME: &str = "PARLOUR";
const STORE_TAGLINE: &str = "Ice Cream Parlour";

struct BillBuilder {
    out: String,
    width: usize,
}

impl BillBuilder {
    fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn center(&mut self, text: &str) {
        let pad = self.width.saturating_sub(text.chars().count()) / 2;
        self.out.push_str(&" ".repeat(pad));
        self.line(text);
    }

    /// Left and right text on one line, right-aligned to the full width
    fn line_lr(&mut self, left: &str, right: &str) {
        let used = left.chars().count() + right.chars().count();
        let gap = self.width.saturating_sub(used).max(1);
        self.out.push_str(left);
        self.out.push_str(&" ".repeat(gap));
        self.line(right);
    }

    fn separator(&mut self, ch: char) {
        let rule: String = std::iter::repeat_n(ch, self.width).collect();
        self.line(&rule);
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Truncate-or-pad to an exact column width
fn pad(text: &str, width: usize, right_align: bool) -> String {
    let truncated: String = text.chars().take(width).collect();
    let fill = width - truncated.chars().count();
    if right_align {
        format!("{}{}", " ".repeat(fill), truncated)
    } else {
        format!("{}{}", truncated, " ".repeat(fill))
    }
}

/// Render an order as a printable text bill
pub fn render_bill(order: &Order) -> String {
    let mut b = BillBuilder::new(BILL_WIDTH);

    b.center(STORE_NAME);
    b.center(STORE_TAGLINE);
    b.separator('=');

    b.line(&format!("Order: {}", order_label(&order.timestamp)));
    b.line(&format!("Customer: {}", order.name));
    b.line(&format!("Phone: {}", order.phone));
    if !order.table.is_empty() {
        b.line(&format!("Table: {}", order.table));
    }
    b.blank();

    // item table: 17 + 4 + 8 + 10 columns + 3 separators = BILL_WIDTH
    b.line(&format!(
        "{} {} {} {}",
        pad("ITEM", 17, false),
        pad("QTY", 4, true),
        pad("PRICE", 8, true),
        pad("TOTAL", 10, true),
    ));
    b.separator('-');

    for item in &order.items {
        b.line(&format!(
            "{} {} {} {}",
            pad(&item.name, 17, false),
            pad(&item.quantity.to_string(), 4, true),
            pad(&format!("{:.2}", item.price), 8, true),
            pad(&format!("{:.2}", item.line_total()), 10, true),
        ));
    }

    b.separator('-');
    b.line_lr("TOTAL", &format!("{:.2}", order.total));
    b.blank();

    if !order.review.is_empty() {
        b.line("Special instructions:");
        b.line(&order.review);
        b.blank();
    }

    b.center("Thank you for your order!");
    b.center("Visit us again at Parlour");
    b.finish()
}

fn order_label(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
