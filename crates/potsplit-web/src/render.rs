//! HTML rendering for the single-page UI.
//!
//! Output is built with plain string formatting; there is little enough
//! markup that a template engine would be more code than the page. All
//! user-supplied text goes through [`escape`] before it reaches the page.

use std::fmt::Write as _;

use potsplit_types::constants::CENTS_PER_UNIT;
use potsplit_types::{DebtLedger, Participant, Roster};

/// Extra blank entry rows appended after the existing participants.
const BLANK_ROWS: usize = 3;

/// Render the full page: entry form, totals, and (when available) the
/// settlement ledger or an error banner.
#[must_use]
pub fn page(roster: &Roster, ledger: Option<&DebtLedger>, error: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>potsplit</title>\n\
         </head>\n<body>\n<h1>potsplit</h1>\n",
    );

    if let Some(message) = error {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", escape(message));
    }

    render_form(&mut html, roster);
    render_totals(&mut html, roster);
    if let Some(ledger) = ledger {
        render_ledger(&mut html, ledger);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, roster: &Roster) {
    html.push_str(
        "<form method=\"post\" action=\"/\">\n<table>\n\
         <tr><th>Player</th><th>Buy-in</th><th>Stack</th></tr>\n",
    );
    // Existing participants are shown sorted by name for readability;
    // submission order (row suffix order) is what ends up in the token.
    for (i, participant) in sorted_for_display(roster).iter().enumerate() {
        render_row(html, i, Some(participant));
    }
    for i in 0..BLANK_ROWS {
        render_row(html, roster.len() + i, None);
    }
    html.push_str("</table>\n<button type=\"submit\">Split</button>\n</form>\n");
}

fn render_row(html: &mut String, index: usize, participant: Option<&Participant>) {
    let (name, buy_in, stack) = participant.map_or_else(
        || (String::new(), String::new(), String::new()),
        |p| (escape(&p.name), cents_to_units(p.buy_in), cents_to_units(p.stack)),
    );
    let _ = writeln!(
        html,
        "<tr>\
         <td><input name=\"player{index}\" value=\"{name}\"></td>\
         <td><input name=\"buyin{index}\" value=\"{buy_in}\" inputmode=\"decimal\"></td>\
         <td><input name=\"stack{index}\" value=\"{stack}\" inputmode=\"decimal\"></td>\
         </tr>"
    );
}

fn render_totals(html: &mut String, roster: &Roster) {
    let _ = writeln!(
        html,
        "<p>Total buy-in: {} &mdash; total stacks: {}</p>",
        cents_to_units(roster.total_buy_in()),
        cents_to_units(roster.total_stack()),
    );
    if !roster.is_empty() && !roster.is_balanced() {
        html.push_str(
            "<p>The totals don't match yet; debts are shown once every cent is accounted for.</p>\n",
        );
    }
}

fn render_ledger(html: &mut String, ledger: &DebtLedger) {
    if ledger.is_empty() {
        html.push_str("<p>Everyone broke even. Nothing to settle.</p>\n");
        return;
    }
    html.push_str("<h2>Who pays whom</h2>\n<ul>\n");
    for (debtor, debts) in ledger.iter() {
        for debt in debts {
            let _ = writeln!(
                html,
                "<li>{} pays {} to {}</li>",
                escape(debtor),
                cents_to_units(debt.amount),
                escape(&debt.creditor),
            );
        }
    }
    html.push_str("</ul>\n");
}

/// Participants sorted case-insensitively by name. Display only — the
/// roster itself keeps insertion order.
fn sorted_for_display(roster: &Roster) -> Vec<&Participant> {
    let mut participants: Vec<&Participant> = roster.iter().collect();
    participants.sort_by_key(|p| p.name.to_lowercase());
    participants
}

/// Format cents as whole units with two decimals: `1234` -> `"12.34"`.
#[must_use]
pub fn cents_to_units(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}{}.{:02}", abs / CENTS_PER_UNIT, abs % CENTS_PER_UNIT)
}

/// Minimal HTML escaping for text and attribute contexts.
fn escape(text: &str) -> String {
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
