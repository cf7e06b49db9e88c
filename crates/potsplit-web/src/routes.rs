//! HTTP routing and handlers.
//!
//! Two paths carry the whole application:
//! - `GET /` and `GET /{token}` — decode the token (the empty path is the
//!   empty roster), render the page; when the totals balance, the
//!   settlement ledger is computed and shown inline.
//! - `POST /` — rebuild the roster from the form, encode it, and redirect
//!   to `/{token}` (303), so the address bar holds the saved state.
//!
//! Failures never take down a request: a bad token or a duplicate name
//! renders the page with an error banner and an otherwise blank slate.

use axum::Router;
use axum::extract::{Form, Path};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use potsplit_types::Roster;
use tracing::warn;

use crate::{form, render};

/// Build the application router.
#[must_use]
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(show_root).post(update))
        .route("/:token", get(show))
}

async fn show_root() -> Html<String> {
    Html(state_page(""))
}

async fn show(Path(token): Path<String>) -> Html<String> {
    Html(state_page(&token))
}

async fn update(Form(pairs): Form<Vec<(String, String)>>) -> Response {
    let token = form::roster_from_form(&pairs).and_then(|roster| potsplit_codec::encode(&roster));
    match token {
        Ok(token) => Redirect::to(&format!("/{token}")).into_response(),
        Err(err) => {
            warn!(%err, "form submission rejected");
            Html(render::page(&Roster::new(), None, Some(&err.to_string()))).into_response()
        }
    }
}

/// Render the page for one token: decode, and settle if balanced.
fn state_page(token: &str) -> String {
    let roster = match potsplit_codec::decode(token) {
        Ok(roster) => roster,
        Err(err) => {
            warn!(%err, "rejected roster token");
            let message = format!("could not interpret the provided state ({err})");
            return render::page(&Roster::new(), None, Some(&message));
        }
    };

    if !roster.is_balanced() {
        return render::page(&roster, None, None);
    }
    match potsplit_settlement::calculate_debts(&roster) {
        Ok(ledger) => render::page(&roster, Some(&ledger), None),
        Err(err) => render::page(&roster, None, Some(&err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use potsplit_types::Participant;

    use super::*;

    #[test]
    fn balanced_token_page_contains_ledger() {
        let roster: Roster = vec![
            Participant::new("alice", 500, 1000),
            Participant::new("bob", 500, 0),
        ]
        .into();
        let token = potsplit_codec::encode(&roster).unwrap();
        let html = state_page(&token);
        assert!(html.contains("bob pays 5.00 to alice"), "{html}");
    }

    #[test]
    fn imbalanced_token_page_omits_ledger() {
        let roster: Roster = vec![Participant::new("alice", 500, 700)].into();
        let token = potsplit_codec::encode(&roster).unwrap();
        let html = state_page(&token);
        assert!(!html.contains("Who pays whom"));
        assert!(html.contains("totals don&#39;t match") || html.contains("totals don't match"));
    }

    #[test]
    fn malformed_token_page_reports_decode_failure() {
        let html = state_page("@@not-a-token@@");
        assert!(html.contains("could not interpret the provided state"));
        assert!(html.contains("PS_ERR_200"));
    }

    #[test]
    fn empty_token_page_renders_blank_form() {
        let html = state_page("");
        assert!(html.contains("player0"));
        assert!(!html.contains("class=\"error\""));
    }
}
