use maud::{html, Markup};

use crate::templates::desktop_layout;

fn heading(status: u16) -> &'static str {
    match status {
        404 => "Niet gevonden",
        400 => "Ongeldige invoer",
        429 => "Even geduld",
        _ => "Er ging iets mis",
    }
}

/// Full error page; `message` is already safe for the public.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Fout {status}"),
        html! {
            h1 class="error-title" { (heading(status)) }
            p class="error-code" { "Fout " (status) }
            p class="error-message" { (message) }
            p { a href="/" { "← Terug naar de kaart" } }
        },
    )
}
