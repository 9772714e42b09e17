// templates/pages/forms.rs

use maud::{html, Markup};

use crate::templates::desktop_layout;

pub fn add_machine_page() -> Markup {
    desktop_layout(
        "Machine toevoegen",
        html! {
            h1 { "Machine toevoegen" }
            p { "Mist er een statiegeldautomaat? Laat het ons weten, dan zetten we hem op de kaart." }

            form method="post" action="/machine/nieuw" class="stacked" {
                label for="name" { "Naam locatie" }
                input type="text" id="name" name="name" required;

                label for="retailer" { "Winkelketen" }
                input type="text" id="retailer" name="retailer" required;

                label for="address" { "Adres" }
                input type="text" id="address" name="address" required;

                label for="city" { "Plaats" }
                input type="text" id="city" name="city" required;

                label for="note" { "Extra info (optioneel)" }
                textarea id="note" name="note" maxlength="280" rows="3" {}

                button type="submit" class="primary" { "Versturen" }
            }
        },
    )
}

pub fn contact_page() -> Markup {
    desktop_layout(
        "Contact",
        html! {
            h1 { "Contact" }
            form method="post" action="/contact" class="stacked" {
                label for="name" { "Naam" }
                input type="text" id="name" name="name" required;

                label for="email" { "E-mail" }
                input type="email" id="email" name="email" autocomplete="email" required;

                label for="message" { "Bericht" }
                textarea id="message" name="message" rows="5" required {}

                button type="submit" class="primary" { "Versturen" }
            }
        },
    )
}

pub fn thanks_page(message: &str) -> Markup {
    desktop_layout(
        "Bedankt",
        html! {
            h1 { "Bedankt!" }
            p class="thanks" { (message) }
            p { a href="/" { "Terug naar de kaart" } }
        },
    )
}
