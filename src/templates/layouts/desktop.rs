use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="nl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | statiestatus.nl" }
                meta name="description" content="Werkt de statiegeldautomaat? Actuele meldingen van bezoekers.";
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { "statiestatus.nl" }
                    nav {
                        ul {
                            li { a href="/" { "Kaart" } }
                            li { a href="/stats" { "Statistieken" } }
                            li { a href="/machine/nieuw" { "Machine toevoegen" } }
                            li { a href="/contact" { "Contact" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer {
                    p { "Meldingen zijn anoniem. De status is een schatting op basis van recente meldingen." }
                }
            }
        }
    }
}
