// templates/pages/home.rs

use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped};

use crate::domain::LocationWithReports;
use crate::templates::{components::location_table, desktop_layout};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

// Markers come from /api/locations so the map and the JSON agree.
const MAP_SCRIPT: &str = r#"
(function () {
  var map = L.map('map').setView([52.2, 5.3], 7);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    attribution: '&copy; OpenStreetMap'
  }).addTo(map);
  var colors = { WORKING: '#16a34a', ISSUES: '#f59e0b', OUT_OF_ORDER: '#dc2626' };
  fetch('/api/locations').then(function (r) { return r.json(); }).then(function (data) {
    data.locations.forEach(function (l) {
      L.circleMarker([l.lat, l.lng], {
        radius: 8,
        color: colors[l.currentStatus] || '#6b7280'
      }).addTo(map).bindPopup('<a href="/machine/' + encodeURIComponent(l.id) + '"></a>')
        .on('popupopen', function (e) {
          e.popup.getElement().querySelector('a').textContent = l.name;
        });
    });
  });
})();
"#;

pub fn home_page(locations: &[LocationWithReports], now: DateTime<Utc>) -> Markup {
    desktop_layout(
        "Werkt de statiegeldautomaat?",
        html! {
            link rel="stylesheet" href=(LEAFLET_CSS);
            h1 { "Werkt de statiegeldautomaat?" }
            p class="lead" {
                "Bekijk per supermarkt of de automaat werkt en meld het als dat niet zo is."
            }

            div id="map" style="height: 420px;" {}

            h2 { "Alle machines" }
            @if locations.is_empty() {
                p { "Nog geen machines. " a href="/machine/nieuw" { "Voeg er een toe." } }
            } @else {
                (location_table(locations, now))
            }

            script src=(LEAFLET_JS) {}
            script { (PreEscaped(MAP_SCRIPT)) }
        },
    )
}
