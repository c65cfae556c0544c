use chrono::{Datelike, Local};
use yew::prelude::*;

fn copyright(year: i32) -> String {
    format!("\u{a9} {year} Taskit Inc. All rights reserved.")
}

/// Copyright line; the year is read from the local clock on every render.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer>
            <p class="copyright">{copyright(year)}</p>
        </footer>
    }
}
