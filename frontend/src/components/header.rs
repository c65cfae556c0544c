use yew::prelude::*;

// the menu toggle has no handler; there is no menu to open
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header>
            <div class="header-bar">
                <div class="app-name">{"Task Manager"}</div>
                <button class="menu-toggle" aria-label="Toggle Menu">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="menu-icon"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M4 6h16M4 12h16m-7 6h7"
                        />
                    </svg>
                </button>
            </div>
        </header>
    }
}
