mod app;
mod components;

#[cfg(test)]
mod testing;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        // the console only exists in the browser; native builds (tests) discard
        if cfg!(target_arch = "wasm32") {
            web_sys::console::log_1(&format!( $( $t )* ).into());
        }
    }
}
