use yew::{BaseComponent, ServerRenderer};

/// Renders `C` to an HTML string without hydration markers.
pub async fn render<C>(props: impl FnOnce() -> C::Properties + Send + 'static) -> String
where
    C: BaseComponent,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// Byte offset of `needle` in `html`, failing the test when absent.
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not rendered in {html}"))
}
