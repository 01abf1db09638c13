//! PageFrame: standard root wrapper for every view.
//!
//! Sets `id="{page key}--page"` and `data-page` on the root element so each
//! view is easy to locate in the DOM.

use crate::layout::Page;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    page: Page,
    /// Narrow layout for form views
    #[prop(optional)]
    narrow: bool,
    children: Children,
) -> impl IntoView {
    let class = if narrow { "page page--narrow" } else { "page" };

    view! {
        <div id=format!("{}--page", page.key()) class=class data-page=page.key()>
            {children()}
        </div>
    }
}
