//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="luxury-footer">
            <p class="luxury-footer-text">"© 2025 Luxury Storefront"</p>
        </footer>
    }
}
