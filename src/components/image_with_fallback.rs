//! Image With Fallback Component
//!
//! Lazy-loaded product image with a loading skeleton and a category
//! placeholder when the remote image fails.

use leptos::prelude::*;

use crate::assets::placeholder;
use crate::models::Category;

#[component]
pub fn ImageWithFallback(src: String, alt: String, category: Category) -> impl IntoView {
    let (errored, set_errored) = signal(false);
    let (loading, set_loading) = signal(true);
    let src = StoredValue::new(src);
    let fallback = placeholder(category);

    view! {
        <div class="luxury-card-image">
            <Show when=move || loading.get()>
                <div class="image-skeleton">"Loading..."</div>
            </Show>
            <img
                src=move || {
                    if errored.get() { fallback.to_string() } else { src.get_value() }
                }
                alt=alt
                loading="lazy"
                class=move || {
                    if loading.get() { "catalog-image catalog-image-hidden" } else { "catalog-image" }
                }
                on:error=move |_| {
                    set_errored.set(true);
                    set_loading.set(false);
                }
                on:load=move |_| set_loading.set(false)
            />
        </div>
    }
}
