//! Catalog Card Component
//!
//! One product card: image, name, description, price, add-to-cart button.
//! Clicking the card navigates to the item's detail route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::{CategoryTheme, ImageWithFallback};
use crate::config::upload_url;
use crate::models::{format_price, CatalogItem};

#[component]
pub fn CatalogCard(
    item: CatalogItem,
    theme: CategoryTheme,
    #[prop(into)] on_add: Callback<CatalogItem>,
) -> impl IntoView {
    let navigate = use_navigate();
    let detail_route = format!("/{}/{}", item.category.route_segment(), item.id);
    let image_src = upload_url(&item.image);
    let price_label = format!("{} VNĐ", format_price(item.price));
    let name = item.name.clone();
    let description = item.description.clone();
    let alt = item.name.clone();
    let category = item.category;

    view! {
        <div
            class="luxury-card"
            on:click=move |_| navigate(&detail_route, NavigateOptions::default())
        >
            <ImageWithFallback src=image_src alt=alt category=category />
            <div class="luxury-card-content">
                <h2 class="luxury-product-name">{name}</h2>
                <p class="luxury-product-desc">{description}</p>
                <div class="luxury-card-footer">
                    <p class=theme.price_class>{price_label}</p>
                    <button
                        class=theme.button_class
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_add.run(item.clone());
                        }
                    >
                        "+"
                    </button>
                </div>
            </div>
        </div>
    }
}
