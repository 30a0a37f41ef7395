//! Catalog View Component
//!
//! One generic storefront page parametrized by category and accent theme:
//! fetch-on-mount, free-text search, sentinel-triggered incremental reveal,
//! and add-to-cart on every card.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_lazyreveal::use_incremental_reveal;
use wasm_bindgen::JsCast;

use crate::api;
use crate::cart::{CartStore, LocalStorageCart};
use crate::components::{CatalogCard, Footer};
use crate::models::{CatalogItem, Category};
use crate::search::filter_catalog;
use crate::toast::{push_error, push_success, use_toasts};

/// Accent styling and copy for one catalog page.
#[derive(Clone, Copy)]
pub struct CategoryTheme {
    pub accent_class: &'static str,
    pub price_class: &'static str,
    pub button_class: &'static str,
    pub spinner_class: &'static str,
    pub title_accent: &'static str,
    pub title_rest: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    /// Plural noun used in empty-state and end-of-list messages
    pub noun: &'static str,
}

fn theme_for(category: Category) -> CategoryTheme {
    match category {
        Category::Food => CategoryTheme {
            accent_class: "luxury-header-accent-amber",
            price_class: "luxury-price-amber",
            button_class: "luxury-button-amber",
            spinner_class: "reveal-spinner-amber",
            title_accent: "Savory",
            title_rest: "Dishes",
            subtitle: "Discover the signature dishes in our shop",
            search_placeholder: "Search dishes...",
            noun: "dishes",
        },
        Category::Drink => CategoryTheme {
            accent_class: "luxury-header-accent-blue",
            price_class: "luxury-price-blue",
            button_class: "luxury-button-blue",
            spinner_class: "reveal-spinner-blue",
            title_accent: "Refreshing",
            title_rest: "Drinks",
            subtitle: "Discover the refreshing drinks in our shop",
            search_placeholder: "Search drinks...",
            noun: "drinks",
        },
        Category::Dessert => CategoryTheme {
            accent_class: "luxury-header-accent-pink",
            price_class: "luxury-price-pink",
            button_class: "luxury-button-pink",
            spinner_class: "reveal-spinner-pink",
            title_accent: "Sweet",
            title_rest: "Desserts",
            subtitle: "Discover the sweet desserts in our shop",
            search_placeholder: "Search desserts...",
            noun: "desserts",
        },
    }
}

#[component]
pub fn CatalogView(category: Category) -> impl IntoView {
    let theme = theme_for(category);
    let (items, set_items) = signal(Vec::<CatalogItem>::new());
    let (search, set_search) = signal(String::new());
    let toasts = use_toasts();

    // One fetch per mount. A failure leaves the list empty; no retry.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_catalog(category).await {
                Ok(loaded) => set_items.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("catalog fetch failed ({category}): {err}").into(),
                    );
                    push_error(&toasts, format!("Could not load the {} list.", theme.noun));
                }
            }
        });
    });

    let filtered = Memo::new(move |_| filter_catalog(&items.get(), &search.get()));
    let filtered_len = Memo::new(move |_| filtered.get().len());
    let reveal = use_incremental_reveal(filtered_len.into());

    let cart = CartStore::new(LocalStorageCart);
    let on_add = Callback::new(move |item: CatalogItem| {
        cart.add_item(&item);
        push_success(&toasts, format!("Added \"{}\" to the cart!", item.name));
    });

    view! {
        <div class="luxury-container">
            <div class="catalog-page">
                <div class="catalog-header">
                    <div class="catalog-heading">
                        <h1 class="luxury-header">
                            <span class=theme.accent_class>{theme.title_accent}</span>
                            {format!(" {}", theme.title_rest)}
                        </h1>
                        <p class="luxury-subtitle">{theme.subtitle}</p>
                    </div>

                    <div class="luxury-search-wrapper">
                        <input
                            type="text"
                            class="luxury-search"
                            placeholder=theme.search_placeholder
                            prop:value=move || search.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_search.set(input.value());
                            }
                        />
                    </div>
                </div>

                <Show
                    when=move || { filtered_len.get() > 0 }
                    fallback=move || {
                        view! {
                            <div class="luxury-not-found">
                                <p class="luxury-not-found-text">
                                    {move || format!("No {} match \"{}\"", theme.noun, search.get())}
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="luxury-grid">
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .take(reveal.window())
                                .map(|item| {
                                    view! { <CatalogCard item=item theme=theme on_add=on_add /> }
                                })
                                .collect_view()
                        }}
                    </div>

                    <div class="reveal-sentinel" node_ref=reveal.sentinel>
                        <Show when=move || reveal.loading()>
                            <div class="reveal-spinner-wrapper">
                                <div class=format!("reveal-spinner {}", theme.spinner_class)></div>
                            </div>
                        </Show>
                        <Show when=move || reveal.all_loaded()>
                            <div class="luxury-end-results">
                                <p class="luxury-end-results-text">
                                    {format!("You have seen all the {}", theme.noun)}
                                </p>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>

            <Footer />
        </div>
    }
}
