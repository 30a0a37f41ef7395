//! Storefront App
//!
//! Router shell over the per-category catalog pages, with the global
//! toast layer provided at the root.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::components::CatalogView;
use crate::models::Category;
use crate::toast::{provide_toasts, Toaster};

#[component]
pub fn App() -> impl IntoView {
    provide_toasts();

    view! {
        <Router>
            <nav class="luxury-nav">
                <span class="luxury-nav-brand">"Luxury Storefront"</span>
                <A href="/foods">"Dishes"</A>
                <A href="/drinks">"Drinks"</A>
                <A href="/desserts">"Desserts"</A>
            </nav>

            <Toaster />

            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <CatalogView category=Category::Food /> }
                    />
                    <Route
                        path=path!("/foods")
                        view=|| view! { <CatalogView category=Category::Food /> }
                    />
                    <Route
                        path=path!("/drinks")
                        view=|| view! { <CatalogView category=Category::Drink /> }
                    />
                    <Route
                        path=path!("/desserts")
                        view=|| view! { <CatalogView category=Category::Dessert /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="luxury-not-found">
            <p class="luxury-not-found-text">"Page not found"</p>
        </div>
    }
}
