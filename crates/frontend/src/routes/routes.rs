use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::product::store::use_product_store;
use crate::domain::product::ui::form::ProductFormPage;
use crate::domain::product::ui::list::ProductListPage;
use crate::shared::navbar::Navbar;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::{RedirectIfAuthed, RequireAuth};
use crate::system::pages::login::LoginPage;

/// Navbar + error banner around every authenticated page.
#[component]
fn Shell(children: ChildrenFn) -> impl IntoView {
    let store = use_product_store();

    view! {
        <div class="app-shell">
            <Navbar />
            <main style="padding: 16px 24px; max-width: 1100px; margin: 0 auto;">
                {move || store.error.get().map(|e| view! {
                    <div style="padding: 12px; margin-bottom: 16px; background: #fde8e8; border: 1px solid #f5b5b5; border-radius: 8px; display: flex; align-items: center; gap: 8px;">
                        <span style="color: #c0392b; font-size: 18px;">"⚠"</span>
                        <span style="color: #c0392b;">{e}</span>
                    </div>
                })}
                {children()}
            </main>
        </div>
    }
}

/// Unknown paths land wherever the session allows.
#[component]
fn CatchAll() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <Redirect path="/" />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let store = use_product_store();

    // Entering Authenticated pulls the catalog into memory; leaving drops
    // the in-memory copy. Persisted data is untouched by logout.
    Effect::new(move |_| {
        if auth_state.get().is_authenticated() {
            store.fetch();
        } else {
            store.clear();
        }
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <CatchAll /> }>
                <Route
                    path=path!("/login")
                    view=|| view! {
                        <RedirectIfAuthed>
                            <LoginPage />
                        </RedirectIfAuthed>
                    }
                />
                <Route
                    path=path!("/")
                    view=|| view! {
                        <RequireAuth>
                            <Shell>
                                <ProductListPage />
                            </Shell>
                        </RequireAuth>
                    }
                />
                <Route
                    path=path!("/products/new")
                    view=|| view! {
                        <RequireAuth>
                            <Shell>
                                <ProductFormPage />
                            </Shell>
                        </RequireAuth>
                    }
                />
                <Route
                    path=path!("/products/edit/:id")
                    view=|| view! {
                        <RequireAuth>
                            <Shell>
                                <ProductFormPage />
                            </Shell>
                        </RequireAuth>
                    }
                />
            </Routes>
        </Router>
    }
}
