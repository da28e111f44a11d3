use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Gate for every route except the login form: anonymous visitors are
/// redirected to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// The login route itself: an already-authenticated session goes straight
/// to the product list.
#[component]
pub fn RedirectIfAuthed(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
