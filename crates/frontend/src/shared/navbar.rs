use leptos::prelude::*;
use thaw::*;

use crate::system::auth::context::{do_logout, use_auth};

/// Top bar shown on every authenticated page. Logout flips the auth signal;
/// the route layer handles the redirect and clears the product store.
#[component]
pub fn Navbar() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    view! {
        <header style="display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #1f2937; color: #fff;">
            <a href="/">
                <span style="font-size: 18px; font-weight: bold; color: #fff;">"Catalog Admin"</span>
            </a>
            <Space>
                <a href="/products/new">
                    <Button appearance=ButtonAppearance::Primary>"New Product"</Button>
                </a>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| do_logout(set_auth_state)
                >
                    "Logout"
                </Button>
            </Space>
        </header>
    }
}
