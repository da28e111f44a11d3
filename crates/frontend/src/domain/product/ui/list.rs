use contracts::domain::product::ProductId;
use leptos::prelude::*;
use thaw::*;

use crate::domain::product::store::use_product_store;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_price;

#[component]
#[allow(non_snake_case)]
pub fn ProductListPage() -> impl IntoView {
    let store = use_product_store();
    let (search, set_search) = signal(String::new());

    // Case-insensitive substring filter over name and tags
    let filtered = Memo::new(move |_| {
        let term = search.get().trim().to_lowercase();
        let products = store.products.get();
        if term.is_empty() {
            return products;
        }
        products
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&term))
            })
            .collect()
    });

    let handle_delete = move |id: ProductId, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Delete \"{}\"? This cannot be undone.",
                    name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            // Failure surfaces through the store's banner; the row stays.
            let _ = store.remove(id).await;
        });
    };

    view! {
        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
            <h1 style="font-size: 24px; font-weight: bold;">"Products"</h1>
            <Space>
                <input
                    type="text"
                    placeholder="Search by name or tag..."
                    style="padding: 6px 10px; border: 1px solid #ccc; border-radius: 6px; min-width: 220px;"
                    value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| store.fetch()
                >
                    "Refresh"
                </Button>
            </Space>
        </Flex>

        <div style="margin-top: 16px;">
            <Show
                when=move || !store.loading.get()
                fallback=|| view! {
                    <div style="padding: 32px; text-align: center; color: #888;">
                        "Loading products..."
                    </div>
                }
            >
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || view! {
                        <div style="padding: 32px; text-align: center; color: #888;">
                            {move || if search.get().trim().is_empty() {
                                "No products yet. Create the first one."
                            } else {
                                "No products match the search."
                            }}
                        </div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=200.0>"Tags"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Updated"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || filtered.get().into_iter().map(|product| {
                                let id = product.id;
                                let name_for_delete = product.name.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href=format!("/products/edit/{}", id)>
                                                    {product.name.clone()}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_price(product.price)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {product.tags.join(", ")}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_datetime(&product.updated_at)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_delete(id, name_for_delete.clone())
                                                >
                                                    "Delete"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Show>
            </Show>
        </div>
    }
}
