use contracts::domain::product::validate::{validate, FormErrors, DESCRIPTION_MAX, NAME_MAX};
use contracts::domain::product::{merge_tags, Product, ProductDraft, ProductId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::domain::product::store::{awaiting_record, use_product_store};
use crate::shared::ai::{suggest_tags, SuggestError};

const FIELD_STYLE: &str =
    "width: 100%; padding: 8px 10px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 4px; font-weight: 600;";
const INLINE_ERROR_STYLE: &str = "color: #c0392b; font-size: 13px; margin-top: 4px;";

/// Create and edit form. `/products/new` has no `:id` param; `/products/edit/:id`
/// prefills from the in-memory list once it is loaded.
#[component]
#[allow(non_snake_case)]
pub fn ProductFormPage() -> impl IntoView {
    let store = use_product_store();
    let navigate = use_navigate();
    let params = use_params_map();

    // Edit mode is decided by the route (`:id` present), not by whether the
    // id parses: a mangled id must show "not found", not an empty create form.
    let has_id_param = Memo::new(move |_| params.get().get("id").is_some());
    let product_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| ProductId::parse(&raw).ok())
    });
    let is_edit_mode = move || has_id_param.get();

    let existing = Memo::new(move |_| {
        product_id.get().and_then(|id| {
            store
                .products
                .get()
                .into_iter()
                .find(|p: &Product| p.id == id)
        })
    });

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price_input, set_price_input) = signal(String::new());
    let (tags, set_tags) = signal(Vec::<String>::new());
    let (tag_input, set_tag_input) = signal(String::new());

    let errors = RwSignal::new(FormErrors::default());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);
    let (is_suggesting, set_is_suggesting) = signal(false);

    // Prefill once when the record shows up in the store (it may arrive
    // after this page when the URL is opened directly).
    let (prefilled, set_prefilled) = signal(false);
    Effect::new(move |_| {
        if prefilled.get() {
            return;
        }
        if let Some(product) = existing.get() {
            let draft = product.draft();
            set_name.set(draft.name);
            set_description.set(draft.description);
            set_price_input.set(format!("{}", draft.price));
            set_tags.set(draft.tags);
            set_prefilled.set(true);
        }
    });

    let current_draft = move || ProductDraft {
        name: name.get(),
        description: description.get(),
        tags: tags.get(),
        price: price_input.get().trim().parse::<f64>().unwrap_or(f64::NAN),
    };

    let add_tag = move || {
        let tag = tag_input.get().trim().to_string();
        if tag.is_empty() {
            return;
        }
        set_tags.update(|tags| {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        });
        set_tag_input.set(String::new());
    };

    let remove_tag = move |tag: String| {
        set_tags.update(|tags| tags.retain(|t| t != &tag));
    };

    let handle_suggest = move || {
        let name_val = name.get();
        let description_val = description.get();

        // Both fields feed the prompt; complain inline when either is empty
        if name_val.trim().is_empty() || description_val.trim().is_empty() {
            errors.update(|e| {
                if name_val.trim().is_empty() {
                    e.name = Some("Name is needed for suggestions.".into());
                }
                if description_val.trim().is_empty() {
                    e.description = Some("Description is needed for suggestions.".into());
                }
            });
            return;
        }

        set_is_suggesting.set(true);
        set_form_error.set(None);

        spawn_local(async move {
            match suggest_tags(&name_val, &description_val).await {
                Ok(suggested) => {
                    set_tags.update(|tags| *tags = merge_tags(tags, &suggested));
                }
                Err(e) => {
                    if let SuggestError::Request(detail) = &e {
                        log::error!("tag suggestion failed: {}", detail);
                    }
                    set_form_error.set(Some(format!("Failed to suggest tags: {}", e)));
                }
            }
            set_is_suggesting.set(false);
        });
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_form_error.set(None);

            let draft = current_draft();
            match validate(&draft) {
                Ok(()) => errors.set(FormErrors::default()),
                Err(e) => {
                    errors.set(e);
                    return;
                }
            }

            set_is_saving.set(true);
            let navigate = navigate.clone();
            let id = product_id.get();

            spawn_local(async move {
                let result = match id {
                    Some(id) => store.update(id, draft).await,
                    None => store.create(draft).await,
                };
                match result {
                    Ok(()) => {
                        navigate(
                            "/",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => {
                        set_form_error.set(Some(format!("Submission failed: {}", e)));
                    }
                }
                set_is_saving.set(false);
            });
        }
    };

    // `Copy` wrappers so the nested `Show` children closures stay `Fn`
    let on_submit = StoredValue::new(on_submit);
    let cancel = StoredValue::new({
        let navigate = navigate.clone();
        move |_| navigate("/", NavigateOptions::default())
    });

    // Edit mode with a missing record: either the initial fetch has not
    // landed yet (direct URL open races it) or the record is gone.
    let waiting_for_record = move || {
        is_edit_mode()
            && awaiting_record(
                existing.get().is_some(),
                store.loading.get(),
                store.loaded.get(),
            )
    };
    let not_found = move || is_edit_mode() && existing.get().is_none() && !waiting_for_record();

    view! {
        <div style="max-width: 640px; margin: 0 auto;">
            <Show when=move || !not_found() fallback=|| view! {
                <div style="padding: 32px; text-align: center; color: #c0392b;">
                    "Product not found."
                </div>
            }>
                <Show when=move || !waiting_for_record() fallback=|| view! {
                    <div style="padding: 32px; text-align: center; color: #888;">
                        "Loading product..."
                    </div>
                }>
                    <h1 style="font-size: 24px; font-weight: bold; margin-bottom: 16px;">
                        {move || if is_edit_mode() { "Edit Product" } else { "Create New Product" }}
                    </h1>

                    <Show when=move || form_error.get().is_some()>
                        <div class="error-message">
                            {move || form_error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=move |ev| on_submit.with_value(|f| f(ev))>
                        <div style="margin-bottom: 16px;">
                            <label for="name" style=LABEL_STYLE>"Product Name"</label>
                            <input
                                type="text"
                                id="name"
                                style=FIELD_STYLE
                                maxlength=NAME_MAX.to_string()
                                value=move || name.get()
                                on:input=move |ev| {
                                    set_name.set(event_target_value(&ev));
                                    errors.update(|e| e.name = None);
                                }
                            />
                            {move || errors.get().name.map(|e| view! {
                                <div style=INLINE_ERROR_STYLE>{e}</div>
                            })}
                        </div>

                        <div style="margin-bottom: 16px;">
                            <label for="description" style=LABEL_STYLE>"Product Description"</label>
                            <textarea
                                id="description"
                                rows="5"
                                style=FIELD_STYLE
                                maxlength=DESCRIPTION_MAX.to_string()
                                prop:value=move || description.get()
                                on:input=move |ev| {
                                    set_description.set(event_target_value(&ev));
                                    errors.update(|e| e.description = None);
                                }
                            ></textarea>
                            {move || errors.get().description.map(|e| view! {
                                <div style=INLINE_ERROR_STYLE>{e}</div>
                            })}
                        </div>

                        <div style="margin-bottom: 16px;">
                            <label for="price" style=LABEL_STYLE>"Price"</label>
                            <input
                                type="number"
                                id="price"
                                min="0.01"
                                step="0.01"
                                style=FIELD_STYLE
                                value=move || price_input.get()
                                on:input=move |ev| {
                                    set_price_input.set(event_target_value(&ev));
                                    errors.update(|e| e.price = None);
                                }
                            />
                            {move || errors.get().price.map(|e| view! {
                                <div style=INLINE_ERROR_STYLE>{e}</div>
                            })}
                        </div>

                        <div style="margin-bottom: 16px;">
                            <label for="tags" style=LABEL_STYLE>"Tags"</label>
                            <div style="display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 8px;">
                                {move || tags.get().into_iter().map(|tag| {
                                    let tag_for_remove = tag.clone();
                                    view! {
                                        <span style="display: inline-flex; align-items: center; gap: 4px; padding: 2px 8px; background: #eef2f7; border-radius: 10px; font-size: 13px;">
                                            {tag.clone()}
                                            <button
                                                type="button"
                                                style="border: none; background: none; cursor: pointer; color: #888;"
                                                on:click=move |_| remove_tag(tag_for_remove.clone())
                                            >
                                                "×"
                                            </button>
                                        </span>
                                    }
                                }).collect_view()}
                            </div>
                            <input
                                type="text"
                                id="tags"
                                placeholder="Type a tag and press Enter"
                                style=FIELD_STYLE
                                value=move || tag_input.get()
                                on:input=move |ev| set_tag_input.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_tag();
                                    }
                                }
                            />
                            <div style="margin-top: 8px;">
                                <button
                                    type="button"
                                    class="btn-ghost"
                                    disabled=move || is_suggesting.get()
                                    on:click=move |_| handle_suggest()
                                >
                                    {move || if is_suggesting.get() {
                                        "Suggesting..."
                                    } else {
                                        "Auto-Suggest Tags (AI)"
                                    }}
                                </button>
                            </div>
                        </div>

                        <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 24px; border-top: 1px solid #eee; padding-top: 16px;">
                            <button
                                type="button"
                                class="btn-secondary"
                                on:click=move |ev| cancel.with_value(|f| f(ev))
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn-primary"
                                disabled=move || is_saving.get()
                            >
                                {move || match (is_saving.get(), is_edit_mode()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Save Changes",
                                    (false, false) => "Create Product",
                                }}
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
        </div>
    }
}
