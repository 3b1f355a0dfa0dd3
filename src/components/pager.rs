//! Previous/next pager shared by paginated lists.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;

/// Number of pages needed for `total` items; never less than one.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX).max(1)
}

/// Items shown on 1-based `page` when the whole list is already loaded.
pub fn page_slice<T: Clone>(items: &[T], page: u32, page_size: u32) -> Vec<T> {
    let size = usize::try_from(page_size.max(1)).unwrap_or(usize::MAX);
    let index = usize::try_from(page.max(1) - 1).unwrap_or(usize::MAX);
    items
        .chunks(size)
        .nth(index)
        .map(<[T]>::to_vec)
        .unwrap_or_default()
}

#[component]
pub fn Pager(page: RwSignal<u32>, #[prop(into)] pages: Signal<u32>) -> impl IntoView {
    view! {
        <nav class="pager">
            <button
                class="pager__button"
                type="button"
                disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__label">{move || format!("Page {} of {}", page.get(), pages.get())}</span>
            <button
                class="pager__button"
                type="button"
                disabled=move || page.get() >= pages.get()
                on:click=move |_| page.update(|p| *p = p.saturating_add(1))
            >
                "Next"
            </button>
        </nav>
    }
}
