use dioxus::prelude::*;

const WINDOW: usize = 7;

/// Page numbers to show as buttons: at most `width` pages centred on `current`.
pub fn page_window(current: usize, pages: usize, width: usize) -> Vec<usize> {
    if pages == 0 || width == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, pages);
    let width = width.min(pages);
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(pages + 1 - width);
    (start..start + width).collect()
}

#[component]
pub fn Pagination(
    current_page: usize,
    page_count: usize,
    total_items: usize,
    page_size: usize,
    disabled: bool,
    on_page_change: EventHandler<usize>,
) -> Element {
    let pages = page_count;
    let window = page_window(current_page, pages, WINDOW);
    let can_prev = !disabled && current_page > 1;
    let can_next = !disabled && current_page < pages;

    rsx! {
        div {
            style: "display: flex; gap: 6px; align-items: center; margin-top: 12px;",
            button {
                disabled: !can_prev,
                onclick: move |_| on_page_change.call(current_page.saturating_sub(1).max(1)),
                "‹"
            }
            {window.into_iter().map(|page| {
                let border = if page == current_page { "#1677ff" } else { "#d9d9d9" };
                let color = if page == current_page { "#1677ff" } else { "inherit" };
                rsx!(
                    button {
                        key: "{page}",
                        disabled: disabled,
                        style: "border: 1px solid {border}; color: {color}; background: #fff; padding: 2px 8px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| on_page_change.call(page),
                        "{page}"
                    }
                )
            })}
            button {
                disabled: !can_next,
                onclick: move |_| on_page_change.call(current_page + 1),
                "›"
            }
            span { style: "color: #666; margin-left: 8px;", "{total_items} items, {page_size} / page" }
        }
    }
}
