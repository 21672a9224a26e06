use dioxus::prelude::*;

use crate::domain::entities::table::Column;

/// Dropdown shown under a column header. With no `options` it is a search
/// box: typing edits the draft term, Enter or the search button submits it.
/// With `options` each value is a button that searches for it directly.
#[component]
pub fn ColumnFilter(
    column: Column,
    value: String,
    options: Vec<String>,
    on_input: EventHandler<String>,
    on_search: EventHandler<Column>,
    on_clear: EventHandler<()>,
) -> Element {
    let placeholder = format!("Search {}", column.label());

    rsx! {
        div {
            style: "position: absolute; top: 100%; left: 0; padding: 8px; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; display: flex; gap: 6px;",
            onclick: move |event| event.stop_propagation(),
            if options.is_empty() {
                input {
                    placeholder: "{placeholder}",
                    value: "{value}",
                    autofocus: true,
                    oninput: move |event| on_input.call(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            on_search.call(column);
                        }
                    },
                }
                button {
                    onclick: move |_| on_search.call(column),
                    "Search"
                }
            } else {
                div {
                    style: "display: flex; flex-direction: column; gap: 4px; max-height: 240px; overflow-y: auto;",
                    {options.iter().map(|option| {
                        let weight = if *option == value { "bold" } else { "normal" };
                        let picked = option.clone();
                        rsx!(
                            button {
                                key: "{option}",
                                style: "text-align: left; font-weight: {weight};",
                                onclick: move |_| {
                                    on_input.call(picked.clone());
                                    on_search.call(column);
                                },
                                "{option}"
                            }
                        )
                    })}
                }
            }
            button {
                onclick: move |_| on_clear.call(()),
                "Clear Filters"
            }
        }
    }
}
