use crate::table::TableSnapshot;
use leptos::*;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Standard sizes plus `current` when it is configured to something else.
pub fn page_size_options(current: usize) -> Vec<usize> {
    let mut options = PAGE_SIZE_OPTIONS.to_vec();
    if current > 0 && !options.contains(&current) {
        options.push(current);
        options.sort_unstable();
    }
    options
}

/// "Page X of Y", or just "Page X" until the total is known.
pub fn page_label<R>(snapshot: &TableSnapshot<R>) -> String {
    let current = snapshot.query.page_number();
    match snapshot.total_pages() {
        Some(total) if total > 0 => format!("Page {} of {}", current, total),
        _ => format!("Page {}", current),
    }
}

#[component]
pub fn Pagination<R>(
    snapshot: Signal<TableSnapshot<R>>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    on_page_size: Callback<usize>,
) -> impl IntoView
where
    R: Clone + 'static,
{
    let busy = move || snapshot.with(|s| s.state.is_loading());
    let page_size = create_memo(move |_| snapshot.with(|s| s.query.page_size));

    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 py-3">
            <label class="flex items-center gap-2 text-sm text-fg-muted">
                "Rows per page"
                <select
                    class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size.call(size);
                        }
                    }
                >
                    {move || {
                        page_size_options(page_size.get())
                            .into_iter()
                            .map(|size| view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size}
                                </option>
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <div class="flex items-center gap-3">
                <button
                    type="button"
                    class="rounded-md border border-border px-3 py-1 text-sm disabled:opacity-50"
                    disabled=move || busy() || !snapshot.with(|s| s.has_previous_page())
                    on:click=move |_| on_previous.call(())
                >
                    "Previous"
                </button>
                <span class="text-sm text-fg-muted">{move || snapshot.with(page_label)}</span>
                <button
                    type="button"
                    class="rounded-md border border-border px-3 py-1 text-sm disabled:opacity-50"
                    disabled=move || busy() || !snapshot.with(|s| s.has_next_page())
                    on:click=move |_| on_next.call(())
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::table::{PageResult, QueryState, ViewState};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn last_page_renders_label_and_controls() {
        let html = render_to_string(move || {
            let mut query = QueryState::new(10, "name");
            query.page_index = 2;
            let snapshot = Signal::derive(move || TableSnapshot {
                query: query.clone(),
                state: ViewState::Loaded(PageResult::new(vec![1u8], 3)),
            });
            view! {
                <Pagination
                    snapshot=snapshot
                    on_previous=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                    on_page_size=Callback::new(|_: usize| {})
                />
            }
        });
        assert!(html.contains("Page 3 of 3"));
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
        assert!(html.contains("Rows per page"));
    }

    #[test]
    fn odd_configured_page_size_is_selectable() {
        let html = render_to_string(move || {
            let snapshot = Signal::derive(move || TableSnapshot {
                query: QueryState::new(20, "name"),
                state: ViewState::Loaded(PageResult::new(vec![1u8], 1)),
            });
            view! {
                <Pagination
                    snapshot=snapshot
                    on_previous=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                    on_page_size=Callback::new(|_: usize| {})
                />
            }
        });
        assert!(html.contains("value=\"20\""));
        assert!(html.contains("value=\"100\""));
    }
}
