//! ATM Locator Page
//!
//! Static ATM list with an online-only toggle; clicking a row focuses the map.

use leptos::*;
use localcoin::atm::{filter_atms, sample_atms, Atm, AtmSelection, MapFocus};
use localcoin::format::{pluralize_count, NO_ATMS_MESSAGE};

use crate::components::{AtmMap, StatusBadge};

/// ATM locator page component
#[component]
pub fn AtmLocator() -> impl IntoView {
    let atms = store_value(sample_atms());
    let (online_only, set_online_only) = create_signal(false);
    let selection = create_rw_signal(AtmSelection::default());

    let shown = create_memo(move |_| atms.with_value(|all| filter_atms(all, online_only.get())));
    let focus = Signal::derive(move || selection.with(AtmSelection::focus));

    let select = move |atm: Atm| selection.update(|s| {
        s.select(atm);
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"ATM Locator"</h1>
                <p class="text-gray-400 mt-1">"Find Localcoin ATMs near you"</p>
            </div>

            // Filter
            <section class="bg-gray-800 rounded-xl p-6 flex items-center justify-between">
                <div>
                    <h2 class="text-lg font-semibold">"Filter ATMs"</h2>
                    <p class="text-gray-400 text-sm">
                        {move || pluralize_count(shown.with(Vec::len), "ATM")}
                    </p>
                </div>
                <label class="flex items-center gap-3 cursor-pointer text-sm font-medium">
                    <input
                        type="checkbox"
                        prop:checked=move || online_only.get()
                        on:change=move |ev| set_online_only.set(event_target_checked(&ev))
                    />
                    "Show Online Only"
                </label>
            </section>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // ATM list
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold">"Available ATMs"</h2>
                    <p class="text-gray-400 text-sm mb-4">"Click on an ATM to view it on the map"</p>

                    <table class="w-full text-left">
                        <thead class="text-gray-400 text-sm border-b border-gray-700">
                            <tr>
                                <th class="py-2">"Location"</th>
                                <th class="py-2">"Status"</th>
                                <th class="py-2">"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let list = shown.get();
                                if list.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="3" class="text-center text-gray-400 py-8">
                                                {NO_ATMS_MESSAGE}
                                            </td>
                                        </tr>
                                    }.into_view()
                                } else {
                                    list.into_iter().map(|atm| {
                                        let id = atm.id;
                                        let row_atm = atm.clone();
                                        let button_atm = atm.clone();
                                        view! {
                                            <tr
                                                class=move || row_class(selection.with(|s| s.is_selected(id)))
                                                on:click=move |_| select(row_atm.clone())
                                            >
                                                <td class="py-3">
                                                    <span class="mr-2">"📍"</span>
                                                    <span class="font-medium">{atm.location.clone()}</span>
                                                </td>
                                                <td class="py-3"><StatusBadge status=atm.status /></td>
                                                <td class="py-3">
                                                    <button
                                                        class="px-3 py-1 rounded hover:bg-gray-600 text-sm"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            select(button_atm.clone());
                                                        }
                                                    >
                                                        "View Map"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()
                                }
                            }}
                        </tbody>
                    </table>
                </section>

                // Map preview
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold">"Map Preview"</h2>
                    <p class="text-gray-400 text-sm mb-4">{move || selection.with(AtmSelection::caption)}</p>

                    <AtmMap focus=focus />

                    {move || selection.with(|s| s.selected().cloned()).map(|atm| view! {
                        <SelectedDetails atm=atm focused=!focus.with(MapFocus::is_placeholder) />
                    })}
                </section>
            </div>
        </div>
    }
}

/// Details box under the map for the selected ATM
#[component]
fn SelectedDetails(atm: Atm, focused: bool) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-700 mt-4 rounded-lg">
            <p class="font-medium">"📍 " {atm.location.clone()}</p>
            <p class="text-sm text-gray-400 mt-1 flex items-center gap-2">
                "Status: " <StatusBadge status=atm.status />
            </p>
            {(!focused).then(|| view! {
                <p class="text-sm text-yellow-400 mt-2">"No coordinates available for this ATM"</p>
            })}
        </div>
    }
}

fn row_class(selected: bool) -> &'static str {
    if selected {
        "cursor-pointer border-b border-gray-700 last:border-0 bg-gray-700"
    } else {
        "cursor-pointer border-b border-gray-700 last:border-0 hover:bg-gray-750"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class_highlights_selection() {
        assert!(row_class(true).contains("bg-gray-700"));
        assert!(!row_class(false).contains(" bg-gray-700"));
    }
}
