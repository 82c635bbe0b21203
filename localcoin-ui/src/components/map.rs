//! ATM Map Component
//!
//! Embedded OpenStreetMap view for the selected ATM. The iframe is rebuilt
//! whenever the focused ATM changes, so each ATM starts from a fresh view at
//! the fixed zoom instead of inheriting the previous pan and zoom.

use leptos::*;
use localcoin::atm::{MapFocus, OSM_ATTRIBUTION, PLACEHOLDER_TEXT};

/// Map card body: placeholder or embedded map
#[component]
pub fn AtmMap(
    #[prop(into)]
    focus: Signal<MapFocus>,
) -> impl IntoView {
    // Only a change of focused ATM re-renders the widget
    let focus = create_memo(move |_| focus.get());

    move || match focus.get() {
        MapFocus::Placeholder => view! {
            <div class="flex items-center justify-center h-[400px] border-2 border-dashed border-gray-700 rounded-lg">
                <p class="text-gray-400">{PLACEHOLDER_TEXT}</p>
            </div>
        }
        .into_view(),
        MapFocus::Focused(map_view) => view! {
            <div class="rounded-lg overflow-hidden border border-gray-700 h-[400px] flex flex-col">
                <iframe
                    id=format!("atm-map-{}", map_view.key)
                    class="w-full flex-1"
                    src=map_view.embed_url()
                    loading="lazy"
                />
                <div class="text-xs text-gray-500 px-2 py-1 flex justify-between">
                    <span>{OSM_ATTRIBUTION}</span>
                    <a href=map_view.link_url() target="_blank" class="hover:text-white">
                        "View larger map"
                    </a>
                </div>
            </div>
        }
        .into_view(),
    }
}
