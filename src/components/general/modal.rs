use gloo::events::EventListener;
use leptos::{html, logging::error, prelude::*};
use wasm_bindgen::JsCast;

/// Full-screen overlay with a centered content panel and a close button.
///
/// `visible` is owned by the caller: the component never flips it, it only
/// runs `on_dismiss` when the user clicks outside the content panel or
/// activates the close button. While visible it listens for `mousedown` on
/// the whole document and decides inside/outside by DOM containment against
/// the content panel, so clicks on nested children of the content count as
/// inside. When `visible` is false nothing is rendered and no listener is
/// registered.
#[component]
pub fn Modal(
    #[prop(into)] visible: Signal<bool>,
    on_dismiss: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let content_ref: NodeRef<html::Div> = NodeRef::new();

    // The listener handle is the effect's value: every rerun drops the old
    // registration before creating a new one, and effect disposal drops the
    // last one, so at most one listener exists no matter how fast `visible`
    // toggles.
    Effect::new(move |previous: Option<Option<EventListener>>| {
        drop(previous);
        if !visible.get() {
            return None;
        }
        let document = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document,
            None => {
                error!("document not available, outside clicks will not dismiss");
                return None;
            }
        };
        Some(EventListener::new(&document, "mousedown", move |event| {
            // Content panel not mounted: nothing to test containment
            // against, so leave the modal alone.
            let Some(content) = content_ref.get_untracked() else {
                return;
            };
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            if !content.contains(target.as_ref()) {
                on_dismiss.run(());
            }
        }))
    });

    view! {
        <Show when=move || visible.get()>
            <div class="modal-overlay">
                <div class="modal-content" node_ref=content_ref>
                    {children()}
                    <button class="close-button" on:click=move |_| on_dismiss.run(())>
                        "CLOSE"
                    </button>
                </div>
            </div>
        </Show>
    }
}
