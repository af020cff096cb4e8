use crate::components::*;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let on_dismiss = Callback::new(move |_: ()| set_visible.set(false));

    view! {
        <div id="home-page">
            <button class="button" on:click=move |_| set_visible.set(true)>
                "OPEN MODAL"
            </button>
            <Modal visible on_dismiss>
                <h2>"Hello there"</h2>
                <p>"Click outside this panel or press the button below to close it."</p>
            </Modal>
        </div>
    }
}
