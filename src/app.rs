use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    *,
};

use crate::pages;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="stylesheet" href="/pkg/modal_overlay.css" />

                <title>"Modal Overlay"</title>
                <meta
                    name="description"
                    content="A dismissible modal overlay: renders content in a centered panel over a dimmed backdrop and asks the caller to close it when the user clicks outside or presses the close button."
                />

                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=pages::HomePage />
                    <Route path=path!("/test-modal") view=ModalTest />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ModalTest() -> impl IntoView {
    use crate::components::Modal;
    use leptos::logging::*;

    let (visible, set_visible) = signal(true);
    let (dismissals, set_dismissals) = signal(0);
    let on_dismiss = Callback::new(move |_: ()| {
        log!("dismiss requested");
        set_dismissals.update(|count| *count += 1);
        set_visible.set(false);
    });

    view! {
        <button class="button" on:click=move |_| set_visible.set(true)>"OPEN"</button>
        <p>"dismiss requests: " {dismissals}</p>
        <Modal visible on_dismiss>
            <h2>"Test modal"</h2>
            <p>"Click the backdrop to dismiss, or anywhere in this panel to stay."</p>
        </Modal>
    }
}
