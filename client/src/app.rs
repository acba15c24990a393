//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::parliament::ParliamentPage;
use crate::state::chat::ChatState;
use crate::state::files::FileQueue;
use crate::state::proposal::ProposalState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, starts the push-channel client in the
/// browser, and sets up routing (a single page; the route table exists so
/// unknown paths fall through to a proper 404 view).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());
    let files = RwSignal::new(FileQueue::default());
    let proposal = RwSignal::new(ProposalState::default());

    provide_context(session);
    provide_context(chat);
    provide_context(files);
    provide_context(proposal);

    #[cfg(feature = "hydrate")]
    crate::net::push_client::spawn_push_client(session, chat, proposal);

    view! {
        <Stylesheet id="leptos" href="/pkg/parliament.css"/>
        <Title text="Project Parliament"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ParliamentPage/>
            </Routes>
        </Router>
    }
}
