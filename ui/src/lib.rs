use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod logs;
mod storage;
mod view_model;

pub mod components;
pub mod contexts;
pub mod pages;
pub mod state;

use contexts::toast::ToastProvider;
use pages::{AnalyzerPage, NotFoundPage};

// Global API client - configurable via environment at build time
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .unwrap_or("http://localhost:8000")
        .to_string();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100">
                    <Switch<Route> render={switch} />
                    <components::ToastContainer />
                </div>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <AnalyzerPage />
            </main>
        },
        Route::NotFound => html! {
            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <NotFoundPage />
            </main>
        },
    }
}
