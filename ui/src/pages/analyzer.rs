use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gloo_timers::future::sleep;
use payloads::{AnalysisResult, SelectedFile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{AnalysisResultView, FileUpload};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::state::State;
use crate::storage;
use crate::view_model::is_ai_available;

/// Seconds the AI-only retry stays disabled after each attempt, so a
/// rate-limited provider is not hammered.
const RETRY_COOLDOWN_SECS: u8 = 15;

#[function_component]
pub fn AnalyzerPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let cooldown = use_state(|| 0u8);
    // Cancellation handle for the running cooldown ticker; at most one
    // ticker may run at a time.
    let cooldown_cancel = use_mut_ref(|| None::<Rc<AtomicBool>>);

    // Restore the persisted last-good result before any request is made
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = storage::load_last_result() {
                tracing::debug!("restored last result from local storage");
                dispatch.reduce_mut(|s| s.restore(saved));
            }
            || ()
        });
    }

    // Cancel a running ticker when the page is torn down
    {
        let cooldown_cancel = cooldown_cancel.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(flag) = cooldown_cancel.borrow_mut().take() {
                    flag.store(true, Ordering::Relaxed);
                }
            }
        });
    }

    let on_file_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |file: Option<SelectedFile>| {
            match file {
                Some(file) => dispatch.reduce_mut(|s| s.select_file(file)),
                None => dispatch.reduce_mut(|s| s.clear_selection()),
            };
        })
    };

    // Shared submission path for "Analisar Agora" and the AI-only retry.
    let run_analysis = {
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |force_ai: bool| {
            let current = dispatch.get();
            let Some(file) = current.selected.clone() else {
                toast.warning("Por favor, selecione um arquivo primeiro.");
                return;
            };
            if current.is_request_in_flight() {
                return;
            }

            dispatch.reduce_mut(|s| {
                if force_ai {
                    s.begin_ai_retry();
                } else {
                    s.begin_submit();
                }
            });
            tracing::info!(force_ai, "submitting {} for analysis", file.name);

            let dispatch = dispatch.clone();
            spawn_local(async move {
                let api_client = get_api_client();
                let record = match api_client.analyze(&file, force_ai).await {
                    Ok(result) => result,
                    Err(err) => {
                        tracing::warn!("analysis request failed: {err}");
                        AnalysisResult::error(format!("Erro na Análise: {err}"))
                    }
                };

                // Error records are never persisted
                storage::store_last_result(&record);
                dispatch.reduce_mut(move |s| s.finish_request(record));
            });
        })
    };

    let start_cooldown = {
        let cooldown = cooldown.clone();
        let cooldown_cancel = cooldown_cancel.clone();

        Callback::from(move |_: ()| {
            // Starting a new countdown supersedes any running one
            if let Some(prev) = cooldown_cancel.borrow_mut().take() {
                prev.store(true, Ordering::Relaxed);
            }
            let cancelled = Rc::new(AtomicBool::new(false));
            *cooldown_cancel.borrow_mut() = Some(cancelled.clone());

            cooldown.set(RETRY_COOLDOWN_SECS);
            let cooldown = cooldown.clone();

            spawn_local(async move {
                let mut remaining = RETRY_COOLDOWN_SECS;
                while remaining > 0 {
                    sleep(Duration::from_secs(1)).await;
                    if cancelled.load(Ordering::Relaxed) {
                        return;
                    }
                    remaining -= 1;
                    cooldown.set(remaining);
                }
            });
        })
    };

    let on_submit = {
        let run_analysis = run_analysis.clone();
        Callback::from(move |_: MouseEvent| run_analysis.emit(false))
    };

    let on_retry_ai = {
        let run_analysis = run_analysis.clone();
        let start_cooldown = start_cooldown.clone();
        let cooldown = cooldown.clone();

        Callback::from(move |_: MouseEvent| {
            if *cooldown == 0 {
                start_cooldown.emit(());
                run_analysis.emit(true);
            }
        })
    };

    let in_flight = state.is_request_in_flight();

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{"Análise de Contrato"}</h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Envie seu contrato (PDF ou DOCX) para análise de risco."}
                </p>
            </div>

            <FileUpload
                on_file_select={on_file_select}
                disabled={in_flight}
            />

            {if let Some(file) = &state.selected {
                html! {
                    <div class="flex items-center gap-4">
                        <p class="text-sm">
                            {"Arquivo pronto para análise: "}
                            <strong>{&file.name}</strong>
                        </p>
                        <button
                            onclick={on_submit}
                            disabled={in_flight}
                            class="px-4 py-2 rounded-md text-sm font-medium
                                   text-white bg-neutral-900
                                   hover:bg-neutral-800 dark:bg-neutral-100
                                   dark:text-neutral-900
                                   dark:hover:bg-neutral-200
                                   disabled:opacity-50"
                        >
                            {if in_flight {
                                "Analisando..."
                            } else {
                                "Analisar Agora"
                            }}
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}

            {match &state.result {
                Some(record) if record.is_error() => html! {
                    <div class="rounded-lg border border-red-200 bg-red-50
                                dark:border-red-800 dark:bg-red-900/20 p-4">
                        <h2 class="font-semibold text-red-700
                                   dark:text-red-400">
                            {"Erro na Análise"}
                        </h2>
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {record.erro.clone().unwrap_or_default()}
                        </p>
                    </div>
                },
                Some(record) => html! {
                    <>
                        {if is_ai_available(record.analise_ia()) {
                            html! {}
                        } else {
                            html! {
                                <div>
                                    <button
                                        onclick={on_retry_ai.clone()}
                                        disabled={in_flight || *cooldown > 0}
                                        title="Solicita apenas a análise da IA \
                                               reaproveitando o texto e regras \
                                               do cache"
                                        class="px-4 py-2 rounded-md text-sm
                                               font-medium border
                                               border-neutral-300
                                               dark:border-neutral-600
                                               hover:bg-neutral-100
                                               dark:hover:bg-neutral-800
                                               disabled:opacity-50"
                                    >
                                        {if in_flight {
                                            "Requisitando IA...".to_string()
                                        } else if *cooldown > 0 {
                                            format!(
                                                "Tentar IA novamente ({}s)",
                                                *cooldown
                                            )
                                        } else {
                                            "Tentar IA novamente".to_string()
                                        }}
                                    </button>
                                </div>
                            }
                        }}
                        <AnalysisResultView result={record.clone()} />
                    </>
                },
                None => html! {},
            }}
        </div>
    }
}
