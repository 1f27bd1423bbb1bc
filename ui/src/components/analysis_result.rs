use payloads::{AnalysisResult, AttentionPoint};
use yew::prelude::*;

use super::MarkdownText;
use crate::view_model::{
    clamp_score_percent, is_ai_available, risk_badge_color,
    risk_point_color, score_gradient,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// A non-error analysis record. Error records render through the
    /// page's error panel instead.
    pub result: AnalysisResult,
}

/// The full risk report: score summary, rule-based findings, the AI
/// panel (or the rules-only notice when the AI text signals
/// unavailability), and the detailed attention points.
#[function_component]
pub fn AnalysisResultView(props: &Props) -> Html {
    let result = &props.result;

    let score_percent = clamp_score_percent(&result.score_risco);
    let badge_color = risk_badge_color(result.nivel_risco());
    let ai_available = is_ai_available(result.analise_ia());

    html! {
        <div class="space-y-6">
            <h2 class="text-xl font-semibold">
                {format!(
                    "Resultado da Análise do Arquivo: \"{}\"",
                    result.display_name()
                )}
                {if result.cache_hit {
                    html! {
                        <span
                            title="Resultado carregado do cache para maior rapidez"
                            class="ml-3 align-middle text-xs px-2 py-1 rounded-full
                                   bg-sky-100 text-sky-700
                                   dark:bg-sky-900 dark:text-sky-300"
                        >
                            {"cache"}
                        </span>
                    }
                } else {
                    html! {}
                }}
            </h2>

            <ScoreCard
                score_percent={score_percent}
                nivel_risco={result.nivel_risco().to_string()}
                badge_color={badge_color}
                total_clausulas={result.total_clausulas_problem}
            />

            <RulesSummary
                score_percent={score_percent}
                nivel_risco={result.nivel_risco().to_string()}
                badge_color={badge_color}
                total_clausulas={result.total_clausulas_problem}
                pontos={result.pontos_atencao.clone()}
            />

            {if ai_available {
                html! {
                    <div class="rounded-lg border border-neutral-200
                                dark:border-neutral-700 p-4">
                        <div class="mb-3">
                            <h3 class="font-semibold">
                                {"🤖 Análise da IA (Gemini)"}
                            </h3>
                            <p class="text-sm text-neutral-500">
                                {"Resumo estratégico elaborado automaticamente"}
                            </p>
                        </div>
                        <MarkdownText text={result.analise_ia().to_string()} />
                    </div>
                }
            } else {
                html! {
                    <div class="rounded-lg border border-amber-200 bg-amber-50
                                dark:border-amber-800 dark:bg-amber-900/20
                                text-amber-800 dark:text-amber-300
                                px-4 py-3 text-sm">
                        {"🤖 A análise por IA está indisponível no momento \
                          (cota/erro). Exibindo apenas a análise baseada em \
                          regras."}
                    </div>
                }
            }}

            <div>
                <h3 class="font-semibold mb-3">
                    {"Detalhamento dos Pontos de Atenção"}
                </h3>
                {if result.pontos_atencao.is_empty() {
                    html! {
                        <p class="text-sm text-neutral-500">
                            {"Nenhum ponto de atenção específico encontrado \
                              pela análise de regras."}
                        </p>
                    }
                } else {
                    result.pontos_atencao.iter().map(|ponto| html! {
                        <AttentionPointCard ponto={ponto.clone()} />
                    }).collect::<Html>()
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ScoreCardProps {
    score_percent: u8,
    nivel_risco: String,
    badge_color: &'static str,
    total_clausulas: u32,
}

#[function_component]
fn ScoreCard(props: &ScoreCardProps) -> Html {
    html! {
        <div class="rounded-lg border border-neutral-200 dark:border-neutral-700
                    p-4 flex items-center gap-6">
            <div class="flex items-baseline gap-1">
                <span class="text-4xl font-bold">{props.score_percent}</span>
                <span class="text-neutral-500">{"/100"}</span>
            </div>
            <div class="flex-1 space-y-2">
                <div class="h-3 rounded-full bg-neutral-100
                            dark:bg-neutral-800 overflow-hidden">
                    <div
                        class="h-full rounded-full"
                        style={format!(
                            "width: {}%; background: {}",
                            props.score_percent,
                            score_gradient(props.score_percent)
                        )}
                    />
                </div>
                <div class="flex items-center gap-3 text-sm">
                    <span
                        class="px-2 py-1 rounded text-white font-medium"
                        style={format!("background: {}", props.badge_color)}
                    >
                        {&props.nivel_risco}
                    </span>
                    <span class="text-neutral-600 dark:text-neutral-400">
                        {"Cláusulas problemáticas: "}
                        <strong>{props.total_clausulas}</strong>
                    </span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RulesSummaryProps {
    score_percent: u8,
    nivel_risco: String,
    badge_color: &'static str,
    total_clausulas: u32,
    pontos: Vec<AttentionPoint>,
}

#[function_component]
fn RulesSummary(props: &RulesSummaryProps) -> Html {
    html! {
        <div class="rounded-xl p-6 text-white shadow"
             style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%)">
            <div class="mb-4">
                <h3 class="font-semibold text-lg">
                    {"📋 Análise Baseada em Regras"}
                </h3>
                <p class="text-sm text-white/90">
                    {"Avaliação automática segundo critérios jurídicos e \
                      boas práticas"}
                </p>
            </div>

            <div class="rounded-lg bg-white/95 text-neutral-800 p-5 space-y-5">
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 text-center">
                    <div>
                        <div class="text-sm text-neutral-500 mb-1">
                            {"Score de Risco"}
                        </div>
                        <div class="text-3xl font-bold">
                            {props.score_percent}
                        </div>
                    </div>
                    <div>
                        <div class="text-sm text-neutral-500 mb-1">
                            {"Nível de Risco"}
                        </div>
                        <span
                            class="inline-block px-4 py-2 rounded text-white
                                   text-lg font-bold"
                            style={format!("background: {}", props.badge_color)}
                        >
                            {&props.nivel_risco}
                        </span>
                    </div>
                    <div>
                        <div class="text-sm text-neutral-500 mb-1">
                            {"Cláusulas Problemáticas"}
                        </div>
                        <div class="text-3xl font-bold text-red-500">
                            {props.total_clausulas}
                        </div>
                    </div>
                </div>

                {if props.pontos.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div>
                            <h4 class="font-semibold mb-2">
                                {format!(
                                    "⚠️ Pontos de Atenção Identificados ({})",
                                    props.pontos.len()
                                )}
                            </h4>
                            <div class="space-y-2">
                                {for props.pontos.iter().map(|ponto| html! {
                                    <div
                                        class="px-4 py-3 rounded bg-neutral-50
                                               text-sm"
                                        style={format!(
                                            "border-left: 4px solid {}",
                                            risk_point_color(&ponto.tipo)
                                        )}
                                    >
                                        <strong style={format!(
                                            "color: {}",
                                            risk_point_color(&ponto.tipo)
                                        )}>
                                            {format!("{}:", ponto.tipo)}
                                        </strong>
                                        {" "}
                                        {&ponto.categoria}
                                    </div>
                                })}
                            </div>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AttentionPointCardProps {
    ponto: AttentionPoint,
}

#[function_component]
fn AttentionPointCard(props: &AttentionPointCardProps) -> Html {
    let ponto = &props.ponto;
    let color = risk_point_color(&ponto.tipo);

    html! {
        <div
            class="rounded bg-neutral-50 dark:bg-neutral-800 p-4 mb-3
                   space-y-1 text-sm"
            style={format!("border-left: 5px solid {color}")}
        >
            <h4 class="font-semibold">
                <span style={format!("color: {color}")}>{&ponto.tipo}</span>
                {format!(": {}", ponto.categoria)}
            </h4>
            <p>
                <strong>{"Descrição: "}</strong>
                {&ponto.descricao}
            </p>
            <p>
                <strong>{"Impacto Potencial: "}</strong>
                {&ponto.impacto}
            </p>
            <p>
                <strong>{"Recomendação: "}</strong>
                {&ponto.recomendacao}
            </p>
            {if let Some(artigo) = &ponto.artigo_legal {
                html! {
                    <p class="text-xs text-neutral-500">
                        <strong>{"Base Legal: "}</strong>
                        {artigo}
                    </p>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
