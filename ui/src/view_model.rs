//! Pure display derivations over a raw [`payloads::AnalysisResult`].
//!
//! The badge and AI-availability classifiers are substring heuristics
//! inherited from the service's existing clients; their marker lists are
//! preserved verbatim for behavioral parity even where they are known to
//! be imprecise (see `risk_badge_color` and `is_ai_available`).

use serde_json::Value;

/// Coerce the wire score to a display percentage in [0, 100].
///
/// The service nominally sends a number, but numeric strings and garbage
/// show up in cached payloads; anything non-numeric displays as 0.
pub fn clamp_score_percent(value: &Value) -> u8 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if !number.is_finite() {
        return 0;
    }
    number.clamp(0.0, 100.0).round() as u8
}

/// CSS gradient for the score bar.
pub fn score_gradient(score: u8) -> &'static str {
    if score >= 75 {
        "linear-gradient(90deg,#52c41a,#1890ff)"
    } else if score >= 50 {
        "linear-gradient(90deg,#ffc107,#fa8c16)"
    } else {
        "linear-gradient(90deg,#ff4d4f,#d9363e)"
    }
}

/// Badge color for the overall risk level.
///
/// Case-insensitive substring match. The lone `M` check is meant to catch
/// "MÉDIO" but fires on any level containing an M; inherited behavior,
/// kept as-is.
pub fn risk_badge_color(nivel: &str) -> &'static str {
    if nivel.is_empty() {
        return "#6c757d";
    }
    let n = nivel.to_uppercase();
    if n.contains("CR") || n.contains("ALTO") {
        "#dc3545"
    } else if n.contains('M') {
        "#faad14"
    } else {
        "#52c41a"
    }
}

/// Accent color for one attention point, by exact `tipo` match.
pub fn risk_point_color(tipo: &str) -> &'static str {
    match tipo {
        "CRÍTICO" => "#ff4d4f",
        "ALTO" => "#faad14",
        "MÉDIO" => "#1890ff",
        _ => "#52c41a",
    }
}

/// Markers in the AI text that signal an error or unavailability rather
/// than an actual analysis (quota exhausted, missing key, provider
/// error). Substring match on lowercased text.
const AI_UNAVAILABLE_MARKERS: &[&str] = &[
    "❌",
    "erro",
    "error",
    "429",
    "quota",
    "na análise com gemini",
    "na analise com gemini",
    "não foi configurada",
    "nao foi configurada",
    "ia não configurada",
    "ia nao configurada",
];

/// Whether the AI text is an actual analysis, as opposed to an
/// error/unavailability marker.
///
/// Necessarily imprecise: a legitimate summary containing the word
/// "erro" misclassifies. Accepted tradeoff, inherited behavior.
pub fn is_ai_available(text: &str) -> bool {
    let t = text.trim().to_lowercase();
    if t.is_empty() {
        return false;
    }
    !AI_UNAVAILABLE_MARKERS.iter().any(|marker| t.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clamp_handles_numbers_strings_and_garbage() {
        assert_eq!(clamp_score_percent(&json!(62)), 62);
        assert_eq!(clamp_score_percent(&json!(62.4)), 62);
        assert_eq!(clamp_score_percent(&json!("85")), 85);
        assert_eq!(clamp_score_percent(&json!(" 40 ")), 40);
        assert_eq!(clamp_score_percent(&json!("abc")), 0);
        assert_eq!(clamp_score_percent(&json!(null)), 0);
        assert_eq!(clamp_score_percent(&json!(true)), 0);
        assert_eq!(clamp_score_percent(&json!([1])), 0);
    }

    #[test]
    fn clamp_bounds_out_of_range_scores() {
        assert_eq!(clamp_score_percent(&json!(150)), 100);
        assert_eq!(clamp_score_percent(&json!(-5)), 0);
        assert_eq!(clamp_score_percent(&json!("999")), 100);
        assert_eq!(clamp_score_percent(&json!("NaN")), 0);
    }

    #[test]
    fn gradient_thresholds() {
        assert!(score_gradient(75).contains("#52c41a"));
        assert!(score_gradient(100).contains("#52c41a"));
        assert!(score_gradient(50).contains("#ffc107"));
        assert!(score_gradient(74).contains("#ffc107"));
        assert!(score_gradient(0).contains("#ff4d4f"));
        assert!(score_gradient(49).contains("#ff4d4f"));
    }

    #[test]
    fn badge_color_matches_substrings_case_insensitively() {
        assert_eq!(risk_badge_color("CRÍTICO"), "#dc3545");
        assert_eq!(risk_badge_color("crítico"), "#dc3545");
        assert_eq!(risk_badge_color("ALTO"), "#dc3545");
        assert_eq!(risk_badge_color("MÉDIO"), "#faad14");
        assert_eq!(risk_badge_color("BAIXO"), "#52c41a");
        assert_eq!(risk_badge_color("DESCONHECIDO"), "#52c41a");
        assert_eq!(risk_badge_color(""), "#6c757d");
        // The broad M match, preserved from the original classifier
        assert_eq!(risk_badge_color("MODERADO"), "#faad14");
    }

    #[test]
    fn point_colors_are_exact_matches() {
        assert_eq!(risk_point_color("CRÍTICO"), "#ff4d4f");
        assert_eq!(risk_point_color("ALTO"), "#faad14");
        assert_eq!(risk_point_color("MÉDIO"), "#1890ff");
        assert_eq!(risk_point_color("BAIXO"), "#52c41a");
        // Case matters here, unlike the badge
        assert_eq!(risk_point_color("crítico"), "#52c41a");
    }

    #[test]
    fn ai_unavailable_markers_are_detected_in_any_case() {
        assert!(!is_ai_available(""));
        assert!(!is_ai_available("   "));
        assert!(!is_ai_available("❌ Erro na análise com Gemini"));
        assert!(!is_ai_available("QUOTA excedida"));
        assert!(!is_ai_available("HTTP 429 too many requests"));
        assert!(!is_ai_available("A chave da IA não foi configurada"));
        assert!(!is_ai_available("IA nao configurada"));
    }

    #[test]
    fn ordinary_prose_counts_as_available() {
        assert!(is_ai_available(
            "O contrato apresenta cláusulas de multa acima do usual."
        ));
        assert!(is_ai_available("**Resumo**\n\n- item um\n- item dois"));
    }
}
