use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod upload;

pub use api_client::{APIClient, ClientError};
pub use requests::SelectedFile;

/// Fallback shown when the service omits the risk level.
pub const UNKNOWN_RISK_LEVEL: &str = "DESCONHECIDO";

/// Fallback shown when the service omits the AI analysis text.
pub const NO_AI_ANALYSIS: &str = "Nenhuma análise da IA disponível.";

/// Fallback shown when the service omits the analyzed file name.
pub const UNNAMED_FILE: &str = "Arquivo sem nome";

/// One rule-based finding inside an analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttentionPoint {
    /// Risk level of this finding (CRÍTICO, ALTO, MÉDIO, ...).
    pub tipo: String,
    pub categoria: String,
    pub descricao: String,
    pub impacto: String,
    pub recomendacao: String,
    /// Legal article backing the finding, when the rule provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artigo_legal: Option<String>,
}

/// The analysis report returned by `POST /analisar/`, or an error record
/// produced at the submission boundary.
///
/// Every field is defaulted: the backend has evolved and older cached
/// payloads may omit fields or use the legacy `nomeAdendo` key. A record
/// is either an error record (`erro` set, analysis fields ignored) or an
/// analysis record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(rename = "nivelRisco", skip_serializing_if = "Option::is_none")]
    pub nivel_risco: Option<String>,
    /// Nominally 0-100, but not guaranteed numeric-typed on the wire.
    /// Display code clamps it; see the ui view-model.
    #[serde(rename = "scoreRisco")]
    pub score_risco: serde_json::Value,
    #[serde(rename = "pontosAtencao")]
    pub pontos_atencao: Vec<AttentionPoint>,
    #[serde(rename = "totalClausulasProblem")]
    pub total_clausulas_problem: u32,
    #[serde(rename = "analiseIA", skip_serializing_if = "Option::is_none")]
    pub analise_ia: Option<String>,
    #[serde(rename = "nomeArquivo", skip_serializing_if = "Option::is_none")]
    pub nome_arquivo: Option<String>,
    /// Legacy key from before the service was generalized past addenda.
    #[serde(rename = "nomeAdendo", skip_serializing_if = "Option::is_none")]
    pub nome_adendo: Option<String>,
    #[serde(rename = "cacheHit")]
    pub cache_hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

impl AnalysisResult {
    /// Builds an error record for a failed submission.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            erro: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.erro.is_some()
    }

    pub fn nivel_risco(&self) -> &str {
        self.nivel_risco.as_deref().unwrap_or(UNKNOWN_RISK_LEVEL)
    }

    pub fn analise_ia(&self) -> &str {
        self.analise_ia.as_deref().unwrap_or(NO_AI_ANALYSIS)
    }

    /// Display filename: prefers `nomeArquivo`, falls back to the legacy
    /// `nomeAdendo`, then to a fixed placeholder.
    pub fn display_name(&self) -> &str {
        self.nome_arquivo
            .as_deref()
            .or(self.nome_adendo.as_deref())
            .unwrap_or(UNNAMED_FILE)
    }
}
