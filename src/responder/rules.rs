use std::collections::HashSet;

use crate::error::{ChatError, Result};

use super::MatchMode;

/// One topic: its trigger keywords and canned response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    key: String,
    response_text: String,
    keywords: Vec<String>,
}

impl RuleEntry {
    /// Builds an entry, lower-casing every keyword.
    pub fn new<I, K>(key: impl Into<String>, response_text: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            key: key.into(),
            response_text: response_text.into(),
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Ordered topic entries plus the unconditional fallback response.
///
/// Entry order decides ties: the first entry with any matching keyword wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
    default_response_text: String,
    match_mode: MatchMode,
}

impl RuleTable {
    /// Builds a table using [`MatchMode::Substring`].
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidArgument`] on duplicate keys, empty or blank
    /// keyword lists, or an empty default response.
    pub fn new(entries: Vec<RuleEntry>, default_response_text: impl Into<String>) -> Result<Self> {
        let default_response_text = default_response_text.into();
        if default_response_text.trim().is_empty() {
            return Err(ChatError::InvalidArgument(
                "default response must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(ChatError::InvalidArgument(format!(
                    "duplicate topic key '{}'",
                    entry.key
                )));
            }
            if entry.keywords.is_empty() {
                return Err(ChatError::InvalidArgument(format!(
                    "topic '{}' has no keywords",
                    entry.key
                )));
            }
            // A blank keyword would match every utterance.
            if entry.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(ChatError::InvalidArgument(format!(
                    "topic '{}' has a blank keyword",
                    entry.key
                )));
            }
        }

        Ok(Self {
            entries,
            default_response_text,
            match_mode: MatchMode::default(),
        })
    }

    #[must_use]
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn default_response_text(&self) -> &str {
        &self.default_response_text
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
}

const DEFAULT_RESPONSE: &str = "Desculpe, não entendi sua pergunta. Posso ajudar com tarefas, \
    finanças, produtos, metas, perfil ou configurações. Tente usar uma dessas palavras.";

/// Returns the built-in help topics.
pub fn build_default_rule_table() -> RuleTable {
    let entries = vec![
        RuleEntry::new(
            "task",
            "Para adicionar uma tarefa, clique em \"Nova Tarefa\" na aba de tarefas. \
             Preencha o nome, a descrição e defina o status. Para editar ou excluir, \
             use os botões ao lado de cada tarefa.",
            ["tarefa", "afazer", "pendente", "to-do"],
        ),
        RuleEntry::new(
            "finance",
            "Na visão financeira você acompanha saldo, receitas e despesas. Registre \
             uma movimentação em \"Nova Transação\" e veja o resumo nos relatórios.",
            ["finança", "financeiro", "saldo", "receita", "despesa", "gasto", "dinheiro"],
        ),
        RuleEntry::new(
            "product",
            "Para cadastrar um produto, abra o Gerenciador de Produtos e clique em \
             \"Adicionar Produto\". Informe nome, categoria, preço e estoque.",
            ["produto", "catálogo", "estoque", "preço"],
        ),
        RuleEntry::new(
            "goal",
            "Para criar ou editar uma meta, acesse a seção de metas. Passe o mouse sobre \
             a meta e clique em \"Editar\" para alterar o tipo, o progresso e o valor alvo.",
            ["meta", "objetivo", "progresso"],
        ),
        RuleEntry::new(
            "profile",
            "Seu perfil fica no menu do usuário, no canto superior direito. Lá você \
             altera nome, e-mail e foto.",
            ["perfil", "usuário", "conta", "foto"],
        ),
        RuleEntry::new(
            "settings",
            "Em Configurações você ajusta tema, notificações, idioma e exportação de \
             dados. Use \"Restaurar Padrões\" para voltar às opções originais.",
            ["configura", "tema", "notifica", "idioma", "exportar"],
        ),
    ];

    RuleTable {
        entries,
        default_response_text: DEFAULT_RESPONSE.to_string(),
        match_mode: MatchMode::default(),
    }
}
