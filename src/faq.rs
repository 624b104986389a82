//! Help-centre FAQ entries and their search filter.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl FaqItem {
    fn new(id: &str, question: &str, answer: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
        }
    }
}

/// Returns the built-in FAQ entries.
pub fn default_faq() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "1",
            "Como adicionar uma nova tarefa?",
            "Clique no botão \"Nova Tarefa\" na aba de tarefas ou use o botão \"Adicionar\" \
             no menu lateral. Preencha o nome, descrição e defina o status da tarefa.",
            "tarefas",
        ),
        FaqItem::new(
            "2",
            "Como editar uma meta existente?",
            "Passe o mouse sobre a meta desejada e clique no botão \"Editar\" que aparecerá. \
             Você pode alterar o tipo, progresso, valor alvo e outras configurações.",
            "metas",
        ),
        FaqItem::new(
            "3",
            "Como exportar meus dados?",
            "Vá para Configurações > Exportação de Dados e escolha o formato desejado \
             (PDF, Excel, CSV ou JSON). Clique em \"Exportar Relatório\" ou \"Exportar Dados\".",
            "dados",
        ),
        FaqItem::new(
            "4",
            "Como alterar o tema do dashboard?",
            "Use o botão de alternância de tema no canto superior direito ou vá para \
             Configurações > Tema e Aparência para personalizar a interface.",
            "configurações",
        ),
        FaqItem::new(
            "5",
            "Como ativar notificações?",
            "Acesse Configurações > Notificações e ative as opções de notificação por e-mail \
             ou push conforme sua preferência.",
            "notificações",
        ),
        FaqItem::new(
            "6",
            "O dashboard funciona offline?",
            "O dashboard requer conexão com a internet para sincronizar dados. Algumas \
             funcionalidades básicas podem funcionar offline temporariamente.",
            "técnico",
        ),
        FaqItem::new(
            "7",
            "Como resetar minhas configurações?",
            "Vá para Configurações e clique em \"Restaurar Padrões\" para voltar às \
             configurações originais do sistema.",
            "configurações",
        ),
        FaqItem::new(
            "8",
            "Posso conectar com outros aplicativos?",
            "Sim, vá para Configurações > Integrações Externas e ative a sincronização \
             automática para conectar com serviços externos.",
            "integrações",
        ),
    ]
}

/// Returns the items whose question, answer or category contains `term`, ignoring case.
///
/// An empty term keeps every item.
#[must_use]
pub fn search_faq<'a>(items: &'a [FaqItem], term: &str) -> Vec<&'a FaqItem> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.question.to_lowercase().contains(&term)
                || item.answer.to_lowercase().contains(&term)
                || item.category.to_lowercase().contains(&term)
        })
        .collect()
}
